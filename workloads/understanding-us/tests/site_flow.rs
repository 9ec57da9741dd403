//! End-to-end flows through `SiteApp` over the in-memory document.

use std::rc::Rc;

use futures::executor::block_on;
use shell_sdk::prelude::*;
use understanding_us::{
    DispatchError, DonationInterval, ListOutcome, PageKind, SiteApp, SiteSettings, WidgetAction,
};

const DONATE_VIEW: &str = r#"<section class="donate">
  <button id="give-10" class="donate-option selected" data-action="donate" data-amount="10" data-interval="o">$10</button>
  <button id="give-25" class="donate-option" data-action="donate" data-amount="25" data-interval="o">$25</button>
  <button id="give-custom" class="donate-option" data-action="donate" data-amount="custom" data-interval="m">Other</button>
  <iframe id="dbox-iframe" src="about:blank"></iframe>
</section>"#;

const VOLUNTEER_VIEW: &str = r#"<section class="volunteer">
  <button id="pill-events" class="pill-btn active" data-action="tab" data-tab="events">Events</button>
  <button id="pill-mentors" class="pill-btn" data-action="tab" data-tab="mentors">Mentors</button>
  <button id="pill-remote" class="pill-btn" data-action="tab" data-tab="remote">Remote</button>
  <div id="tab-events" class="tab-content active"></div>
  <div id="tab-mentors" class="tab-content"></div>
</section>"#;

const PRESS_JSON: &str = r#"[
  {"title": "Clinic opens", "date": "May 2024", "source": "Gazette", "link": "https://news.example/1"},
  {"title": "Volunteers honored", "date": "Jan 2024", "source": "Herald", "link": "https://news.example/2"}
]"#;

type App = SiteApp<MemoryDocument, Rc<MemoryTransport>>;

struct Site {
    app: App,
    transport: Rc<MemoryTransport>,
    logs: LogBuffer,
}

fn site_transport() -> MemoryTransport {
    MemoryTransport::new()
        .with_body("views/home.html", "<h1>Welcome</h1>")
        .with_body("views/donate.html", DONATE_VIEW)
        .with_body("views/volunteer.html", VOLUNTEER_VIEW)
        .with_body("views/media.html", r#"<div id="press-container"></div>"#)
        .with_body("views/blog.html", r#"<div id="blog-container"></div>"#)
        .with_body("views/team.html", "<h1>Team</h1>")
        .with_body("data/press.json", PRESS_JSON)
        .with_body("data/blog.json", "not json")
}

fn site() -> Site {
    let transport = Rc::new(site_transport());
    let logs = LogBuffer::new();
    let logger = StructuredLogger::new("understanding-us").with_sink(LogSink::Memory(logs.clone()));
    let document = MemoryDocument::with_body(r#"<nav></nav><main id="app-container"></main>"#);
    let app = SiteApp::new(SiteSettings::default(), document, transport.clone(), logger);
    Site {
        app,
        transport,
        logs,
    }
}

fn container(app: &App) -> String {
    app.document().inner_html_by_id("app-container").unwrap()
}

fn click(app: &App, id: &str) -> Result<bool, DispatchError> {
    let element = app.document().element_by_id(id).unwrap();
    app.dispatch_element(&element)
}

fn has_class(app: &App, id: &str, class: &str) -> bool {
    let doc = app.document();
    doc.has_class(&doc.element_by_id(id).unwrap(), class)
}

fn frame_src(app: &App) -> Option<String> {
    let doc = app.document();
    doc.attribute(&doc.element_by_id("dbox-iframe")?, "src")
}

#[test]
fn test_initial_load_renders_home() {
    let Site { app, .. } = site();
    let outcome = block_on(app.navigate(""));
    assert!(matches!(outcome, NavigationOutcome::Rendered { .. }));
    assert_eq!(container(&app), "<h1>Welcome</h1>");
}

#[test]
fn test_donation_selection_flow() {
    let Site { app, .. } = site();
    block_on(app.navigate("#donate"));
    assert_eq!(app.pages().bound(), Some(PageKind::Donation));

    assert_eq!(click(&app, "give-25"), Ok(true));
    assert!(has_class(&app, "give-25", "selected"));
    assert!(!has_class(&app, "give-10", "selected"));
    assert_eq!(
        frame_src(&app).as_deref(),
        Some("https://donorbox.org/embed/understanding-us?default_interval=o&amount=25")
    );

    assert_eq!(click(&app, "give-custom"), Ok(true));
    let selected: Vec<_> = ["give-10", "give-25", "give-custom"]
        .into_iter()
        .filter(|id| has_class(&app, id, "selected"))
        .collect();
    assert_eq!(selected, vec!["give-custom"]);
    assert_eq!(
        frame_src(&app).as_deref(),
        Some("https://donorbox.org/embed/understanding-us?default_interval=m")
    );
}

#[test]
fn test_volunteer_tabs_flow() {
    let Site { app, logs, .. } = site();
    block_on(app.navigate("#volunteer"));

    assert_eq!(click(&app, "pill-mentors"), Ok(true));
    assert!(has_class(&app, "tab-mentors", "active"));
    assert!(!has_class(&app, "tab-events", "active"));
    assert!(has_class(&app, "pill-mentors", "active"));
    assert!(!has_class(&app, "pill-events", "active"));

    // no panel for "remote": every panel ends up hidden
    assert_eq!(click(&app, "pill-remote"), Ok(true));
    assert!(!has_class(&app, "tab-mentors", "active"));
    assert!(!has_class(&app, "tab-events", "active"));
    assert!(has_class(&app, "pill-remote", "active"));
    assert!(logs.contains("Tab panel missing"));
}

#[test]
fn test_tab_switch_without_trigger_uses_bound_button() {
    let Site { app, .. } = site();
    block_on(app.navigate("#volunteer"));

    let action = WidgetAction::SwitchTab {
        tab: "mentors".to_string(),
    };
    assert_eq!(app.dispatch(&action, None), Ok(()));
    assert!(has_class(&app, "pill-mentors", "active"));
    assert!(has_class(&app, "tab-mentors", "active"));
}

#[test]
fn test_actions_unbound_after_leaving_view() {
    let Site { app, logs, .. } = site();
    block_on(app.navigate("#donate"));
    block_on(app.navigate("#team"));

    let action = WidgetAction::SelectDonation {
        amount: Some(10),
        interval: DonationInterval::OneTime,
    };
    assert_eq!(
        app.dispatch(&action, None),
        Err(DispatchError::NotBound { action: "donate" })
    );
    assert!(logs.contains("Action ignored"));
}

#[test]
fn test_media_view_renders_press() {
    let Site { app, .. } = site();
    block_on(app.navigate("#media"));

    assert_eq!(app.pages().last_list(), Some(ListOutcome::Rendered(2)));
    let press = app.document().inner_html_by_id("press-container").unwrap();
    assert_eq!(press.matches("press-list-item").count(), 2);
    assert!(press.find("Clinic opens").unwrap() < press.find("Volunteers honored").unwrap());
    assert!(press.contains("Gazette"));
    assert!(press.contains("Herald"));
    assert!(press.contains("https://news.example/1"));
}

#[test]
fn test_blog_malformed_data_shows_placeholder() {
    let Site { app, logs, .. } = site();
    block_on(app.navigate("#blog"));

    assert_eq!(app.pages().last_list(), Some(ListOutcome::Placeholder));
    assert!(app
        .document()
        .inner_html_by_id("blog-container")
        .unwrap()
        .contains("Stories loading..."));
    assert_eq!(logs.at_level(LogLevel::Warn).len(), 1);
}

#[test]
fn test_list_data_refetched_per_render() {
    let Site { app, transport, .. } = site();
    block_on(app.navigate("#media"));
    block_on(app.navigate("#media"));

    assert_eq!(transport.request_count("views/media.html"), 1);
    assert_eq!(transport.request_count("data/press.json"), 2);
}

#[test]
fn test_list_skipped_on_views_without_container() {
    let Site { app, transport, .. } = site();
    block_on(app.navigate("#team"));
    block_on(app.navigate("#donate"));
    assert_eq!(transport.request_count("data/press.json"), 0);
    assert_eq!(transport.request_count("data/blog.json"), 0);
}

#[test]
fn test_missing_view_shows_not_found_and_unbinds() {
    let Site { app, .. } = site();
    block_on(app.navigate("#donate"));
    let outcome = block_on(app.navigate("#careers"));

    assert!(matches!(outcome, NavigationOutcome::NotFound { .. }));
    assert!(container(&app).contains("Page Not Found"));
    assert_eq!(app.pages().bound(), None);
}

#[test]
fn test_preload_then_navigate_hits_cache() {
    let Site { app, .. } = site();
    block_on(app.navigate(""));
    let report = block_on(app.preload_after(&NoDelay));

    assert_eq!(report.len(), 9);
    assert_eq!(report.already_cached().len(), 1);
    // impact, family and practice have no fragment
    assert_eq!(report.failed().len(), 3);

    let outcome = block_on(app.navigate("#team"));
    assert_eq!(
        outcome,
        NavigationOutcome::Rendered {
            view: ViewName::new("team").unwrap(),
            cache_status: CacheStatus::Hit,
        }
    );
}

#[test]
fn test_preload_runs_alongside_first_navigation() {
    let transport = Rc::new(site_transport().with_delay("views/home.html", 3));
    let logger = StructuredLogger::new("understanding-us").with_sink(LogSink::Memory(LogBuffer::new()));
    let document = MemoryDocument::with_body(r#"<main id="app-container"></main>"#);
    let app = SiteApp::new(SiteSettings::default(), document, transport.clone(), logger);

    let (outcome, report) =
        block_on(async { futures::join!(app.navigate(""), app.preload_after(&NoDelay)) });

    assert!(matches!(outcome, NavigationOutcome::Rendered { .. }));
    assert_eq!(container(&app), "<h1>Welcome</h1>");
    // home was still uncached when the preloader started, so it fetched it too
    assert_eq!(transport.request_count("views/home.html"), 2);
    let home = ViewName::new("home").unwrap();
    assert!(matches!(
        report.outcome(&home),
        Some(PreloadOutcome::Loaded | PreloadOutcome::AlreadyCached)
    ));
}
