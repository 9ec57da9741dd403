//! Understanding Us - single-page site shell for the nonprofit's website.
//!
//! This workload provides:
//! - Fragment routing over `views/<name>.html` with a session cache
//! - Background preloading of every view after the first render
//! - Donation selector and volunteer tabs driven by `data-action` attributes
//! - Press and blog lists rendered from JSON

mod actions;
#[cfg(target_arch = "wasm32")]
mod browser;
mod config;
mod data;
mod lists;
mod pages;
mod sections;

use std::rc::Rc;

use shell_sdk::prelude::*;

pub use actions::{ActionError, DispatchError, WidgetAction, ACTION_ATTRIBUTE};
pub use config::{BlogSettings, DonationSettings, ListTarget, PressSettings, SiteSettings, TabSettings};
pub use data::{BlogItem, PressItem};
pub use lists::{load_blog, load_list, load_press, ListOutcome};
pub use pages::{
    DonationInterval, DonationWidget, PageBinding, PageKind, SitePages, UnknownInterval,
    VolunteerTabs,
};
pub use sections::{render_blog, render_placeholder, render_press};

/// The assembled site: router, preloader and page widgets over one document.
pub struct SiteApp<D: Document, T: Transport> {
    settings: Rc<SiteSettings>,
    document: Rc<D>,
    router: Router<D, T, SitePages<D, T>>,
    preloader: Preloader<T>,
    logger: StructuredLogger,
}

impl<D: Document, T: Transport> SiteApp<D, T> {
    /// Wire the site together.
    pub fn new(settings: SiteSettings, document: D, transport: T, logger: StructuredLogger) -> Self {
        let settings = Rc::new(settings);
        let document = Rc::new(document);
        let state = Rc::new(AppState::new(settings.shell.clone()));
        let client = Rc::new(FetchClient::new(transport));

        let pages = SitePages::new(settings.clone(), client.clone(), logger.clone());
        let router = Router::new(state.clone(), document.clone(), client.clone(), pages, logger.clone());
        let preloader = Preloader::new(state, client);

        Self {
            settings,
            document,
            router,
            preloader,
            logger,
        }
    }

    /// Render the view named by a fragment identifier.
    pub async fn navigate(&self, fragment: &str) -> NavigationOutcome {
        self.router.navigate(fragment).await
    }

    /// Warm the cache for every view now.
    pub async fn preload(&self) -> PreloadReport {
        let report = self.preloader.run().await;
        self.log_preload(&report);
        report
    }

    /// Warm the cache after the configured delay.
    pub async fn preload_after<W: Delay>(&self, delay: &W) -> PreloadReport {
        let report = self.preloader.run_after(delay).await;
        self.log_preload(&report);
        report
    }

    /// Hand an action to the current view's widget.
    pub fn dispatch(
        &self,
        action: &WidgetAction,
        trigger: Option<&D::Element>,
    ) -> Result<(), DispatchError> {
        let result = self
            .router
            .hooks()
            .dispatch(&self.document, action, trigger);
        if let Err(err) = &result {
            self.logger.warn_with("Action ignored", &[("error", err)]);
        }
        result
    }

    /// Read the action an element declares and dispatch it with the element
    /// as trigger. Returns `Ok(false)` for elements without an action.
    pub fn dispatch_element(&self, element: &D::Element) -> Result<bool, DispatchError> {
        let action = match WidgetAction::from_element(self.document.as_ref(), element) {
            Ok(Some(action)) => action,
            Ok(None) => return Ok(false),
            Err(err) => {
                self.logger.warn_with("Malformed action", &[("error", &err)]);
                return Err(err.into());
            }
        };
        self.dispatch(&action, Some(element)).map(|()| true)
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Shared router state, including the fragment cache.
    pub fn state(&self) -> &AppState {
        self.router.state()
    }

    pub fn pages(&self) -> &SitePages<D, T> {
        self.router.hooks()
    }

    fn log_preload(&self, report: &PreloadReport) {
        let failed = report.failed();
        let builder = if failed.is_empty() {
            self.logger.debug_builder("Preload finished")
        } else {
            self.logger.warn_builder("Preload finished with failures")
        };
        builder
            .field_u64("loaded", report.loaded().len() as u64)
            .field_u64("already_cached", report.already_cached().len() as u64)
            .field(
                "failed",
                failed
                    .iter()
                    .map(|view| view.as_str())
                    .collect::<Vec<_>>()
                    .join(","),
            )
            .emit();
    }
}
