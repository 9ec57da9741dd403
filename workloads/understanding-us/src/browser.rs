//! Browser entry point.

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use shell_sdk::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, Event};

use crate::{SiteApp, SiteSettings, ACTION_ATTRIBUTE};

type BrowserApp = SiteApp<BrowserDocument, BrowserTransport>;

/// `setTimeout` as a [`Delay`].
struct TimeoutDelay;

#[async_trait(?Send)]
impl Delay for TimeoutDelay {
    async fn sleep(&self, duration: Duration) {
        let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis);
            }
        });
        let _ = JsFuture::from(promise).await;
    }
}

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

fn js_error(message: &str) -> JsValue {
    JsValue::from_str(message)
}

/// Boot the site once the module loads.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = BrowserDocument::from_global().ok_or_else(|| js_error("no document"))?;
    let window = document.window().clone();
    let raw = document.raw().clone();

    let settings = SiteSettings::default();
    let logger = StructuredLogger::new(settings.site_name.clone());
    let app = Rc::new(BrowserApp::new(settings, document, BrowserTransport::new(), logger));

    let on_hash_change = {
        let app = Rc::clone(&app);
        Closure::<dyn FnMut()>::new(move || {
            let app = Rc::clone(&app);
            spawn_local(async move {
                app.navigate(&current_fragment()).await;
            });
        })
    };
    window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())?;
    on_hash_change.forget();

    // View markup is replaced on every navigation, so listen once on the document.
    let on_click = {
        let app = Rc::clone(&app);
        let selector = format!("[{}]", ACTION_ATTRIBUTE);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if let Ok(Some(element)) = target.closest(&selector) {
                // failures are logged by the app
                let _ = app.dispatch_element(&element);
            }
        })
    };
    raw.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    // The preload timer starts at DOM ready, not after the first render.
    let boot = move || {
        let preloader = Rc::clone(&app);
        spawn_local(async move {
            app.navigate(&current_fragment()).await;
        });
        spawn_local(async move {
            preloader.preload_after(&TimeoutDelay).await;
        });
    };
    if raw.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(boot);
        raw.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        boot();
    }

    Ok(())
}
