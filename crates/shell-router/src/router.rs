//! The view router.

use std::rc::Rc;

use async_trait::async_trait;
use shell_cache::{CacheStatus, FragmentOrigin};
use shell_core::{Document, ViewName, ViewNameError};
use shell_data::{FetchClient, FetchError, ResourceKind, Transport};
use shell_observability::StructuredLogger;

use crate::state::AppState;

/// Errors resolving a view's markup.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("View '{view}' not found")]
    ViewNotFound {
        view: ViewName,
        #[source]
        source: FetchError,
    },

    #[error("Invalid view requested: {0}")]
    InvalidView(#[from] ViewNameError),
}

/// What a navigation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The view's markup was rendered and its hooks ran.
    Rendered {
        view: ViewName,
        cache_status: CacheStatus,
    },
    /// The not-found notice was rendered in place of the requested view.
    NotFound { requested: String },
    /// A newer navigation started before this one resolved; nothing rendered.
    Superseded { requested: String },
    /// The container element is missing; nothing rendered.
    NoContainer,
}

/// Page-specific behaviour run after a view renders.
#[async_trait(?Send)]
pub trait ViewHooks<D: Document> {
    /// Called once the view's markup is in the container.
    async fn view_rendered(&self, view: &ViewName, document: &D);

    /// Called when the not-found notice replaced the container content.
    fn fallback_rendered(&self) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

#[async_trait(?Send)]
impl<D: Document> ViewHooks<D> for NoHooks {
    async fn view_rendered(&self, _view: &ViewName, _document: &D) {}
}

/// Resolves fragment identifiers to views and renders them.
pub struct Router<D, T, H> {
    state: Rc<AppState>,
    document: Rc<D>,
    client: Rc<FetchClient<T>>,
    hooks: H,
    logger: StructuredLogger,
}

impl<D, T, H> Router<D, T, H>
where
    D: Document,
    T: Transport,
    H: ViewHooks<D>,
{
    /// Create a new router.
    pub fn new(
        state: Rc<AppState>,
        document: Rc<D>,
        client: Rc<FetchClient<T>>,
        hooks: H,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            state,
            document,
            client,
            hooks,
            logger,
        }
    }

    /// Navigate to the view named by a fragment identifier.
    ///
    /// Errors never escape: a view that cannot be resolved is replaced by the
    /// not-found notice and logged.
    pub async fn navigate(&self, fragment: &str) -> NavigationOutcome {
        let token = self.state.begin_navigation();
        let config = self.state.config();
        let requested = fragment.strip_prefix('#').unwrap_or(fragment).to_string();
        let logger = self.logger.with_view(if requested.is_empty() {
            config.home_view.as_str()
        } else {
            requested.as_str()
        });

        let Some(container) = self.document.element_by_id(&config.container_id) else {
            logger.warn_with(
                "Container element missing",
                &[("container_id", &config.container_id)],
            );
            return NavigationOutcome::NoContainer;
        };

        let resolved = match ViewName::from_fragment(fragment, &config.home_view) {
            Ok(view) => self.resolve(&view).await.map(|found| (view, found)),
            Err(err) => Err(RouterError::from(err)),
        };

        if !self.state.is_current(token) {
            logger.debug("Navigation superseded");
            return NavigationOutcome::Superseded { requested };
        }

        match resolved {
            Ok((view, (markup, cache_status))) => {
                self.document.set_inner_html(&container, &markup);
                self.document.scroll_to_top();
                self.state.set_active(Some(view.clone()));

                logger
                    .debug_builder("View rendered")
                    .field("cache", cache_status.to_string())
                    .emit();

                self.hooks.view_rendered(&view, &self.document).await;
                NavigationOutcome::Rendered { view, cache_status }
            }
            Err(err) => {
                logger.error_with("Router error", &[("error", &err)]);
                self.document
                    .set_inner_html(&container, &self.not_found_markup());
                self.state.set_active(None);
                self.hooks.fallback_rendered();
                NavigationOutcome::NotFound { requested }
            }
        }
    }

    /// Get a view's markup from the cache, or fetch and cache it.
    pub async fn resolve(&self, view: &ViewName) -> Result<(String, CacheStatus), RouterError> {
        let path = self.state.config().view_path(view);
        self.state
            .cache()
            .get_or_fetch(view, FragmentOrigin::Navigation, || {
                self.client.fetch_text(&path, ResourceKind::ViewFragment)
            })
            .await
            .map_err(|source| RouterError::ViewNotFound {
                view: view.clone(),
                source,
            })
    }

    /// The notice shown when a view cannot be loaded.
    pub fn not_found_markup(&self) -> String {
        format!(
            r##"
      <div class="container section-pad text-center">
        <h2>Page Not Found</h2>
        <p>Sorry, we couldn't load this section.</p>
        <a href="#{}" class="btn btn-primary">Return Home</a>
      </div>
    "##,
            self.state.config().home_view
        )
    }

    /// The shared application state.
    pub fn state(&self) -> &Rc<AppState> {
        &self.state
    }

    /// The page hooks.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}
