//! Per-view page behaviour.

mod donate;
mod volunteer;

pub use donate::*;
pub use volunteer::*;

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use shell_sdk::prelude::*;

use crate::actions::{DispatchError, WidgetAction};
use crate::config::SiteSettings;
use crate::lists::{load_blog, load_press, ListOutcome};

/// The behaviour attached to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Donation,
    Volunteer,
    Press,
    Blog,
    /// Markup only.
    Static,
}

impl PageKind {
    pub fn for_view(view: &ViewName) -> Self {
        match view.as_str() {
            "donate" => PageKind::Donation,
            "volunteer" => PageKind::Volunteer,
            "media" => PageKind::Press,
            "blog" => PageKind::Blog,
            _ => PageKind::Static,
        }
    }
}

/// Widgets bound to the rendered view.
#[derive(Debug, Clone)]
pub enum PageBinding<E> {
    None,
    Donation(DonationWidget),
    Volunteer(VolunteerTabs<E>),
}

impl<E> PageBinding<E> {
    pub fn kind(&self) -> Option<PageKind> {
        match self {
            PageBinding::None => None,
            PageBinding::Donation(_) => Some(PageKind::Donation),
            PageBinding::Volunteer(_) => Some(PageKind::Volunteer),
        }
    }
}

/// Runs page logic after each navigation and routes widget actions.
///
/// Only the widgets of the most recently rendered view are reachable; a
/// navigation to any other view, or to the not-found notice, unbinds them.
pub struct SitePages<D: Document, T> {
    settings: Rc<SiteSettings>,
    client: Rc<FetchClient<T>>,
    logger: StructuredLogger,
    binding: RefCell<PageBinding<D::Element>>,
    last_list: RefCell<Option<ListOutcome>>,
}

impl<D: Document, T: Transport> SitePages<D, T> {
    pub fn new(
        settings: Rc<SiteSettings>,
        client: Rc<FetchClient<T>>,
        logger: StructuredLogger,
    ) -> Self {
        Self {
            settings,
            client,
            logger,
            binding: RefCell::new(PageBinding::None),
            last_list: RefCell::new(None),
        }
    }

    /// Kind of widget currently bound, if any.
    pub fn bound(&self) -> Option<PageKind> {
        self.binding.borrow().kind()
    }

    /// Outcome of the most recent press or blog list load.
    pub fn last_list(&self) -> Option<ListOutcome> {
        *self.last_list.borrow()
    }

    /// Hand an action to the widget bound to the current view.
    pub fn dispatch(
        &self,
        document: &D,
        action: &WidgetAction,
        trigger: Option<&D::Element>,
    ) -> Result<(), DispatchError> {
        let binding = self.binding.borrow();
        match (action, &*binding) {
            (WidgetAction::SelectDonation { amount, interval }, PageBinding::Donation(widget)) => {
                let url = widget.select(document, *amount, *interval, trigger);
                self.logger
                    .debug_builder("Donation option selected")
                    .field("interval", interval.code())
                    .field_u64("amount", u64::from(amount.unwrap_or(0)))
                    .field("embed_url", url)
                    .emit();
                Ok(())
            }
            (WidgetAction::SwitchTab { tab }, PageBinding::Volunteer(tabs)) => {
                if !tabs.switch(document, tab, trigger) {
                    self.logger
                        .warn_with("Tab panel missing", &[("tab", tab)]);
                }
                Ok(())
            }
            _ => Err(DispatchError::NotBound {
                action: action.name(),
            }),
        }
    }

    fn bind(&self, binding: PageBinding<D::Element>) {
        *self.binding.borrow_mut() = binding;
    }
}

#[async_trait(?Send)]
impl<D: Document, T: Transport> ViewHooks<D> for SitePages<D, T> {
    async fn view_rendered(&self, view: &ViewName, document: &D) {
        let logger = self.logger.with_view(view.as_str());
        let outcome = match PageKind::for_view(view) {
            PageKind::Donation => {
                self.bind(PageBinding::Donation(DonationWidget::new(
                    self.settings.donation.clone(),
                )));
                return;
            }
            PageKind::Volunteer => {
                self.bind(PageBinding::Volunteer(VolunteerTabs::bind(
                    document,
                    &self.settings.tabs,
                )));
                return;
            }
            PageKind::Static => {
                self.bind(PageBinding::None);
                return;
            }
            PageKind::Press => {
                self.bind(PageBinding::None);
                load_press(document, &self.client, &logger, self.settings.press.target()).await
            }
            PageKind::Blog => {
                self.bind(PageBinding::None);
                load_blog(document, &self.client, &logger, self.settings.blog.target()).await
            }
        };

        logger
            .debug_builder("List loaded")
            .field("outcome", format!("{:?}", outcome))
            .emit();
        *self.last_list.borrow_mut() = Some(outcome);
    }

    fn fallback_rendered(&self) {
        self.bind(PageBinding::None);
    }
}
