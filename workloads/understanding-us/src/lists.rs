//! Loading JSON lists into the rendered view.

use serde::de::DeserializeOwned;
use shell_sdk::prelude::*;

use crate::config::ListTarget;
use crate::data::{BlogItem, PressItem};
use crate::sections::{render_blog, render_placeholder, render_press};

/// What a list load did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOutcome {
    /// The list rendered this many items.
    Rendered(usize),
    /// The data could not be loaded; the placeholder is showing.
    Placeholder,
    /// The current view has no container for this list.
    Skipped,
    /// The container left the document while the fetch was in flight.
    Detached,
}

/// Fetch a JSON array and render it into the target container.
///
/// Nothing is fetched when the container is absent. Any failure, including a
/// body that is not an array of `I`, shows the placeholder and logs a warning.
pub async fn load_list<D, T, I, R>(
    document: &D,
    client: &FetchClient<T>,
    logger: &StructuredLogger,
    target: ListTarget<'_>,
    render: R,
) -> ListOutcome
where
    D: Document,
    T: Transport,
    I: DeserializeOwned,
    R: FnOnce(&[I]) -> String,
{
    let Some(container) = document.element_by_id(target.container_id) else {
        return ListOutcome::Skipped;
    };

    let loaded = client
        .fetch_json::<Vec<I>>(target.data_path, ResourceKind::ListData)
        .await;

    if !document.is_connected(&container) {
        logger.debug("List container detached during fetch");
        return ListOutcome::Detached;
    }

    match loaded {
        Ok(items) => {
            document.set_inner_html(&container, &render(&items));
            ListOutcome::Rendered(items.len())
        }
        Err(err) => {
            logger.warn_with(
                "List data unavailable",
                &[("path", &target.data_path), ("error", &err)],
            );
            document.set_inner_html(&container, &render_placeholder(target.placeholder));
            ListOutcome::Placeholder
        }
    }
}

/// Load press coverage into its container.
pub async fn load_press<D: Document, T: Transport>(
    document: &D,
    client: &FetchClient<T>,
    logger: &StructuredLogger,
    target: ListTarget<'_>,
) -> ListOutcome {
    load_list(document, client, logger, target, |items: &[PressItem]| {
        render_press(items)
    })
    .await
}

/// Load blog stories into their container.
pub async fn load_blog<D: Document, T: Transport>(
    document: &D,
    client: &FetchClient<T>,
    logger: &StructuredLogger,
    target: ListTarget<'_>,
) -> ListOutcome {
    load_list(document, client, logger, target, |items: &[BlogItem]| {
        render_blog(items)
    })
    .await
}
