use dioxus::prelude::{Signal, WritableExt};
use shared_types::{LinkDraft, LinkView, ViewSource};

use crate::api::{create_link, fetch_links, update_link};

/// First fetch. Any failure or an empty result shows the built-in links.
pub async fn load_initial_links(mut view: Signal<Option<LinkView>>) {
    let remote = match fetch_links().await {
        Ok(categories) => categories,
        Err(e) => {
            dioxus_logger::tracing::error!("Error fetching links: {}", e);
            Vec::new()
        }
    };

    let next = LinkView::initial(remote);
    if next.source == ViewSource::Fallback {
        dioxus_logger::tracing::info!("No remote links, showing built-in list");
    }
    view.set(Some(next));
}

/// Re-read every category after a mutation. The view is left as it was when
/// the fetch fails.
pub async fn refresh_links(mut view: Signal<Option<LinkView>>) {
    match fetch_links().await {
        Ok(categories) => view.with_mut(|current| match current {
            Some(current) => current.apply_refresh(categories),
            None => *current = Some(LinkView::initial(categories)),
        }),
        Err(e) => {
            dioxus_logger::tracing::error!("Error refreshing links: {}", e);
        }
    }
}

/// Create or update depending on whether the draft carries a row.
pub async fn save_link(draft: &LinkDraft) -> Result<(), String> {
    draft.validate().map_err(String::from)?;
    match draft.to_update_request() {
        Some(request) => update_link(&request).await,
        None => create_link(&draft.to_create_request()).await,
    }
}
