use dioxus::prelude::*;
use shared_types::{remote_row_for, Link, LinkCategory, LinkDraft, LinkView, RowAction};

use crate::api::delete_link;
use crate::interop::{alert, set_document_title};
use crate::shelf::components::{CategorySidebar, DeleteConfirmModal, LinkFormModal, LinkGrid};
use crate::shelf::effects;
use crate::shelf::styles::SHELF_STYLES;

#[derive(Debug, Clone, PartialEq)]
struct PendingDelete {
    title: String,
    row_index: usize,
}

#[component]
pub fn LinkShelfShell() -> Element {
    // None until the first fetch settles
    let mut view = use_signal(|| None::<LinkView>);
    let mut form = use_signal(|| None::<LinkDraft>);
    let mut pending_delete = use_signal(|| None::<PendingDelete>);
    let mut deleting = use_signal(|| false);

    use_hook(|| set_document_title("My Favorite Links"));

    use_effect(move || {
        spawn(async move {
            effects::load_initial_links(view).await;
        });
    });

    let selected_link = move |link_index: usize| -> Option<(LinkCategory, Link)> {
        let current = view.read();
        let category = current.as_ref()?.selected_category()?.clone();
        let link = category.links.get(link_index)?.clone();
        Some((category, link))
    };

    let on_select = use_callback(move |name: String| {
        view.with_mut(|current| {
            if let Some(current) = current {
                current.select(&name);
            }
        });
    });

    let on_add = move |_: MouseEvent| form.set(Some(LinkDraft::default()));

    let on_edit = use_callback(move |link_index: usize| {
        let Some((category, link)) = selected_link(link_index) else {
            return;
        };
        if let Err(notice) = remote_row_for(&link, RowAction::Edit) {
            alert(notice);
            return;
        }
        form.set(LinkDraft::editing(&category, link_index));
    });

    let on_delete = use_callback(move |link_index: usize| {
        let Some((_, link)) = selected_link(link_index) else {
            return;
        };
        match remote_row_for(&link, RowAction::Delete) {
            Ok(row_index) => pending_delete.set(Some(PendingDelete {
                title: link.title,
                row_index,
            })),
            Err(notice) => alert(notice),
        }
    });

    let on_saved = use_callback(move |_: ()| {
        spawn(async move {
            effects::refresh_links(view).await;
            form.set(None);
        });
    });

    let confirm_delete = use_callback(move |_: ()| {
        let Some(target) = pending_delete() else {
            return;
        };
        if deleting() {
            return;
        }
        deleting.set(true);
        spawn(async move {
            match delete_link(target.row_index).await {
                Ok(()) => {
                    effects::refresh_links(view).await;
                    pending_delete.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to delete link: {}", e);
                    alert(&format!("Failed to delete link: {e}"));
                }
            }
            deleting.set(false);
        });
    });

    let cancel_delete = use_callback(move |_: ()| {
        if !deleting() {
            pending_delete.set(None);
        }
    });

    let snapshot = view.read().clone();
    let loading = snapshot.is_none();
    let categories = snapshot
        .as_ref()
        .map(|view| view.categories.clone())
        .unwrap_or_default();
    let category_names = snapshot
        .as_ref()
        .map(LinkView::category_names)
        .unwrap_or_default();
    let selected = snapshot.as_ref().and_then(|view| view.selected.clone());
    let selected_category = snapshot
        .as_ref()
        .and_then(|view| view.selected_category().cloned());

    rsx! {
        style { {SHELF_STYLES} }

        div {
            class: "shelf",

            header {
                class: "shelf-header",
                div {
                    h1 { "My Favorite Links" }
                    p { "Select a category and click a link to open" }
                }
                button {
                    class: "add-button",
                    onclick: on_add,
                    "+ Add Link"
                }
            }

            div {
                class: "shelf-body",
                CategorySidebar {
                    categories,
                    selected,
                    loading,
                    on_select,
                }
                LinkGrid {
                    category: selected_category,
                    on_edit,
                    on_delete,
                }
            }
        }

        if let Some(draft) = form() {
            LinkFormModal {
                draft,
                categories: category_names,
                on_saved,
                on_cancel: move |_| form.set(None),
            }
        }

        if let Some(target) = pending_delete() {
            DeleteConfirmModal {
                link_title: target.title,
                is_loading: deleting(),
                on_confirm: confirm_delete,
                on_cancel: cancel_delete,
            }
        }
    }
}
