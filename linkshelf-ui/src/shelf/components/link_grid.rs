use dioxus::prelude::*;
use shared_types::{Link, LinkCategory};

/// Links of the selected category, or a placeholder when none is selected.
#[component]
pub fn LinkGrid(
    category: Option<LinkCategory>,
    on_edit: Callback<usize>,
    on_delete: Callback<usize>,
) -> Element {
    let Some(category) = category else {
        return rsx! {
            section {
                class: "link-panel",
                div { class: "empty-panel", "No category selected" }
            }
        };
    };

    rsx! {
        section {
            class: "link-panel",
            div {
                class: "link-panel-header",
                h2 { "{category.name}" }
                p { "{category.description}" }
            }
            div {
                class: "link-grid",
                for (index, link) in category.links.iter().cloned().enumerate() {
                    LinkCard {
                        key: "{link.title}-{link.url}-{index}",
                        link,
                        index,
                        on_edit,
                        on_delete,
                    }
                }
            }
        }
    }
}

#[component]
fn LinkCard(
    link: Link,
    index: usize,
    on_edit: Callback<usize>,
    on_delete: Callback<usize>,
) -> Element {
    rsx! {
        div {
            class: "link-card",
            a {
                href: "{link.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                p { class: "link-title", "{link.title}" }
                p { class: "link-url", "{link.url}" }
            }
            div {
                class: "link-actions",
                button {
                    class: "link-action edit",
                    title: "Edit link",
                    onclick: move |_| on_edit.call(index),
                    "Edit"
                }
                button {
                    class: "link-action delete",
                    title: "Delete link",
                    onclick: move |_| on_delete.call(index),
                    "Delete"
                }
            }
        }
    }
}
