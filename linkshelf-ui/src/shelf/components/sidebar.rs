use dioxus::prelude::*;
use shared_types::LinkCategory;

#[component]
pub fn CategorySidebar(
    categories: Vec<LinkCategory>,
    selected: Option<String>,
    loading: bool,
    on_select: Callback<String>,
) -> Element {
    rsx! {
        nav {
            class: "category-sidebar",
            h2 { "Categories" }

            if loading {
                div { class: "sidebar-loading", "Loading..." }
            } else {
                for category in categories {
                    CategoryButton {
                        key: "{category.name}",
                        is_selected: selected.as_deref() == Some(category.name.as_str()),
                        name: category.name.clone(),
                        link_count: category.links.len(),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn CategoryButton(
    name: String,
    link_count: usize,
    is_selected: bool,
    on_select: Callback<String>,
) -> Element {
    let class = if is_selected {
        "category-button selected"
    } else {
        "category-button"
    };
    let name_for_click = name.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(name_for_click.clone()),
            p { class: "category-name", "{name}" }
            p { class: "category-count", "{link_count} links" }
        }
    }
}
