use dioxus::prelude::*;

#[component]
pub fn DeleteConfirmModal(
    link_title: String,
    is_loading: bool,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let confirm_label = if is_loading { "Deleting..." } else { "Delete" };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "modal narrow",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "modal-header danger",
                    h2 { "Delete Link" }
                }
                div {
                    class: "modal-body",
                    p {
                        class: "delete-message",
                        "Are you sure you want to delete "
                        strong { "\"{link_title}\"" }
                        "?"
                    }
                    p { class: "delete-warning", "This action cannot be undone." }
                }
                div {
                    class: "modal-buttons footer",
                    button {
                        class: "button-secondary",
                        disabled: is_loading,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "button-danger",
                        disabled: is_loading,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
