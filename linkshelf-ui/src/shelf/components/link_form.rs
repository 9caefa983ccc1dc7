use dioxus::prelude::*;
use shared_types::LinkDraft;

use crate::shelf::effects;

/// Add/edit form. Closes through `on_saved` once the save went through;
/// failures stay inline.
#[component]
pub fn LinkFormModal(
    draft: LinkDraft,
    categories: Vec<String>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> Element {
    let mut form = use_signal(|| draft.clone());
    let mut error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);
    let is_edit = draft.is_edit();

    let submit = move |e: FormEvent| {
        e.prevent_default();
        if saving() {
            return;
        }
        error.set(None);

        let current = form();
        if let Err(notice) = current.validate() {
            error.set(Some(notice.to_string()));
            return;
        }

        saving.set(true);
        spawn(async move {
            match effects::save_link(&current).await {
                Ok(()) => on_saved.call(()),
                Err(e) => {
                    dioxus_logger::tracing::warn!("Failed to save link: {}", e);
                    error.set(Some(e));
                    saving.set(false);
                }
            }
        });
    };

    let cancel = move |_: MouseEvent| {
        if !saving() {
            on_cancel.call(());
        }
    };

    let current = form();
    let title = if is_edit { "Edit Link" } else { "Add New Link" };
    let submit_label = if saving() {
        "Saving..."
    } else if is_edit {
        "Update"
    } else {
        "Add Link"
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: cancel,
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                }

                form {
                    class: "modal-body",
                    onsubmit: submit,

                    if let Some(message) = error() {
                        div { class: "form-error", "{message}" }
                    }

                    div {
                        class: "form-field",
                        label { "Category *" }
                        select {
                            value: "{current.category}",
                            onchange: move |e| {
                                form.with_mut(|f| {
                                    f.category = e.value();
                                    f.custom_category.clear();
                                });
                            },
                            option { value: "", "Select category or create new" }
                            for name in categories {
                                option {
                                    key: "{name}",
                                    value: "{name}",
                                    selected: current.category == name,
                                    "{name}"
                                }
                            }
                        }
                        if current.category.is_empty() {
                            input {
                                r#type: "text",
                                placeholder: "Or enter new category",
                                value: "{current.custom_category}",
                                oninput: move |e| form.with_mut(|f| f.custom_category = e.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Link Title *" }
                        input {
                            r#type: "text",
                            placeholder: "e.g., GitHub",
                            value: "{current.title}",
                            oninput: move |e| form.with_mut(|f| f.title = e.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { "URL *" }
                        input {
                            r#type: "url",
                            placeholder: "e.g., https://github.com",
                            value: "{current.url}",
                            oninput: move |e| form.with_mut(|f| f.url = e.value()),
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Description" }
                        textarea {
                            rows: "3",
                            placeholder: "e.g., Version control platform",
                            value: "{current.description}",
                            oninput: move |e| form.with_mut(|f| f.description = e.value()),
                        }
                    }

                    div {
                        class: "modal-buttons",
                        button {
                            r#type: "button",
                            class: "button-secondary",
                            disabled: saving(),
                            onclick: move |_| on_cancel.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button-primary",
                            disabled: saving(),
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
