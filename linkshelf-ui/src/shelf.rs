//! Link shelf: category sidebar, link grid and the add/edit/delete modals.

use dioxus::prelude::*;

mod components;
mod effects;
mod shell;
mod styles;

pub use shell::LinkShelfShell;

#[component]
pub fn LinkShelf() -> Element {
    rsx! {
        LinkShelfShell {}
    }
}
