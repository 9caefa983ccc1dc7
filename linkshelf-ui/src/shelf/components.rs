pub mod delete_confirm;
pub mod link_form;
pub mod link_grid;
pub mod sidebar;

pub use delete_confirm::DeleteConfirmModal;
pub use link_form::LinkFormModal;
pub use link_grid::LinkGrid;
pub use sidebar::CategorySidebar;
