pub mod api;
pub mod interop;
pub mod shelf;

pub use api::*;
pub use interop::*;
pub use shelf::*;
