//! Request parsing helpers shared by the controllers.

pub mod pagination;
pub mod path;
