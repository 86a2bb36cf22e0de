pub mod cart;
pub mod navbar;
pub mod page;

pub use cart::{Cart, CartComponentViewModel};
pub use navbar::Navbar;
pub use page::Page;
