pub mod app;
pub mod components;
pub mod http;
pub mod router;
pub mod routes;
pub mod service;

pub use app::App;
