pub mod admin_edge;
pub mod api;
pub mod carousel;
pub mod components;
pub mod constants;
pub mod logging;
pub mod models;

pub use components::app::App;
