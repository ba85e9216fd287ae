#![allow(clippy::needless_pass_by_value)]

pub mod admin_edge;
pub mod app;
pub mod carousel;
pub mod modal_overlay;
pub mod templates;
pub mod toast;
pub mod window;
