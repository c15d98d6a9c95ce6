pub mod app;
pub mod components;
pub mod pages;
pub mod screens;
pub mod session;
pub mod templates;

pub use app::{build_router, AppState};
pub use screens::Screen;
