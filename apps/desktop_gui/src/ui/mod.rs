//! UI layer for desktop GUI: the storefront page.

pub mod app;

pub use app::StorefrontApp;
