//! Reusable UI components.
//!
//! - [`toast`] - notification stack overlay

pub mod toast;

pub use toast::render_toasts;
