//! # slide-preview
//!
//! Leptos preview renderer for promotional bonus slides.
//!
//! The editor form hands over a slide title and up to four bonus boxes; this
//! crate projects them into a desktop grid or a mobile carousel and keeps
//! every expiry countdown ticking once per second while mounted.
//!
//! Pure projection logic lives in `state` and `util` so it can be exercised
//! natively; `components` only renders what those modules compute.

pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

pub use config::PreviewConfig;
pub use error::PreviewError;
