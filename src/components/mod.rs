//! Leptos components for the slide preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SlidePreview` is mounted by the slide editor next to its form. It owns
//! the device toggle, carousel index and countdown clock, and renders the
//! cards `state::preview` projects.

pub mod bonus_box_card;
pub mod countdown_badge;
pub mod slide_preview;
