//! Pure helpers behind the slide preview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module computes one presentation concern (countdown, grid layout,
//! button placement, image URLs) without touching the DOM, so components
//! stay thin and the math stays testable natively. `ticker` is the only
//! module that owns a runtime resource.

pub mod countdown;
pub mod image_url;
pub mod layout;
pub mod position;
pub mod ticker;
