//! Preview state modules.
//!
//! DESIGN
//! ======
//! `slide` holds the editor's form data, `carousel` the mobile navigation
//! index, and `preview` the serializable projection the components render.

pub mod carousel;
pub mod preview;
pub mod slide;
