//! Image URL resolution against the configured asset base.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

use crate::state::preview::DeviceMode;
use crate::state::slide::BonusBox;

const ABSOLUTE_PREFIXES: [&str; 5] = ["http://", "https://", "//", "data:", "blob:"];

/// Resolve an editor-supplied image path.
///
/// Blank paths resolve to `None`. Absolute and inline URLs pass through;
/// relative paths are joined onto `base` with a single `/`.
#[must_use]
pub fn resolve_image_url(base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if ABSOLUTE_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return Some(path.to_owned());
    }
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Some(path.to_owned());
    }
    Some(format!("{base}/{}", path.trim_start_matches('/')))
}

/// Background art for a box in the given device mode.
///
/// Mobile prefers the dedicated mobile art and falls back to the desktop
/// image. `None` means the card renders its placeholder.
#[must_use]
pub fn background_for(bonus_box: &BonusBox, device: DeviceMode, base: &str) -> Option<String> {
    let desktop = || resolve_image_url(base, &bonus_box.background_image_url);
    match device {
        DeviceMode::Desktop => desktop(),
        DeviceMode::Mobile => bonus_box
            .mobile_background_image_url
            .as_deref()
            .and_then(|path| resolve_image_url(base, path))
            .or_else(desktop),
    }
}

/// Wrap a URL for use as a CSS `url(...)` value.
#[must_use]
pub fn css_url(url: &str) -> String {
    format!("url(\"{}\")", url.replace('\\', "\\\\").replace('"', "\\\""))
}
