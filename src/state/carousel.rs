//! Mobile carousel navigation over the visible bonus boxes.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use crate::state::preview::DeviceMode;
use crate::state::slide::MAX_BOXES;

/// Mobile carousel position.
///
/// `current` stays within `0..len`, where `len` is the number of visible
/// boxes (0 when empty). Navigation wraps in both directions. The index
/// resets whenever the full box list length or the device mode the carousel
/// was synced against changes, even when the visible count stays the same.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    current: usize,
    len: usize,
    total: usize,
    device: DeviceMode,
}

impl CarouselState {
    /// Carousel over a list of `total` boxes, of which at most `MAX_BOXES` are navigable.
    #[must_use]
    pub fn new(total: usize, device: DeviceMode) -> Self {
        Self { current: 0, len: total.min(MAX_BOXES), total, device }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump to `index` when it is in range; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Move `steps` slides forward, wrapping around.
    pub fn advance_by(&mut self, steps: usize) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + steps % self.len) % self.len;
    }

    /// Track the latest box list length and device mode, rewinding to the
    /// first slide when either changed. Returns whether a reset happened.
    pub fn sync(&mut self, total: usize, device: DeviceMode) -> bool {
        if self.total == total && self.device == device {
            return false;
        }
        *self = Self::new(total, device);
        true
    }
}
