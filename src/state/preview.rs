//! Serializable preview projection shared by the components and the CLI.
//!
//! DESIGN
//! ======
//! `PreviewModel::build` is a pure function of the draft, config, device
//! mode, carousel index and clock. Components re-run it whenever one of
//! those inputs changes (including every countdown tick) and render the
//! result; the CLI prints the same structure as JSON.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::PreviewConfig;
use crate::state::slide::{BonusBox, SlideDraft, box_count, visible_boxes};
use crate::util::countdown::{CountdownValues, countdown_at};
use crate::util::image_url::{background_for, css_url, resolve_image_url};
use crate::util::layout::{GridLayout, card_area, layout_for};
use crate::util::position::{Alignment, resolve_alignment};

/// Which production layout the preview imitates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceMode {
    /// Grid of up to four cards.
    #[default]
    Desktop,
    /// One card at a time with prev/next controls.
    Mobile,
}

impl DeviceMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Desktop => Self::Mobile,
            Self::Mobile => Self::Desktop,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Mobile => "Mobile",
        }
    }
}

/// Render-ready view of one bonus box.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardModel {
    pub index: usize,
    /// Grid area name (`card{index}`).
    pub area: String,
    /// Resolved background art; `None` renders the placeholder.
    pub background_url: Option<String>,
    pub object_image_url: Option<String>,
    pub alignment: Alignment,
    /// Button label, present only for enabled buttons with text.
    pub button: Option<String>,
    /// Remaining time, present only when the box has an expiry.
    pub countdown: Option<CountdownValues>,
    pub rewards: Vec<String>,
}

impl CardModel {
    #[must_use]
    pub fn build(index: usize, bonus_box: &BonusBox, device: DeviceMode, image_base_url: &str, now: OffsetDateTime) -> Self {
        let button = bonus_box
            .enable_button
            .then(|| bonus_box.button_text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        let countdown = bonus_box
            .expire_at
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| countdown_at(Some(raw), now));

        Self {
            index,
            area: card_area(index),
            background_url: background_for(bonus_box, device, image_base_url),
            object_image_url: bonus_box
                .object_image_url
                .as_deref()
                .and_then(|path| resolve_image_url(image_base_url, path)),
            alignment: resolve_alignment(bonus_box.button_and_timer_position),
            button,
            countdown,
            rewards: bonus_box.reward.iter().map(|r| r.display_text()).collect(),
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.background_url.is_none()
    }

    /// Inline style for the card shell. Desktop cards claim their grid area.
    #[must_use]
    pub fn style(&self, device: DeviceMode) -> String {
        let mut style = String::new();
        if device == DeviceMode::Desktop {
            style.push_str(&format!("grid-area: {};", self.area));
        }
        if let Some(url) = self.background_url.as_deref() {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(&format!("background-image: {};", css_url(url)));
        }
        style
    }
}

/// Everything the preview renders for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewModel {
    pub title: String,
    pub device: DeviceMode,
    /// Desktop grid template; `None` in mobile mode.
    pub layout: Option<GridLayout>,
    /// Desktop: every visible card. Mobile: only the current slide.
    pub cards: Vec<CardModel>,
    /// Carousel index in mobile mode.
    pub current_slide: Option<usize>,
    /// Number of visible boxes.
    pub slide_count: usize,
}

impl PreviewModel {
    #[must_use]
    pub fn build(
        title: &str,
        boxes: &[BonusBox],
        config: &PreviewConfig,
        device: DeviceMode,
        current_slide: usize,
        now: OffsetDateTime,
    ) -> Self {
        let visible = visible_boxes(boxes);
        let base = config.image_base_url.as_str();
        let card = |index: usize| CardModel::build(index, &visible[index], device, base, now);

        let (layout, cards, current_slide) = match device {
            DeviceMode::Desktop => (Some(layout_for(box_count(visible))), (0..visible.len()).map(card).collect::<Vec<_>>(), None),
            DeviceMode::Mobile => {
                if visible.is_empty() {
                    (None, Vec::new(), Some(0))
                } else {
                    let index = current_slide.min(visible.len() - 1);
                    (None, vec![card(index)], Some(index))
                }
            }
        };

        Self { title: title.trim().to_owned(), device, layout, cards, current_slide, slide_count: visible.len() }
    }

    #[must_use]
    pub fn from_draft(
        draft: &SlideDraft,
        config: &PreviewConfig,
        device: DeviceMode,
        current_slide: usize,
        now: OffsetDateTime,
    ) -> Self {
        Self::build(&draft.title, &draft.boxes, config, device, current_slide, now)
    }

    /// Desktop grid style, or an empty string in mobile mode.
    #[must_use]
    pub fn grid_style(&self) -> String {
        self.layout.map(|layout| layout.style()).unwrap_or_default()
    }
}
