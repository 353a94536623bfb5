//! Slide draft data handed over by the promotional slide editor.
//!
//! DESIGN
//! ======
//! Every field defaults when missing, `null` or of the wrong type, so a
//! half-filled form still previews. Numbers are accepted where the editor
//! may send text (and the reverse). The JSON shape mirrors the editor's
//! camelCase form state. Only malformed JSON is rejected.

#[cfg(test)]
#[path = "slide_test.rs"]
mod slide_test;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PreviewError;
use crate::util::position::ButtonTimerPosition;

/// Largest number of boxes a slide can show.
pub const MAX_BOXES: usize = 4;

/// One promotional card within a slide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BonusBox {
    /// Desktop background art; empty renders the placeholder.
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub background_image_url: String,
    /// Mobile background art; falls back to the desktop art.
    #[serde(deserialize_with = "deserialize_lenient_opt_string")]
    pub mobile_background_image_url: Option<String>,
    /// Foreground art layered over the background.
    #[serde(deserialize_with = "deserialize_lenient_opt_string")]
    pub object_image_url: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub button_text: String,
    #[serde(deserialize_with = "deserialize_lenient_bool")]
    pub enable_button: bool,
    /// ISO-8601 instant the countdown runs to.
    #[serde(deserialize_with = "deserialize_lenient_opt_string")]
    pub expire_at: Option<String>,
    pub button_and_timer_position: ButtonTimerPosition,
    #[serde(deserialize_with = "deserialize_lenient_vec")]
    pub reward: Vec<Reward>,
}

/// A reward granted by a bonus box. Display only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reward {
    #[serde(rename = "type", deserialize_with = "deserialize_lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "deserialize_lenient_f64")]
    pub amount: f64,
    #[serde(deserialize_with = "deserialize_lenient_opt_string")]
    pub label: Option<String>,
}

impl Reward {
    /// Human-readable line for the reward list.
    #[must_use]
    pub fn display_text(&self) -> String {
        if let Some(label) = self.label.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            return label.to_owned();
        }
        let amount = if self.amount.fract() == 0.0 {
            format!("{:.0}", self.amount)
        } else {
            format!("{}", self.amount)
        };
        let kind = self.kind.trim();
        if kind.is_empty() { amount } else { format!("{amount} {kind}") }
    }
}

/// Title plus ordered boxes, as held by the parent form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideDraft {
    #[serde(deserialize_with = "deserialize_lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_lenient_vec")]
    pub boxes: Vec<BonusBox>,
}

impl SlideDraft {
    /// Parse a draft from the editor's JSON form state.
    pub fn from_json(raw: &str) -> Result<Self, PreviewError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read and parse a draft file.
    pub fn load(path: &Path) -> Result<Self, PreviewError> {
        let raw = std::fs::read_to_string(path).map_err(|source| PreviewError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&raw)
    }

    /// Boxes the preview renders: the first `MAX_BOXES`.
    #[must_use]
    pub fn visible_boxes(&self) -> &[BonusBox] {
        visible_boxes(&self.boxes)
    }

    /// Layout key: visible box count clamped to `1..=MAX_BOXES`.
    #[must_use]
    pub fn box_count(&self) -> usize {
        box_count(&self.boxes)
    }
}

/// First `MAX_BOXES` entries of `boxes`.
#[must_use]
pub fn visible_boxes(boxes: &[BonusBox]) -> &[BonusBox] {
    let end = boxes.len().min(MAX_BOXES);
    if boxes.len() > MAX_BOXES {
        tracing::debug!(total = boxes.len(), shown = MAX_BOXES, "extra bonus boxes hidden from preview");
    }
    &boxes[..end]
}

/// Visible box count clamped to `1..=MAX_BOXES`.
#[must_use]
pub fn box_count(boxes: &[BonusBox]) -> usize {
    boxes.len().clamp(1, MAX_BOXES)
}

fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_lenient_opt_string(deserializer)?.unwrap_or_default())
}

fn deserialize_lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

fn deserialize_lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(flag) => flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

fn deserialize_lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let amount = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(amount.filter(|a| a.is_finite()).unwrap_or_default())
}

/// Array elements that fail to parse become defaults so positions hold;
/// any non-array value is empty.
fn deserialize_lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(|item| serde_json::from_value(item).unwrap_or_default()).collect(),
        _ => Vec::new(),
    })
}
