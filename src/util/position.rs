//! Button and timer placement inside a bonus box.
//!
//! The card body is a column flex container, so `justify-content` picks the
//! vertical edge and `align-items` the horizontal one.

#[cfg(test)]
#[path = "position_test.rs"]
mod position_test;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Corner where the countdown and call-to-action button are anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonTimerPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl ButtonTimerPosition {
    /// Map the editor's numeric code; unknown codes anchor bottom-right.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Self::TopLeft,
            2 => Self::TopRight,
            3 => Self::BottomLeft,
            _ => Self::BottomRight,
        }
    }

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::TopLeft => 1,
            Self::TopRight => 2,
            Self::BottomLeft => 3,
            Self::BottomRight => 4,
        }
    }
}

impl Serialize for ButtonTimerPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ButtonTimerPosition {
    /// Lenient: numbers and numeric strings map via `from_code`, anything else
    /// (null, booleans, junk text) falls back to the default corner.
    #[allow(clippy::cast_possible_truncation)]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        let code = match &value {
            serde_json::Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            serde_json::Value::String(text) => text.trim().parse::<i64>().ok(),
            _ => None,
        };
        Ok(code.map_or_else(Self::default, Self::from_code))
    }
}

/// Flexbox alignment pair for the card body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    pub justify_content: &'static str,
    pub align_items: &'static str,
}

impl Alignment {
    #[must_use]
    pub fn style(&self) -> String {
        format!("justify-content: {}; align-items: {};", self.justify_content, self.align_items)
    }
}

#[must_use]
pub fn resolve_alignment(position: ButtonTimerPosition) -> Alignment {
    let (justify_content, align_items) = match position {
        ButtonTimerPosition::TopLeft => ("flex-start", "flex-start"),
        ButtonTimerPosition::TopRight => ("flex-start", "flex-end"),
        ButtonTimerPosition::BottomLeft => ("flex-end", "flex-start"),
        ButtonTimerPosition::BottomRight => ("flex-end", "flex-end"),
    };
    Alignment { justify_content, align_items }
}
