//! Desktop grid templates keyed by bonus box count.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::Serialize;

/// CSS grid template for one box count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub columns: &'static str,
    pub rows: &'static str,
    pub areas: &'static [&'static str],
}

const LAYOUTS: [GridLayout; 5] = [
    GridLayout { columns: "100%", rows: "100%", areas: &["."] },
    GridLayout { columns: "100%", rows: "100%", areas: &["card0"] },
    GridLayout { columns: "49% 49%", rows: "100%", areas: &["card0 card1"] },
    GridLayout { columns: "49% 49%", rows: "1fr 1fr", areas: &["card0 card1", "card0 card2"] },
    GridLayout { columns: "45% 25% 28%", rows: "1fr 1fr", areas: &["card0 card1 card3", "card0 card2 card3"] },
];

/// Grid template for `count` boxes; counts past the table use the single-box layout.
#[must_use]
pub fn layout_for(count: usize) -> GridLayout {
    LAYOUTS.get(count).copied().unwrap_or(LAYOUTS[1])
}

/// Grid area name assigned to the box at `index`.
#[must_use]
pub fn card_area(index: usize) -> String {
    format!("card{index}")
}

impl GridLayout {
    /// `grid-template-areas` value, one quoted string per row.
    #[must_use]
    pub fn template_areas(&self) -> String {
        self.areas
            .iter()
            .map(|row| format!("\"{row}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Inline style for the grid container.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "display: grid; grid-template-columns: {}; grid-template-rows: {}; grid-template-areas: {};",
            self.columns,
            self.rows,
            self.template_areas()
        )
    }
}
