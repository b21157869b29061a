//! Layout helpers for centered panels

use ratatui::layout::{Constraint, Layout, Rect};

pub struct LayoutManager;

impl LayoutManager {
    /// Rectangle covering the given percentages of `r`, centered in it
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let margin_y = (100 - percent_y) / 2;
        let margin_x = (100 - percent_x) / 2;

        let [_, band, _] = Layout::vertical([
            Constraint::Percentage(margin_y),
            Constraint::Percentage(percent_y),
            Constraint::Percentage(margin_y),
        ])
        .areas(r);

        let [_, center, _] = Layout::horizontal([
            Constraint::Percentage(margin_x),
            Constraint::Percentage(percent_x),
            Constraint::Percentage(margin_x),
        ])
        .areas(band);

        center
    }

    /// Centered rectangle with a fixed width and height in cells, clamped to `r`
    #[must_use]
    pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(
            r.x + (r.width - width) / 2,
            r.y + (r.height - height) / 2,
            width,
            height,
        )
    }
}
