use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Prepend blank lines so `lines` sit in the vertical middle of a box that is
/// `height` rows tall.
pub(crate) fn vertically_centered(lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    let padding = (height as usize).saturating_sub(lines.len()) / 2;
    let mut padded = Vec::with_capacity(padding + lines.len());
    padded.extend((0..padding).map(|_| Line::from("")));
    padded.extend(lines);
    padded
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_short_content() {
        let lines = vertically_centered(vec![Line::from("a"), Line::from("b")], 6);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], Line::from("a"));
    }

    #[test]
    fn tall_content_is_left_alone() {
        let lines = vertically_centered(vec![Line::from("a"); 5], 3);
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn surfaces_root_cause() {
        let err = anyhow::anyhow!("disk on fire").context("failed to spawn deck loader");
        assert_eq!(surface_error(&err), "disk on fire");
    }
}
