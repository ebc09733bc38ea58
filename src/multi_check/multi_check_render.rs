//! Checkbox group rendering
//!
//! Draws the label line and a bordered container split into equal column
//! slots, one checkbox per row.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use super::check_option::CheckOption;
use super::check_regions::CheckRegions;
use super::multi_check_state::{CheckCursor, MultiCheckState};
use crate::theme;

const CHECKED_BOX: &str = "[x] ";
const UNCHECKED_BOX: &str = "[ ] ";

/// Render the checkbox group into `area` and return where everything landed
///
/// The cursor row is highlighted only when `focused` is set. Rows that don't
/// fit inside a column slot are skipped and not recorded.
pub fn render_multi_check(
    state: &MultiCheckState,
    frame: &mut Frame,
    area: Rect,
    focused: bool,
) -> CheckRegions {
    let mut regions = CheckRegions::new();

    let [label_area, container_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let label = Paragraph::new(Line::from(Span::styled(
        state.label().to_string(),
        Style::default()
            .fg(theme::multi_check::LABEL)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(label, label_area);
    regions.label = Some(label_area);

    let block = Block::bordered().border_style(Style::default().fg(theme::multi_check::BORDER));
    let inner = block.inner(container_area);
    frame.render_widget(block, container_area);

    let layout = state.layout();
    let column_count = layout.column_count() as u32;
    let column_areas =
        Layout::horizontal((0..column_count).map(|_| Constraint::Ratio(1, column_count)))
            .split(inner);

    let cursor = focused.then_some(state.cursor());

    for (column, entries) in layout.columns.iter().enumerate() {
        let column_area = column_areas[column];
        regions.columns.push(column_area);

        for (row, option) in entries.iter().enumerate() {
            if row >= column_area.height as usize {
                break;
            }
            let row_area = Rect {
                x: column_area.x,
                y: column_area.y + row as u16,
                width: column_area.width,
                height: 1,
            };
            let highlighted = cursor == Some(CheckCursor { column, row });
            render_checkbox(
                frame,
                row_area,
                option,
                state.is_checked(&option.value),
                highlighted,
            );
            regions.checkboxes.push((option.label.clone(), row_area));
        }
    }

    regions
}

fn render_checkbox(
    frame: &mut Frame,
    area: Rect,
    option: &CheckOption,
    checked: bool,
    highlighted: bool,
) {
    let (glyph, glyph_color) = if checked {
        (CHECKED_BOX, theme::multi_check::CHECKED)
    } else {
        (UNCHECKED_BOX, theme::multi_check::UNCHECKED)
    };

    let label_style = if option.is_select_all() {
        Style::default()
            .fg(theme::multi_check::AGGREGATE_TEXT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::multi_check::OPTION_TEXT)
    };

    let line = Line::from(vec![
        Span::styled(glyph, Style::default().fg(glyph_color)),
        Span::styled(option.label.clone(), label_style),
    ]);

    let mut paragraph = Paragraph::new(line);
    if highlighted {
        paragraph = paragraph.style(Style::default().bg(theme::multi_check::CURSOR_BG));
    }
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "multi_check_render_tests.rs"]
mod multi_check_render_tests;
