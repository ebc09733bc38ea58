//! Keyboard and mouse handling for the checkbox group

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::check_option::{SELECT_ALL_LABEL, SELECT_ALL_VALUE};
use super::check_regions::CheckRegions;
use super::multi_check_state::MultiCheckState;

/// Handle a key press, returns true if the key was consumed
pub fn handle_key(state: &mut MultiCheckState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return false;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_up(),
        KeyCode::Down | KeyCode::Char('j') => state.move_down(),
        KeyCode::Left | KeyCode::Char('h') => state.move_left(),
        KeyCode::Right | KeyCode::Char('l') => state.move_right(),
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            state.toggle_focused();
        }
        KeyCode::Char('a') => {
            state.click(SELECT_ALL_VALUE);
        }
        _ => return false,
    }
    true
}

/// Handle a mouse event against the last rendered regions
///
/// A left click on a checkbox moves the cursor there and toggles it. Returns
/// true if a checkbox was hit.
pub fn handle_mouse(
    state: &mut MultiCheckState,
    regions: &CheckRegions,
    mouse: MouseEvent,
) -> bool {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return false;
    }

    let Some(label) = regions.checkbox_at(mouse.column, mouse.row) else {
        return false;
    };

    let Some(value) = value_for_label(state, label) else {
        return false;
    };

    state.focus_value(&value);
    state.click(&value);
    true
}

fn value_for_label(state: &MultiCheckState, label: &str) -> Option<String> {
    if label == SELECT_ALL_LABEL {
        return Some(SELECT_ALL_VALUE.to_string());
    }
    state
        .options()
        .iter()
        .find(|option| option.label == label)
        .map(|option| option.value.clone())
}

#[cfg(test)]
#[path = "multi_check_events_tests.rs"]
mod multi_check_events_tests;
