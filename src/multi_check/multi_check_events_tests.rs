//! Tests for multi_check_events

use super::*;
use crate::multi_check::{CheckCursor, CheckOption, render_multi_check};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::cell::Cell;
use std::rc::Rc;

fn mock_options() -> Vec<CheckOption> {
    vec![
        CheckOption::new("mockLabel0", "mockValue0"),
        CheckOption::new("mockLabel1", "mockValue1"),
        CheckOption::new("mockLabel2", "mockValue2"),
    ]
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    }
}

fn rendered_regions(state: &MultiCheckState) -> CheckRegions {
    let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
    let mut regions = CheckRegions::default();
    terminal
        .draw(|f| regions = render_multi_check(state, f, f.area(), true))
        .unwrap();
    regions
}

#[test]
fn test_arrow_and_vim_keys_move_cursor() {
    let mut state = MultiCheckState::new(mock_options()).with_columns(2);

    assert!(handle_key(&mut state, key(KeyCode::Down)));
    assert_eq!(state.cursor(), CheckCursor { column: 0, row: 1 });

    assert!(handle_key(&mut state, key(KeyCode::Char('l'))));
    assert_eq!(state.cursor(), CheckCursor { column: 1, row: 1 });

    assert!(handle_key(&mut state, key(KeyCode::Char('k'))));
    assert_eq!(state.cursor(), CheckCursor { column: 1, row: 0 });

    assert!(handle_key(&mut state, key(KeyCode::Left)));
    assert_eq!(state.cursor(), CheckCursor { column: 0, row: 0 });
}

#[test]
fn test_space_toggles_focused() {
    let mut state = MultiCheckState::new(mock_options());
    handle_key(&mut state, key(KeyCode::Down));

    assert!(handle_key(&mut state, key(KeyCode::Char(' '))));
    assert!(state.is_checked("mockValue0"));

    assert!(handle_key(&mut state, key(KeyCode::Char('x'))));
    assert!(!state.is_checked("mockValue0"));
}

#[test]
fn test_space_on_aggregate_selects_all() {
    let mut state = MultiCheckState::new(mock_options());

    handle_key(&mut state, key(KeyCode::Char(' ')));
    assert!(state.is_all_checked());
    assert_eq!(state.selected_options().len(), 3);
}

#[test]
fn test_a_toggles_aggregate_from_anywhere() {
    let mut state = MultiCheckState::new(mock_options());
    handle_key(&mut state, key(KeyCode::Down));

    assert!(handle_key(&mut state, key(KeyCode::Char('a'))));
    assert!(state.is_all_checked());
    assert!(handle_key(&mut state, key(KeyCode::Char('a'))));
    assert!(state.selected_options().is_empty());
}

#[test]
fn test_unhandled_keys_fall_through() {
    let mut state = MultiCheckState::new(mock_options());

    assert!(!handle_key(&mut state, key(KeyCode::Enter)));
    assert!(!handle_key(&mut state, key(KeyCode::Char('q'))));
    assert!(!handle_key(
        &mut state,
        KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)
    ));
    assert!(state.selected_options().is_empty());
}

#[test]
fn test_each_key_toggle_notifies_once() {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let mut state =
        MultiCheckState::new(mock_options()).with_on_change(move |_| counter.set(counter.get() + 1));

    handle_key(&mut state, key(KeyCode::Down));
    handle_key(&mut state, key(KeyCode::Down));
    assert_eq!(count.get(), 0);

    handle_key(&mut state, key(KeyCode::Char(' ')));
    handle_key(&mut state, key(KeyCode::Char('a')));
    assert_eq!(count.get(), 2);
}

#[test]
fn test_click_toggles_checkbox() {
    let mut state = MultiCheckState::new(mock_options());
    let regions = rendered_regions(&state);
    let rect = regions.checkbox("mockLabel1").unwrap();

    assert!(handle_mouse(&mut state, &regions, left_click(rect.x + 1, rect.y)));
    assert!(state.is_checked("mockValue1"));
    assert_eq!(state.cursor(), CheckCursor { column: 0, row: 2 });

    assert!(handle_mouse(&mut state, &regions, left_click(rect.x, rect.y)));
    assert!(!state.is_checked("mockValue1"));
}

#[test]
fn test_each_click_notifies_once() {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let mut state =
        MultiCheckState::new(mock_options()).with_on_change(move |_| counter.set(counter.get() + 1));
    let regions = rendered_regions(&state);
    let rect = regions.checkbox("mockLabel0").unwrap();

    assert!(handle_mouse(&mut state, &regions, left_click(rect.x, rect.y)));
    assert_eq!(count.get(), 1);

    // Misses don't notify
    assert!(!handle_mouse(&mut state, &regions, left_click(0, 0)));
    assert_eq!(count.get(), 1);

    let all = regions.checkbox("Select All").unwrap();
    assert!(handle_mouse(&mut state, &regions, left_click(all.x, all.y)));
    assert_eq!(count.get(), 2);
}

#[test]
fn test_click_aggregate() {
    let mut state = MultiCheckState::new(mock_options());
    let regions = rendered_regions(&state);
    let rect = regions.checkbox("Select All").unwrap();

    assert!(handle_mouse(&mut state, &regions, left_click(rect.x, rect.y)));
    assert!(state.is_all_checked());
}

#[test]
fn test_click_outside_checkboxes_ignored() {
    let mut state = MultiCheckState::new(mock_options());
    let regions = rendered_regions(&state);

    assert!(!handle_mouse(&mut state, &regions, left_click(0, 0)));
    assert!(!handle_mouse(&mut state, &regions, left_click(5, 9)));
    assert!(state.selected_options().is_empty());
}

#[test]
fn test_non_left_click_ignored() {
    let mut state = MultiCheckState::new(mock_options());
    let regions = rendered_regions(&state);
    let rect = regions.checkbox("mockLabel0").unwrap();

    let mut mouse = left_click(rect.x, rect.y);
    mouse.kind = MouseEventKind::Down(MouseButton::Right);
    assert!(!handle_mouse(&mut state, &regions, mouse));

    mouse.kind = MouseEventKind::Up(MouseButton::Left);
    assert!(!handle_mouse(&mut state, &regions, mouse));
    assert!(state.selected_options().is_empty());
}
