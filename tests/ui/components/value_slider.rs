use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use value_slider::constants::{EVENT_CHANGED, GLYPH_CAP_END, GLYPH_CAP_START, GLYPH_THUMB};
use value_slider::slider::SliderState;
use value_slider::ui::components::SliderLayout;
use value_slider::ui::core::{Action, Component};
use value_slider::ValueSlider;

// 12 columns: start cap at 0, track at 1..=10, end cap at 11.
const AREA: Rect = Rect {
    x: 0,
    y: 0,
    width: 12,
    height: 1,
};

fn drawn_slider(state: SliderState) -> (ValueSlider, Terminal<TestBackend>) {
    let mut slider = ValueSlider::from_state(state);
    let mut terminal = Terminal::new(TestBackend::new(AREA.width, AREA.height)).unwrap();
    terminal.draw(|f| slider.render(f, AREA)).unwrap();
    (slider, terminal)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_layout_splits_caps_and_track() {
    let layout = SliderLayout::new(AREA);
    assert_eq!(layout.start_cap, Rect::new(0, 0, 1, 1));
    assert_eq!(layout.track, Rect::new(1, 0, 10, 1));
    assert_eq!(layout.end_cap, Rect::new(11, 0, 1, 1));
    assert_eq!(layout.track_span(), 9.0);
    assert_eq!(layout.hit_test(0, 1), None);
}

#[test]
fn test_layout_of_tiny_area_has_no_track() {
    let layout = SliderLayout::new(Rect::new(0, 0, 2, 1));
    assert_eq!(layout.track.width, 0);
    assert_eq!(layout.track_span(), 0.0);
}

#[test]
fn test_keys_ignored_while_unfocused() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 10.0, 1.0, 5.0));
    assert_eq!(slider.handle_key_events(key(KeyCode::Right)), Action::None);
    assert_eq!(slider.value(), 5.0);
}

#[test]
fn test_keyboard_navigation() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 10.0, 1.0, 5.0));
    slider.on_focus();

    slider.handle_key_events(key(KeyCode::Right));
    assert_eq!(slider.value(), 6.0);
    slider.handle_key_events(key(KeyCode::Char('+')));
    assert_eq!(slider.value(), 7.0);
    slider.handle_key_events(key(KeyCode::Left));
    slider.handle_key_events(key(KeyCode::Char('-')));
    assert_eq!(slider.value(), 5.0);
    slider.handle_key_events(key(KeyCode::End));
    assert_eq!(slider.value(), 10.0);
    slider.handle_key_events(key(KeyCode::Right));
    assert_eq!(slider.value(), 10.0);
    slider.handle_key_events(key(KeyCode::Home));
    assert_eq!(slider.value(), 0.0);
    slider.handle_key_events(key(KeyCode::Left));
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn test_mouse_press_and_drag_on_track() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 90.0, 10.0, 0.0));

    slider.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 5));
    assert_eq!(slider.value(), 40.0);

    slider.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 7));
    assert_eq!(slider.value(), 60.0);

    slider.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 10));
    assert_eq!(slider.value(), 90.0);

    // Moving without the primary button does nothing
    slider.handle_mouse_events(mouse(MouseEventKind::Moved, 1));
    assert_eq!(slider.value(), 90.0);
}

#[test]
fn test_mouse_press_on_caps_jumps_to_bounds() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 90.0, 10.0, 40.0));

    slider.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 11));
    assert_eq!(slider.value(), 90.0);

    slider.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 0));
    assert_eq!(slider.value(), 0.0);

    // Dragging across a cap is not a press
    slider.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 11));
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn test_mouse_disabled() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 90.0, 10.0, 0.0));
    slider.set_mouse_enabled(false);
    slider.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 11));
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn test_pointer_before_first_draw_is_ignored() {
    let mut slider = ValueSlider::from_state(SliderState::new(0.0, 90.0, 10.0, 0.0));
    assert!(!slider.pointer_at(5, 0, false).unwrap());
    assert_eq!(slider.value(), 0.0);
}

#[test]
fn test_pointer_press_fires_changed_once() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 90.0, 10.0, 0.0));
    slider.update_thumb().unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    slider.on(EVENT_CHANGED, move |v| {
        sink.borrow_mut().push(*v);
        Ok(())
    });

    slider.handle_mouse_events(mouse(MouseEventKind::Down(MouseButton::Left), 5));
    slider.handle_mouse_events(mouse(MouseEventKind::Drag(MouseButton::Left), 5));
    assert_eq!(*seen.borrow(), vec![40.0]);
}

#[test]
fn test_failing_subscriber_becomes_error_action() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.0, 10.0, 1.0, 5.0));
    slider.update_thumb().unwrap();
    slider.on(EVENT_CHANGED, |_| Err(anyhow::anyhow!("subscriber down")));
    slider.on_focus();

    match slider.handle_key_events(key(KeyCode::Right)) {
        Action::Error(message) => assert!(message.contains("subscriber down")),
        other => panic!("expected error action, got {other:?}"),
    }
    // The write itself went through
    assert_eq!(slider.value(), 6.0);
}

#[test]
fn test_render_draws_thumb_at_position() {
    let (mut slider, mut terminal) = drawn_slider(SliderState::new(0.0, 90.0, 10.0, 0.0));
    {
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), GLYPH_CAP_START);
        assert_eq!(buffer[(1, 0)].symbol(), GLYPH_THUMB);
        assert_eq!(buffer[(11, 0)].symbol(), GLYPH_CAP_END);
    }

    slider.set_value(90.0).unwrap();
    terminal.draw(|f| slider.render(f, AREA)).unwrap();
    let buffer = terminal.backend().buffer();
    assert_eq!(buffer[(10, 0)].symbol(), GLYPH_THUMB);
    assert_ne!(buffer[(1, 0)].symbol(), GLYPH_THUMB);
}

#[test]
fn test_arrow_keys_step_from_min_off_the_step_grid() {
    let (mut slider, _terminal) = drawn_slider(SliderState::new(0.5, 10.0, 1.0, 3.0));
    slider.on_focus();

    slider.handle_key_events(key(KeyCode::Home));
    assert_eq!(slider.value(), 0.5);
    slider.handle_key_events(key(KeyCode::Right));
    assert_eq!(slider.value(), 1.5);
    slider.handle_key_events(key(KeyCode::Right));
    assert_eq!(slider.value(), 2.5);
    slider.handle_key_events(key(KeyCode::Left));
    assert_eq!(slider.value(), 1.5);
}
