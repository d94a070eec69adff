use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use value_slider::ui::core::{EventHandler, EventType};

#[test]
fn test_key_press_is_forwarded() {
    let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(key)), EventType::Key(k) if k.code == KeyCode::Right));
}

#[test]
fn test_key_release_is_ignored() {
    let key = KeyEvent {
        code: KeyCode::Right,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventHandler::classify(Event::Key(key)), EventType::Other));
}

#[test]
fn test_mouse_and_resize_are_forwarded() {
    let mouse = MouseEvent {
        kind: MouseEventKind::Drag(MouseButton::Left),
        column: 3,
        row: 1,
        modifiers: KeyModifiers::NONE,
    };
    assert!(matches!(EventHandler::classify(Event::Mouse(mouse)), EventType::Mouse(m) if m.column == 3));
    assert!(matches!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24)));
}
