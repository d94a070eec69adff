use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use value_slider::config::Config;
use value_slider::logger::Logger;
use value_slider::ui::core::{Action, Component};
use value_slider::ui::AppComponent;

fn app() -> AppComponent {
    let mut config = Config::default();
    config.slider.step = Some("1".to_string());
    AppComponent::new(&config, Logger::new()).unwrap()
}

fn press(app: &mut AppComponent, code: KeyCode) -> Action {
    let action = app.handle_key_events(KeyEvent::new(code, KeyModifiers::NONE));
    let follow_up = app.update(action.clone());
    assert!(follow_up.is_none());
    app.drain_slider_actions();
    action
}

#[test]
fn test_initial_position_is_announced() {
    let app = app();
    let logs = app.logger().get_logs();
    assert!(logs[0].contains("changed → 0"), "{logs:?}");
}

#[test]
fn test_key_steps_slider_and_logs_change() {
    let mut app = app();
    press(&mut app, KeyCode::Right);
    assert_eq!(app.slider().value(), 1.0);
    assert!(app.logger().get_logs()[0].contains("changed → 1"));
}

#[test]
fn test_tab_toggles_focus() {
    let mut app = app();
    assert!(app.slider().is_focused());

    assert_eq!(press(&mut app, KeyCode::Tab), Action::ToggleFocus);
    assert!(!app.slider().is_focused());

    press(&mut app, KeyCode::Right);
    assert_eq!(app.slider().value(), 0.0);
}

#[test]
fn test_quit_keys() {
    let mut app = app();
    assert!(!app.should_quit());
    assert_eq!(press(&mut app, KeyCode::Char('q')), Action::Quit);
    assert!(app.should_quit());

    let mut app = self::app();
    let action = app.handle_key_events(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(action, Action::Quit);
}

#[test]
fn test_error_action_is_logged_and_shown() {
    let mut app = app();
    app.update(Action::Error("boom".to_string()));
    assert_eq!(app.last_error(), Some("boom"));
    assert!(app.logger().get_logs()[0].contains("❌ boom"));
}

#[test]
fn test_render_fits_small_terminal() {
    let mut app = app();
    let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    // Slider is laid out inside its bordered box on row 1
    let layout = app.slider().layout().unwrap();
    assert_eq!(layout.track.y, 1);
    assert_eq!(layout.start_cap.x, 1);
}
