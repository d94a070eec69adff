/// Messages passed from components up to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Slider notifications
    ValueChanged(f64),

    // Focus
    ToggleFocus,

    // Log panel
    ClearLogs,

    // Errors surfaced to the user (e.g. a failing subscriber)
    Error(String),

    // App control
    Quit,
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}
