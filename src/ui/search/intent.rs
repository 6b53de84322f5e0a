use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    FocusNextField,
    FocusPrevField,
    /// Switch between the form and the results list.
    ToggleFocus,
    /// Typed character for the focused field. Numeric fields drop anything
    /// but digits and separators.
    Insert(char),
    Backspace,
    ClearField,
    /// Clear every field and return focus to the first one.
    Reset,
    /// Move the result highlight, wrapping at either end.
    MoveSelection { delta: i32, result_count: usize },
}

impl Intent for SearchIntent {}
