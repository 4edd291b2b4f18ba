use crate::ui::mvi::UiState;

/// Text of the search box. Submitting does not clear it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub text: String,
}

impl UiState for SearchState {}
