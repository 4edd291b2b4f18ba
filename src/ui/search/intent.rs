use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchIntent {
    Insert(char),
    DeleteChar,
    Clear,
    /// Replaces the whole text, e.g. from a command-line argument.
    Set(String),
}

impl Intent for SearchIntent {}
