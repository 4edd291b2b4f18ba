use crate::ui::app::{App, PAGE_STEP};
use crate::ui::search::SearchIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Copy the selected post's link to the clipboard.
    CopyLink,
}

/// Routes a key press.
///
/// The search box always has focus: printable characters edit it and Enter
/// submits it. Navigation keys move the post selection.
pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 'y') {
        return InputAction::CopyLink;
    }

    if is_ctrl_char(key, 'u') {
        app.dispatch_search(SearchIntent::Clear);
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.dispatch_search(SearchIntent::DeleteChar),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-(PAGE_STEP as isize)),
        KeyCode::PageDown => app.move_selection(PAGE_STEP as isize),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.dispatch_search(SearchIntent::Insert(ch))
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
