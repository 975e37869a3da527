//! Keyboard handler for the filter editor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, FilterMode};

/// Handle keyboard input while the filter editor is open.
///
/// Returns `true` if the key was consumed by the editor, `false` otherwise.
///
/// # Key Bindings
/// - Esc: modal discards the draft; inline unfocuses the bar
/// - Enter: modal applies the draft; inline unfocuses the bar
/// - Tab/Down: next field (wraps)
/// - Shift+Tab/Up: previous field (wraps)
/// - Left/Right/Home/End: move the cursor
/// - Backspace and printable characters: edit the focused field
///
/// # Behavior
/// - Inline mode commits every edit immediately, which returns to page 1
/// - Control-modified keys are not consumed so Ctrl+C still quits
/// - Returns false if the editor is not open
pub fn handle_filter_editor_key(state: &mut AppState, key: KeyEvent) -> bool {
    if !state.editor.is_open() {
        return false;
    }

    let mode = state.editor.mode();

    match key.code {
        KeyCode::Esc => {
            state.editor.close();
            true
        }

        KeyCode::Enter => {
            match mode {
                FilterMode::Modal => {
                    let draft = state.editor.apply();
                    state.set_filters(draft);
                }
                FilterMode::Inline => state.editor.close(),
            }
            true
        }

        KeyCode::Tab | KeyCode::Down => {
            state.editor.next_field();
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.editor.prev_field();
            true
        }

        KeyCode::Left => {
            state.editor.cursor_left();
            true
        }
        KeyCode::Right => {
            state.editor.cursor_right();
            true
        }
        KeyCode::Home => {
            state.editor.cursor_home();
            true
        }
        KeyCode::End => {
            state.editor.cursor_end();
            true
        }

        KeyCode::Backspace => {
            if state.editor.backspace() && mode == FilterMode::Inline {
                commit_draft(state);
            }
            true
        }

        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => false,

        KeyCode::Char(ch) => {
            state.editor.insert_char(ch);
            if mode == FilterMode::Inline {
                commit_draft(state);
            }
            true
        }

        // The editor holds focus; swallow everything else.
        _ => true,
    }
}

fn commit_draft(state: &mut AppState) {
    let draft = state.editor.draft().clone();
    state.set_filters(draft);
}
