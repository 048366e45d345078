//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, FocusedField};

/// Handle all user input events
pub fn handle_events(event: Event, app: &mut App) -> anyhow::Result<bool> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // The error dialog swallows the next key press
            if app.error_message.is_some() {
                app.error_message = None;
                return Ok(true);
            }

            return handle_key(key, app);
        }
    }
    Ok(false)
}

fn handle_key(key: KeyEvent, app: &mut App) -> anyhow::Result<bool> {
    // Global shortcuts first
    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return Ok(true);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return Ok(true);
        }
        KeyCode::Tab => {
            app.focus_next();
            return Ok(true);
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return Ok(true);
        }
        _ => {}
    }

    match app.focused {
        FocusedField::Expiration => handle_picker_key(key, app),
        _ => handle_text_key(key, app),
    }
}

/// Handle keys while the expiration picker has focus
fn handle_picker_key(key: KeyEvent, app: &mut App) -> anyhow::Result<bool> {
    let Some(picker) = app.picker_mut() else {
        // Field was never bound; nothing to drive
        return Ok(false);
    };

    match key.code {
        KeyCode::Left => {
            picker.prev_segment();
            Ok(true)
        }
        KeyCode::Right => {
            picker.next_segment();
            Ok(true)
        }
        KeyCode::Up => {
            picker.step_up();
            Ok(true)
        }
        KeyCode::Down => {
            picker.step_down();
            Ok(true)
        }
        KeyCode::Enter => {
            let result = picker.try_commit();
            match result {
                Ok(_) => app.sync_expiration_field(),
                Err(e) => app.error_message = Some(e.to_string()),
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Handle keys while a text field has focus
fn handle_text_key(key: KeyEvent, app: &mut App) -> anyhow::Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit();
            Ok(true)
        }
        KeyCode::Backspace => {
            app.backspace();
            Ok(true)
        }
        KeyCode::Char(c) => {
            app.input_char(c);
            Ok(true)
        }
        _ => Ok(false),
    }
}
