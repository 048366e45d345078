//! Application state and business logic

use std::sync::Arc;

use crate::binder::FieldBinder;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::constants::EXPIRATION_FIELD_ID;
use crate::form::{Form, Submission};
use crate::picker::{PickerConfig, PickerInit, PickerState};

/// Which form field currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Secret,
    Content,
    Expiration,
}

impl FocusedField {
    /// Next field in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            FocusedField::Secret => FocusedField::Content,
            FocusedField::Content => FocusedField::Expiration,
            FocusedField::Expiration => FocusedField::Secret,
        }
    }

    /// Previous field in tab order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            FocusedField::Secret => FocusedField::Expiration,
            FocusedField::Content => FocusedField::Secret,
            FocusedField::Expiration => FocusedField::Content,
        }
    }
}

/// Host slot that materializes picker state when the binder initializes it.
pub struct PickerHost {
    clock: Arc<dyn Clock>,
    pub state: Option<PickerState>,
}

impl PickerHost {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock, state: None }
    }
}

impl PickerInit for PickerHost {
    fn init(&mut self, selector: &str, config: PickerConfig) {
        self.state = Some(PickerState::attach(selector, config, self.clock.as_ref()));
    }
}

/// Application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub form: Form,
    pub focused: FocusedField,
    pub binder: FieldBinder,
    pub host: PickerHost,
    pub clock: Arc<dyn Clock>,
    pub error_message: Option<String>,
    pub submission: Option<Submission>,
}

impl App {
    /// Create a new App instance against the system clock.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a new App instance with an explicit clock.
    #[must_use]
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            should_quit: false,
            config,
            form: Form::compose(),
            focused: FocusedField::Secret,
            binder: FieldBinder::new(),
            host: PickerHost::new(clock.clone()),
            clock,
            error_message: None,
            submission: None,
        }
    }

    /// Run the one-shot picker binding. Call once the form tree is built.
    pub fn on_ready(&mut self) {
        self.binder.on_ready(&self.form, &mut self.host, self.clock.clone());
    }

    /// The bound picker, if the binding step found its field.
    pub fn picker(&self) -> Option<&PickerState> {
        self.host.state.as_ref()
    }

    /// The bound picker, mutably.
    pub fn picker_mut(&mut self) -> Option<&mut PickerState> {
        self.host.state.as_mut()
    }

    /// Move keyboard focus to the next field.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    /// Move keyboard focus to the previous field.
    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// Append a typed character to the focused text field.
    pub fn input_char(&mut self, c: char) {
        if let Some(id) = self.focused_text_field() {
            if let Some(field) = self.form.field_mut(id) {
                field.value.push(c);
            }
        }
    }

    /// Remove the last character from the focused text field.
    pub fn backspace(&mut self) {
        if let Some(id) = self.focused_text_field() {
            if let Some(field) = self.form.field_mut(id) {
                field.value.pop();
            }
        }
    }

    /// Copy the picker's committed value into the expiration field.
    pub fn sync_expiration_field(&mut self) {
        let committed = self.picker().and_then(PickerState::formatted);
        if let Some(text) = committed {
            if let Some(field) = self.form.field_mut(EXPIRATION_FIELD_ID) {
                field.value = text;
            }
        }
    }

    /// Validate the form and stage the submission payload.
    ///
    /// On success the app shuts down; the payload is handed to whatever
    /// invoked the UI. On failure every validation message is surfaced.
    pub fn submit(&mut self) {
        self.sync_expiration_field();

        match self.form.validate(self.clock.as_ref()) {
            Ok(submission) => {
                log::debug!("form validated, expires {}", submission.expiration_text());
                self.submission = Some(submission);
                self.should_quit = true;
            }
            Err(errors) => {
                let message = errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n");
                self.error_message = Some(message);
            }
        }
    }

    fn focused_text_field(&self) -> Option<&'static str> {
        match self.focused {
            FocusedField::Secret => Some(crate::constants::SECRET_FIELD_ID),
            FocusedField::Content => Some(crate::constants::CONTENT_FIELD_ID),
            FocusedField::Expiration => None,
        }
    }
}
