//! One-shot wiring of the picker onto the expiration field
//!
//! Once the form tree is fully constructed, the binder locates the
//! expiration field by identifier and initializes picker behavior on it
//! with the fixed expiry configuration. Binding happens exactly once per
//! application run; a form without the expected field is silently skipped.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::clock::Clock;
use crate::constants::EXPIRATION_FIELD_ID;
use crate::form::Form;
use crate::picker::{PickerConfig, PickerInit};

/// Binds picker behavior to the expiration field, at most once.
#[derive(Debug, Default)]
pub struct FieldBinder {
    bound: OnceCell<()>,
}

impl FieldBinder {
    pub fn new() -> Self {
        Self { bound: OnceCell::new() }
    }

    /// Run the binding step. Call after the form tree is constructed.
    ///
    /// Locates the field with identifier `expiration_date` and hands the
    /// host an inline 24-hour picker configuration with seconds granularity
    /// and a disable hook that rejects candidates earlier than the clock's
    /// reading at each evaluation. If the field is absent the call is a
    /// no-op; a repeated call on the same binder is also a no-op.
    pub fn on_ready(&self, form: &Form, host: &mut dyn PickerInit, clock: Arc<dyn Clock>) {
        if self.bound.set(()).is_err() {
            log::debug!("picker already bound, skipping");
            return;
        }

        let Some(field) = form.field(EXPIRATION_FIELD_ID) else {
            log::debug!("no field with id '{}', skipping picker binding", EXPIRATION_FIELD_ID);
            return;
        };

        log::debug!("binding expiry picker to field '{}'", field.id);
        host.init(&field.id, PickerConfig::expiry(clock));
    }

    /// Whether the binding step has already run.
    pub fn has_run(&self) -> bool {
        self.bound.get().is_some()
    }
}
