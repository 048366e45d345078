//! Reusable UI components

pub mod common;
pub mod error_dialog;
pub mod form_view;
pub mod picker_field;
pub mod status_bar;

pub use error_dialog::ErrorDialog;
pub use form_view::FormView;
pub use picker_field::PickerField;
pub use status_bar::StatusBar;
