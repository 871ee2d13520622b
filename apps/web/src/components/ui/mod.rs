mod alert;
mod button;
mod field_error;
mod modal;
mod spinner;
mod text_input;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::{Button, ButtonTone};
pub(crate) use field_error::FieldError;
pub(crate) use modal::ConfirmModal;
pub(crate) use spinner::Spinner;
pub(crate) use text_input::{TextArea, TextInput};
