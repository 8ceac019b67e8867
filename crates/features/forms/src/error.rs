use std::borrow::Cow;

/// Errors returned by the form controller API.
///
/// These describe misuse of the controller (unknown paths, bad list indexes) or a
/// record that no longer decodes. Field validation failures are data, see
/// [`crate::FieldError`].
#[tubeform_derive::form_error]
pub enum FormError {
    /// A path string could not be parsed.
    #[error("Invalid field path{}: {message}", format_context(.context))]
    InvalidPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The path does not address a value of the record.
    #[error("Unknown field{}: {message}", format_context(.context))]
    UnknownField { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A list operation targeted a path that is not a registered field array.
    #[error("Not a field array{}: {message}", format_context(.context))]
    NotAnArray { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Index out of range, or the list would drop below its minimum length.
    #[error("Field array bounds{}: {message}", format_context(.context))]
    ArrayBounds { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The record could not be converted to or from its typed form.
    #[error("Record decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal form error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
