use std::borrow::Cow;
use tubeform_forms::FormError;

#[tubeform_derive::form_error]
pub enum ProfileError {
    #[error("Form error{}: {source}", format_context(.context))]
    Form { source: FormError, context: Option<Cow<'static, str>> },

    #[error("Invalid pattern{}: {source}", format_context(.context))]
    Pattern { source: regex::Error, context: Option<Cow<'static, str>> },

    #[error("Email lookup failed{}: {source}", format_context(.context))]
    Lookup { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Internal profile error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
