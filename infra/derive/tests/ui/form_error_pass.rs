use std::borrow::Cow;
use tubeform_derive::form_error;

#[form_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Missing field{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
    io.context("Reading fixture")?;
    Ok(())
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading fixture): boom");

    let err: DemoError = "broken invariant".into();
    assert_eq!(err.to_string(), "Internal error: broken invariant");

    let missing: Result<(), DemoError> =
        Err(DemoError::Missing { message: "username".into(), context: None });
    let err = missing.context("Binding input").unwrap_err();
    assert_eq!(err.to_string(), "Missing field (Binding input): username");
}
