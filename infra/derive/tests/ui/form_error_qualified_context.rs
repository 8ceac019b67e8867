#[tubeform_derive::form_error]
pub enum QualifiedError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: std::option::Option<std::borrow::Cow<'static, str>>,
    },
}

fn main() {
    let parsed: Result<u8, QualifiedError> = "x".parse::<u8>().map_err(QualifiedError::from);
    assert!(parsed.is_err());
}
