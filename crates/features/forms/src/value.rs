use chrono::NaiveDate;
use serde_json::{Number, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How raw input text becomes a record value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Stored as typed.
    #[default]
    Text,
    /// Parsed as a number; empty or unparseable input is stored as missing (`null`).
    Number,
    /// Parsed as `YYYY-MM-DD`; empty or invalid input is stored as missing (`null`).
    Date,
}

impl Coercion {
    #[must_use]
    pub fn coerce(self, raw: &str) -> Value {
        match self {
            Self::Text => Value::String(raw.to_owned()),
            Self::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map_or(Value::Null, Value::Number),
            Self::Date => NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
                .map_or(Value::Null, |date| Value::String(date.format(DATE_FORMAT).to_string())),
        }
    }
}

/// `true` for values that fail a `required` rule.
#[must_use]
pub fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => false,
    }
}

/// Text shown in the bound input element.
#[must_use]
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Number(number) => number_text(number),
        other => other.to_string(),
    }
}

// Integral floats render without a trailing `.0` so number inputs round-trip.
fn number_text(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => format!("{float:.0}"),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_parse_or_go_missing() {
        assert_eq!(Coercion::Number.coerce("42"), json!(42.0));
        assert_eq!(Coercion::Number.coerce(" 7.5 "), json!(7.5));
        assert_eq!(Coercion::Number.coerce(""), Value::Null);
        assert_eq!(Coercion::Number.coerce("forty"), Value::Null);
        assert_eq!(Coercion::Number.coerce("NaN"), Value::Null);
    }

    #[test]
    fn dates_parse_or_go_missing() {
        assert_eq!(Coercion::Date.coerce("2001-02-03"), json!("2001-02-03"));
        assert_eq!(Coercion::Date.coerce("2001-02-30"), Value::Null);
        assert_eq!(Coercion::Date.coerce(""), Value::Null);
    }

    #[test]
    fn text_is_kept_verbatim() {
        assert_eq!(Coercion::Text.coerce(" spaced "), json!(" spaced "));
    }

    #[test]
    fn missing_values() {
        assert!(is_missing(&Value::Null));
        assert!(is_missing(&json!("")));
        assert!(is_missing(&json!([])));
        assert!(!is_missing(&json!(0)));
        assert!(!is_missing(&json!(" ")));
    }

    #[test]
    fn display_text_drops_integral_fraction() {
        assert_eq!(display_text(&json!(0.0)), "0");
        assert_eq!(display_text(&json!(31.0)), "31");
        assert_eq!(display_text(&json!(31.5)), "31.5");
        assert_eq!(display_text(&Value::Null), "");
        assert_eq!(display_text(&json!("Batman")), "Batman");
    }
}
