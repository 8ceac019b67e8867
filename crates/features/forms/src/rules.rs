use crate::field_error::{ErrorKind, FieldError};
use crate::value::{Coercion, is_missing};
use async_trait::async_trait;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Outcome of a synchronous predicate: `Err` carries the message to show.
pub type RuleResult = Result<(), Cow<'static, str>>;

type Predicate = Arc<dyn Fn(&Value) -> RuleResult + Send + Sync>;
type DisabledWhen = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Answer of an [`AsyncRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncVerdict {
    Pass,
    /// The value is rejected with this message.
    Fail(Cow<'static, str>),
    /// The check itself failed (transport, decoding) and the value must not be accepted.
    Errored(Cow<'static, str>),
}

/// A validator that has to leave the event loop, typically a network lookup.
///
/// It receives an owned copy of the field value so the check can outlive any
/// borrow of the controller.
#[async_trait]
pub trait AsyncRule: Send + Sync {
    async fn check(&self, value: Value) -> AsyncVerdict;
}

#[derive(Clone)]
pub(crate) struct NamedPredicate {
    name: Cow<'static, str>,
    predicate: Predicate,
}

#[derive(Clone)]
pub(crate) struct NamedAsyncRule {
    pub(crate) name: Cow<'static, str>,
    pub(crate) rule: Arc<dyn AsyncRule>,
}

#[derive(Debug, Clone)]
struct Pattern {
    regex: Regex,
    message: Cow<'static, str>,
}

/// Result of running the synchronous part of a rule chain.
pub(crate) enum Evaluation {
    Passed,
    Failed(FieldError),
    /// Synchronous rules passed; the asynchronous one still has to run on `value`.
    Deferred { rule: NamedAsyncRule, value: Value },
}

/// Validation rules of one field.
///
/// Evaluation order: `required`, `pattern`, named predicates in declaration order,
/// then the asynchronous rule. The first failure wins and nothing after it runs.
///
/// ```rust
/// use regex::Regex;
/// use tubeform_forms::Rules;
///
/// let rules = Rules::new()
///     .required("Phone number is required")
///     .pattern(Regex::new("^[0-9]+$").unwrap(), "Number only");
/// # let _ = rules;
/// ```
#[derive(Clone, Default)]
pub struct Rules {
    required: Option<Cow<'static, str>>,
    pattern: Option<Pattern>,
    coercion: Coercion,
    disabled_when: Option<DisabledWhen>,
    predicates: Vec<NamedPredicate>,
    async_rule: Option<NamedAsyncRule>,
}

impl Rules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Non-empty text must match `regex`. Empty values are left to `required`.
    #[must_use]
    pub fn pattern(mut self, regex: Regex, message: impl Into<Cow<'static, str>>) -> Self {
        self.pattern = Some(Pattern { regex, message: message.into() });
        self
    }

    /// Input text is parsed as a number.
    #[must_use]
    pub const fn numeric(mut self) -> Self {
        self.coercion = Coercion::Number;
        self
    }

    /// Input text is parsed as a `YYYY-MM-DD` date.
    #[must_use]
    pub const fn date(mut self) -> Self {
        self.coercion = Coercion::Date;
        self
    }

    /// Disables the field while `when` holds for the whole record.
    ///
    /// A disabled field is skipped by validation and reports no error, but keeps its value.
    #[must_use]
    pub fn disabled_when(mut self, when: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.disabled_when = Some(Arc::new(when));
        self
    }

    /// Adds a named synchronous predicate.
    #[must_use]
    pub fn validate(
        mut self,
        name: impl Into<Cow<'static, str>>,
        predicate: impl Fn(&Value) -> RuleResult + Send + Sync + 'static,
    ) -> Self {
        self.predicates.push(NamedPredicate { name: name.into(), predicate: Arc::new(predicate) });
        self
    }

    /// Sets the asynchronous rule. It only runs once every synchronous rule passed.
    #[must_use]
    pub fn validate_async(mut self, name: impl Into<Cow<'static, str>>, rule: Arc<dyn AsyncRule>) -> Self {
        self.async_rule = Some(NamedAsyncRule { name: name.into(), rule });
        self
    }

    #[must_use]
    pub const fn coercion(&self) -> Coercion {
        self.coercion
    }

    #[must_use]
    pub const fn has_async_rule(&self) -> bool {
        self.async_rule.is_some()
    }

    /// Recomputed from the current record on every call.
    #[must_use]
    pub fn is_disabled(&self, record: &Value) -> bool {
        self.disabled_when.as_ref().is_some_and(|when| when(record))
    }

    pub(crate) fn evaluate(&self, value: Value) -> Evaluation {
        if let Some(message) = &self.required
            && is_missing(&value)
        {
            return Evaluation::Failed(FieldError::new(ErrorKind::Required, message.clone()));
        }

        if let (Some(pattern), Value::String(text)) = (&self.pattern, &value)
            && !text.is_empty()
            && !pattern.regex.is_match(text)
        {
            return Evaluation::Failed(FieldError::new(ErrorKind::Pattern, pattern.message.clone()));
        }

        for NamedPredicate { name, predicate } in &self.predicates {
            if let Err(message) = predicate(&value) {
                return Evaluation::Failed(FieldError::new(ErrorKind::Custom(name.clone()), message));
            }
        }

        match &self.async_rule {
            Some(rule) => Evaluation::Deferred { rule: rule.clone(), value },
            None => Evaluation::Passed,
        }
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("required", &self.required)
            .field("pattern", &self.pattern.as_ref().map(|p| p.regex.as_str()))
            .field("coercion", &self.coercion)
            .field("disabled_when", &self.disabled_when.is_some())
            .field("predicates", &self.predicates.iter().map(|p| &p.name).collect::<Vec<_>>())
            .field("async_rule", &self.async_rule.as_ref().map(|r| &r.name))
            .finish()
    }
}

impl fmt::Debug for NamedAsyncRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedAsyncRule").field("name", &self.name).finish_non_exhaustive()
    }
}
