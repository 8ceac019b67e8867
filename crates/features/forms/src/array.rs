use crate::error::FormError;
use crate::path::{FieldPath, Segment};
use crate::rules::Rules;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tubeform_kernel::entry_id;

/// Declaration of a variable-length list of records, such as `phNumbers`.
///
/// ```rust
/// use serde_json::json;
/// use tubeform_forms::{FieldArray, Rules};
///
/// let phones = FieldArray::new(json!({ "number": "" }))
///     .min_len(1)
///     .field("number", Rules::new());
/// # let _ = phones;
/// ```
#[derive(Debug, Clone)]
pub struct FieldArray {
    template: Value,
    min_len: usize,
    item_rules: Vec<(String, Rules)>,
}

impl FieldArray {
    /// `template` is the blank entry added by `append_default`.
    #[must_use]
    pub const fn new(template: Value) -> Self {
        Self { template, min_len: 0, item_rules: Vec::new() }
    }

    #[must_use]
    pub const fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Rules for a path relative to each entry. Pass `""` for lists of plain values.
    #[must_use]
    pub fn field(mut self, relative: impl Into<String>, rules: Rules) -> Self {
        self.item_rules.push((relative.into(), rules));
        self
    }
}

/// Position and stable identity of one list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayEntry {
    pub id: String,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct ArrayState {
    pub(crate) template: Value,
    pub(crate) min_len: usize,
    pub(crate) item_rules: BTreeMap<Vec<Segment>, Rules>,
    pub(crate) ids: Vec<String>,
}

impl ArrayState {
    pub(crate) fn new(path: &FieldPath, decl: FieldArray, values: &Value) -> Result<Self, FormError> {
        let len = match values.pointer(&path.pointer()) {
            Some(Value::Array(items)) => items.len(),
            Some(_) => {
                return Err(FormError::NotAnArray { message: path.to_string().into(), context: None });
            },
            None => {
                return Err(FormError::UnknownField {
                    message: path.to_string().into(),
                    context: Some("Declaring field array".into()),
                });
            },
        };

        if len < decl.min_len {
            return Err(FormError::ArrayBounds {
                message: format!("'{path}' starts with {len} entries, minimum is {}", decl.min_len).into(),
                context: None,
            });
        }

        let mut item_rules = BTreeMap::new();
        for (relative, rules) in decl.item_rules {
            let tail = if relative.is_empty() {
                Vec::new()
            } else {
                FieldPath::parse(&relative)?.segments().to_vec()
            };
            item_rules.insert(tail, rules);
        }

        Ok(Self { template: decl.template, min_len: decl.min_len, item_rules, ids: fresh_ids(len) })
    }

    pub(crate) fn regenerate(&mut self, len: usize) {
        self.ids = fresh_ids(len);
    }

    pub(crate) fn entries(&self) -> Vec<ArrayEntry> {
        self.ids
            .iter()
            .enumerate()
            .map(|(index, id)| ArrayEntry { id: id.clone(), index })
            .collect()
    }

    /// Rules for `path` if it addresses a field inside a live entry of the list at `array`.
    pub(crate) fn rules_for(&self, array: &FieldPath, path: &FieldPath) -> Option<&Rules> {
        if !path.starts_with(array) {
            return None;
        }
        match path.segments().split_at(array.segments().len()).1 {
            [Segment::Index(index), tail @ ..] if *index < self.ids.len() => self.item_rules.get(tail),
            _ => None,
        }
    }

    pub(crate) fn item_paths(&self, array: &FieldPath) -> impl Iterator<Item = FieldPath> + '_ {
        let array = array.clone();
        (0..self.ids.len()).flat_map(move |index| {
            let entry = array.child_index(index);
            self.item_rules.keys().map(move |tail| entry.join(tail))
        })
    }
}

fn fresh_ids(len: usize) -> Vec<String> {
    (0..len).map(|_| entry_id!()).collect()
}
