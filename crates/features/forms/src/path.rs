use crate::error::FormError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One step of a [`FieldPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Dotted address of a value inside the record: `social.twitter`, `phoneNumbers.0`,
/// `phNumbers.2.number`. Purely numeric segments are list indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// Parses a dotted path.
    ///
    /// # Errors
    /// Returns [`FormError::InvalidPath`] for an empty path or an empty segment (`a..b`).
    pub fn parse(raw: &str) -> Result<Self, FormError> {
        if raw.trim().is_empty() {
            return Err(FormError::InvalidPath { message: "path is empty".into(), context: None });
        }

        let segments = raw
            .split('.')
            .map(|part| {
                if part.is_empty() {
                    return Err(FormError::InvalidPath {
                        message: format!("empty segment in '{raw}'").into(),
                        context: None,
                    });
                }
                Ok(part.parse::<usize>().map_or_else(|_| Segment::Key(part.to_owned()), Segment::Index))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The same address as a JSON pointer (`/social/twitter`).
    #[must_use]
    pub fn pointer(&self) -> String {
        let mut pointer = String::new();
        for segment in &self.segments {
            pointer.push('/');
            match segment {
                Segment::Key(key) => pointer.push_str(&key.replace('~', "~0").replace('/', "~1")),
                Segment::Index(index) => pointer.push_str(&index.to_string()),
            }
        }
        pointer
    }

    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    #[must_use]
    pub fn child_key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_owned()));
        Self { segments }
    }

    #[must_use]
    pub fn join(&self, tail: &[Segment]) -> Self {
        let mut segments = self.segments.clone();
        segments.extend_from_slice(tail);
        Self { segments }
    }

    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// Where this path lives after entry `removed` of the list at `array` is deleted.
    ///
    /// Paths inside the removed entry map to `None`; paths inside later entries move
    /// one index down; everything else is unchanged.
    #[must_use]
    pub fn after_removal(&self, array: &Self, removed: usize) -> Option<Self> {
        if !self.starts_with(array) {
            return Some(self.clone());
        }
        match self.segments.get(array.segments.len()) {
            Some(Segment::Index(index)) if *index == removed => None,
            Some(Segment::Index(index)) if *index > removed => {
                let mut segments = self.segments.clone();
                segments[array.segments.len()] = Segment::Index(index - 1);
                Some(Self { segments })
            },
            _ => Some(self.clone()),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            match segment {
                Segment::Key(key) => f.write_str(key)?,
                Segment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
