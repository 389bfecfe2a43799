//! In-memory model of a parsed document.
//!
//! [`Value`] is a closed union over the shapes every supported document format
//! shares: null, booleans, numbers, strings, sequences and string-keyed
//! mappings. Mappings keep insertion order so a merged document serialises
//! with the same key layout as its inputs, but ordering never affects
//! equality or merging.

mod de;
mod ser;

pub use serde_json::Number;

use indexmap::IndexMap;

/// Ordered mapping from string keys to values.
pub type Mapping = IndexMap<String, Value>;

/// A parsed document node.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absence marker. Always yields to a non-null counterpart when merging.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer or finite floating point scalar.
    Number(Number),
    /// String scalar.
    String(String),
    /// Ordered list of values.
    Sequence(Vec<Value>),
    /// String-keyed mapping.
    Mapping(Mapping),
}

/// Coarse classification used by the merge rules.
///
/// Booleans, numbers and strings are indivisible for merging purposes and
/// collapse into [`Kind::Primitive`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`], [`Value::Number`] or [`Value::String`].
    Primitive,
    /// [`Value::Sequence`].
    Sequence,
    /// [`Value::Mapping`].
    Mapping,
}

impl Value {
    /// Returns the merge classification of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) | Self::Number(_) | Self::String(_) => Kind::Primitive,
            Self::Sequence(_) => Kind::Sequence,
            Self::Mapping(_) => Kind::Mapping,
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` for booleans, numbers and strings.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self.kind(), Kind::Primitive)
    }

    /// Borrows the string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Borrows the boolean payload, if any.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Borrows the numeric payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Borrows the elements of a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrows the entries of a mapping.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Looks up a nested value by following mapping keys.
    ///
    /// ```
    /// use yaml_merger::{Mapping, Value};
    ///
    /// let mut inner = Mapping::new();
    /// inner.insert("port".to_owned(), Value::from(8080));
    /// let mut outer = Mapping::new();
    /// outer.insert("server".to_owned(), Value::Mapping(inner));
    ///
    /// let value = Value::Mapping(outer);
    /// assert_eq!(value.pointer(&["server", "port"]), Some(&Value::from(8080)));
    /// assert_eq!(value.pointer(&["server", "host"]), None);
    /// ```
    #[must_use]
    pub fn pointer(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Self::Number(Number::from(int))
    }
}

impl From<i32> for Value {
    fn from(int: i32) -> Self {
        Self::Number(Number::from(int))
    }
}

impl From<u64> for Value {
    fn from(int: u64) -> Self {
        Self::Number(Number::from(int))
    }
}

/// Non-finite floats have no [`Number`] form and become [`Value::Null`].
impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Number::from_f64(float).map_or(Self::Null, Self::Number)
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
