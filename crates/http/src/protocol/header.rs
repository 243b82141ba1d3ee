//! Case-insensitive, order-preserving header storage.
//!
//! [`HeaderBag`] is the single header representation shared by requests and
//! responses. Header names are normalized to their lower-cased form at
//! construction time, so lookups never need to care about the casing the
//! caller (or the transport) used on the wire. Each name maps to an ordered
//! list of string values; the order in which values were supplied for a name
//! is preserved.
//!
//! A bag is built once, at message construction, and never mutated afterward.
//! Changing headers means building a new message.

use std::collections::HashMap;
use std::collections::hash_map;

/// The value side of a raw header entry: either a single value or an ordered
/// list of values.
///
/// Conversions exist for the usual suspects so callers can hand over string
/// slices, owned strings, lists, and the numeric types that commonly end up
/// in headers (content lengths, ports). Everything is coerced to a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValues {
    /// A single header value.
    One(String),
    /// Multiple values for the same name, in order.
    Many(Vec<String>),
}

impl HeaderValues {
    fn into_vec(self) -> Vec<String> {
        match self {
            HeaderValues::One(value) => vec![value],
            HeaderValues::Many(values) => values,
        }
    }
}

impl From<&str> for HeaderValues {
    fn from(value: &str) -> Self {
        HeaderValues::One(value.to_string())
    }
}

impl From<String> for HeaderValues {
    fn from(value: String) -> Self {
        HeaderValues::One(value)
    }
}

impl From<Vec<String>> for HeaderValues {
    fn from(values: Vec<String>) -> Self {
        HeaderValues::Many(values)
    }
}

impl From<Vec<&str>> for HeaderValues {
    fn from(values: Vec<&str>) -> Self {
        HeaderValues::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for HeaderValues {
    fn from(values: &[String]) -> Self {
        HeaderValues::Many(values.to_vec())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for HeaderValues {
                fn from(value: $ty) -> Self {
                    HeaderValues::One(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(u16, u32, u64, usize, i32, i64, bool);

/// Case-insensitive multi-value header store.
///
/// Storage keys are always the lower-cased header name. Values keep their
/// insertion order per name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderBag {
    data: HashMap<String, Vec<String>>,
}

impl HeaderBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes raw header entries into a bag.
    ///
    /// Each entry's name is lower-cased; its value side becomes an ordered
    /// list of strings. When two raw names normalize to the same key, the
    /// later entry wins. Callers that want to accumulate multiple values
    /// under one name must pre-merge them into a list themselves.
    ///
    /// No syntax validation is applied to names or values.
    pub fn normalize<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<HeaderValues>,
    {
        let mut data = HashMap::new();
        for (name, values) in raw {
            data.insert(name.as_ref().to_ascii_lowercase(), values.into().into_vec());
        }
        Self { data }
    }

    /// Returns all values for `name`, matching case-insensitively.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.data.get(&name.to_ascii_lowercase()).map(Vec::as_slice)
    }

    /// Returns the first value for `name`, matching case-insensitively.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    /// Returns true if the bag holds any value under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.data.contains_key(&name.to_ascii_lowercase())
    }

    /// Number of distinct header names in the bag.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the bag holds no headers at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over `(lower-cased name, values)` entries.
    ///
    /// Iteration order across names is unspecified; the value order within a
    /// name is the insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.data.iter().map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<'a> IntoIterator for &'a HeaderBag {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = hash_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
