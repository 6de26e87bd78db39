//! # Route Parameters
//!
//! Parameters travel from a [`RoutableTarget`](crate::RoutableTarget) to the
//! registered handler inside a [`RouteContext`](crate::RouteContext). Values are a
//! closed set of literal kinds ([`ParamValue`]) rather than an open dynamic type;
//! handlers read them back with [`FromParam`] and own any further validation.
//!
//! ```rust,ignore
//! let params = params! { "id" => 42, "tab" => "posts", "compact" => true };
//! let id: i64 = ctx.get("id")?;
//! ```

use crate::error::ParamError;
use std::collections::HashMap;
use std::collections::hash_map;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// UTF-8 text.
    String(String),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
    /// Ordered list of values.
    List(Vec<ParamValue>),
    /// Nested mapping.
    Map(Params),
}

impl ParamValue {
    /// Human-readable name of the stored kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::String(_) => "string",
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Bool(_) => "bool",
            ParamValue::List(_) => "list",
            ParamValue::Map(_) => "map",
        }
    }

    /// Borrow the value as a string slice, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }
}

macro_rules! impl_from_for_param {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_for_param!(
    String => String,
    &str => String,
    i64 => Int,
    i32 => Int,
    u32 => Int,
    i16 => Int,
    u16 => Int,
    i8 => Int,
    u8 => Int,
    f64 => Float,
    f32 => Float,
    bool => Bool,
    Params => Map,
);

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(value: Vec<T>) -> Self {
        ParamValue::List(value.into_iter().map(Into::into).collect())
    }
}

/// Parameter mapping from name to value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Params(HashMap<String, ParamValue>);

impl Params {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a value, returning the previous value under that name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a raw value.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Whether a parameter with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Extract a typed value.
    pub fn extract<T: FromParam>(&self, name: &str) -> Result<T, ParamError> {
        match self.0.get(name) {
            Some(value) => T::from_param(name, value),
            None => Err(ParamError::Missing(name.to_string())),
        }
    }

    /// Extract a typed value, treating a missing parameter as `None`.
    ///
    /// A present value of the wrong kind is still an error.
    pub fn extract_opt<T: FromParam>(&self, name: &str) -> Result<Option<T>, ParamError> {
        self.0
            .get(name)
            .map(|value| T::from_param(name, value))
            .transpose()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, ParamValue>> for Params {
    fn from(map: HashMap<String, ParamValue>) -> Self {
        Self(map)
    }
}

impl IntoIterator for Params {
    type Item = (String, ParamValue);
    type IntoIter = hash_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = hash_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Params`] mapping from `name => value` pairs.
///
/// ```rust,ignore
/// let p = params! { "id" => 7, "title" => "Inbox" };
/// ```
#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::Params::new();
        $(
            params.insert($name, $value);
        )+
        params
    }};
}

/// A trait for reading a typed value out of a [`ParamValue`].
///
/// Integers widen to floats; no other coercion is performed.
pub trait FromParam: Sized {
    /// Convert the stored value, naming the parameter in any error.
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError>;
}

fn mismatch(name: &str, expected: &'static str, found: &ParamValue) -> ParamError {
    ParamError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.kind(),
    }
}

impl FromParam for ParamValue {
    fn from_param(_name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        Ok(value.clone())
    }
}

impl FromParam for String {
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        match value {
            ParamValue::String(s) => Ok(s.clone()),
            other => Err(mismatch(name, "string", other)),
        }
    }
}

impl FromParam for i64 {
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        match value {
            ParamValue::Int(i) => Ok(*i),
            other => Err(mismatch(name, "int", other)),
        }
    }
}

impl FromParam for f64 {
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        match value {
            ParamValue::Float(f) => Ok(*f),
            ParamValue::Int(i) => Ok(*i as f64),
            other => Err(mismatch(name, "float", other)),
        }
    }
}

impl FromParam for bool {
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        match value {
            ParamValue::Bool(b) => Ok(*b),
            other => Err(mismatch(name, "bool", other)),
        }
    }
}

impl FromParam for Vec<ParamValue> {
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        match value {
            ParamValue::List(items) => Ok(items.clone()),
            other => Err(mismatch(name, "list", other)),
        }
    }
}

impl FromParam for Params {
    fn from_param(name: &str, value: &ParamValue) -> Result<Self, ParamError> {
        match value {
            ParamValue::Map(map) => Ok(map.clone()),
            other => Err(mismatch(name, "map", other)),
        }
    }
}
