//! Value types for documents.
//!
//! This module provides the [`Value`] enum that represents every node a
//! document can contain. Values are either leaves (scalars) or branches
//! (lists and maps); [`Value::Absent`] stands for "nothing here".

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DocError, Map, Path, Segment};

/// Values that can be stored in a document.
///
/// # Value Types
///
/// ## Leaf Values
/// - [`Value::Null`] - An explicit null
/// - [`Value::Bool`] - Boolean values
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - Finite 64-bit floats
/// - [`Value::Text`] - UTF-8 strings
///
/// ## Branch Values
/// - [`Value::List`] - Ordered sequences
/// - [`Value::Map`] - Insertion-ordered maps
///
/// ## Absence
/// - [`Value::Absent`] - No value. Distinct from `Null`. Inside a list it is a
///   hole that still counts toward the length; a map never stores it.
///
/// # Direct Comparisons
///
/// ```
/// # use confluence::doc::Value;
/// let text = Value::from("hello");
/// assert!(text == "hello");
/// assert!(Value::Int(42) == 42);
/// assert!(!(Value::Null == Value::Absent));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// No value
    #[default]
    Absent,
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Key/value map
    Map(Map),
}

impl Value {
    /// Returns true if this is [`Value::Absent`]
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value can contain other values
    pub fn is_container(&self) -> bool {
        matches!(self, Value::List(_) | Value::Map(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Absent => "absent",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to convert to a map
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the direct child addressed by `segment`.
    ///
    /// Keys address maps and indices address lists; any other pairing yields
    /// `None`. A hole inside a list is returned as `Some(&Value::Absent)`.
    pub fn get(&self, segment: &Segment) -> Option<&Value> {
        match (self, segment) {
            (Value::Map(map), Segment::Key(k)) => map.get(k),
            (Value::List(items), Segment::Index(i)) => items.get(*i),
            _ => None,
        }
    }

    /// Returns the node at `path`, or `None` if it does not resolve.
    ///
    /// ```
    /// # use confluence::{doc::Value, path};
    /// # use serde_json::json;
    /// let doc = Value::from(json!({"user": {"tags": ["a", "b"]}}));
    /// assert_eq!(doc.get_path(&path!("user", "tags", 1)), Some(&Value::from("b")));
    /// assert_eq!(doc.get_path(&path!("user", "name")), None);
    /// ```
    pub fn get_path(&self, path: &Path) -> Option<&Value> {
        let mut node = self;
        for segment in path {
            node = node.get(segment)?;
        }
        if node.is_absent() { None } else { Some(node) }
    }

    /// Checks that every node can be faithfully represented.
    ///
    /// Non-finite floats are rejected: they have no JSON form and are not
    /// equal to themselves, which would break structural equality.
    pub fn validate(&self) -> Result<(), DocError> {
        fn walk(value: &Value, path: &mut Vec<Segment>) -> Result<(), DocError> {
            match value {
                Value::Float(n) if !n.is_finite() => Err(DocError::UnsupportedValue {
                    path: Path::new(path).to_string(),
                    reason: format!("non-finite float {n}"),
                }),
                Value::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        path.push(Segment::Index(i));
                        walk(item, path)?;
                        path.pop();
                    }
                    Ok(())
                }
                Value::Map(map) => {
                    for (k, v) in map.iter() {
                        path.push(Segment::from(k));
                        walk(v, path)?;
                        path.pop();
                    }
                    Ok(())
                }
                _ => Ok(()),
            }
        }
        walk(self, &mut Vec::new())
    }

    /// Converts to a `serde_json::Value`.
    ///
    /// Holes in lists become `null`; an absent root becomes `null`.
    pub fn to_json(&self) -> Result<serde_json::Value, DocError> {
        self.validate()?;
        serde_json::to_value(self).map_err(|e| DocError::UnsupportedValue {
            path: Path::root().to_string(),
            reason: e.to_string(),
        })
    }

    /// Converts any serializable data into a document value.
    ///
    /// Fails with [`DocError::UnsupportedValue`] for data that has no JSON
    /// representation (maps with non-string keys, non-finite floats).
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Value, DocError> {
        serde_json::to_value(data)
            .map(Value::from)
            .map_err(|e| DocError::UnsupportedValue {
                path: Path::root().to_string(),
                reason: e.to_string(),
            })
    }

    /// Returns true if both values are containers of the same kind.
    pub(crate) fn same_container_kind(&self, other: &Value) -> bool {
        matches!(
            (self, other),
            (Value::List(_), Value::List(_)) | (Value::Map(_), Value::Map(_))
        )
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Absent | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(map) => map.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Map(map.into_iter().collect()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{}", serde_json::Value::String(s.clone())),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{v}", serde_json::Value::String(k.to_string()))?;
                }
                write!(f, "}}")
            }
        }
    }
}
