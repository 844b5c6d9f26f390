//! Bound parameter values.

/// A value bound to one placeholder.
///
/// Filter values are never NULL: a lookup either binds a concrete value or
/// is rejected before it reaches the expression tree.
///
/// ```rust
/// use trawl_query::Value;
///
/// assert_eq!(Value::from("%rust%").as_str(), Some("%rust%"));
/// assert_eq!(Value::from(42i32), Value::Int(42));
/// assert_eq!(Value::from(42i64).as_str(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
	Bool(bool),
	Int(i32),
	BigInt(i64),
	Double(f64),
	Text(String),
	#[cfg(feature = "with-chrono")]
	Date(chrono::NaiveDate),
	#[cfg(feature = "with-chrono")]
	DateTime(chrono::NaiveDateTime),
	#[cfg(feature = "with-uuid")]
	Uuid(uuid::Uuid),
}

impl Value {
	/// The payload of a text value.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(s) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Self::Bool(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Self::Int(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Self::BigInt(v)
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Self::Double(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Self::Text(v.to_string())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Self::Text(v)
	}
}

#[cfg(feature = "with-chrono")]
impl From<chrono::NaiveDate> for Value {
	fn from(v: chrono::NaiveDate) -> Self {
		Self::Date(v)
	}
}

#[cfg(feature = "with-chrono")]
impl From<chrono::NaiveDateTime> for Value {
	fn from(v: chrono::NaiveDateTime) -> Self {
		Self::DateTime(v)
	}
}

#[cfg(feature = "with-uuid")]
impl From<uuid::Uuid> for Value {
	fn from(v: uuid::Uuid) -> Self {
		Self::Uuid(v)
	}
}

/// The parameters of one rendered statement.
///
/// The n-th entry binds the n-th placeholder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Values(Vec<Value>);

impl Values {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn push(&mut self, value: Value) {
		self.0.push(value);
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Value> {
		self.0.iter()
	}

	pub fn as_slice(&self) -> &[Value] {
		&self.0
	}
}

impl IntoIterator for Values {
	type Item = Value;
	type IntoIter = std::vec::IntoIter<Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'a> IntoIterator for &'a Values {
	type Item = &'a Value;
	type IntoIter = std::slice::Iter<'a, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
