//! Declarative filter specifications.
//!
//! A [`FilterSpec`] maps field names to search [`Term`]s in insertion order.

use crate::error::{PatternFilterError, PatternFilterResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single search value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
	Boolean(bool),
	Integer(i64),
	Float(f64),
	Text(String),
}

impl Scalar {
	/// Returns true for the empty string.
	pub fn is_empty_text(&self) -> bool {
		matches!(self, Self::Text(s) if s.is_empty())
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Boolean(b) => write!(f, "{}", b),
			Self::Integer(i) => write!(f, "{}", i),
			Self::Float(x) => write!(f, "{}", x),
			Self::Text(s) => f.write_str(s),
		}
	}
}

/// A search term: one scalar, or an ordered (possibly nested) list of terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
	Scalar(Scalar),
	List(Vec<Term>),
}

impl Term {
	/// Text term.
	pub fn text(s: impl Into<String>) -> Self {
		Self::Scalar(Scalar::Text(s.into()))
	}

	/// Number of scalars in this term, counting nested lists.
	pub fn scalar_count(&self) -> usize {
		match self {
			Self::Scalar(_) => 1,
			Self::List(items) => items.iter().map(Term::scalar_count).sum(),
		}
	}

	/// Scalars of this term in order, flattening nested lists.
	pub fn flatten(&self) -> Vec<&Scalar> {
		let mut out = Vec::new();
		self.collect_scalars(&mut out);
		out
	}

	fn collect_scalars<'a>(&'a self, out: &mut Vec<&'a Scalar>) {
		match self {
			Self::Scalar(s) => out.push(s),
			Self::List(items) => items.iter().for_each(|item| item.collect_scalars(out)),
		}
	}

	fn from_json_value(field: &str, value: serde_json::Value) -> PatternFilterResult<Self> {
		use serde_json::Value as Json;

		match value {
			Json::String(s) => Ok(Self::text(s)),
			Json::Bool(b) => Ok(Self::Scalar(Scalar::Boolean(b))),
			Json::Number(n) => match (n.as_i64(), n.as_f64()) {
				(Some(i), _) => Ok(Self::Scalar(Scalar::Integer(i))),
				(None, Some(x)) => Ok(Self::Scalar(Scalar::Float(x))),
				(None, None) => Err(PatternFilterError::MalformedTerm {
					field: field.to_string(),
					reason: format!("number {} is out of range", n),
				}),
			},
			Json::Array(items) => items
				.into_iter()
				.map(|item| Self::from_json_value(field, item))
				.collect::<PatternFilterResult<Vec<_>>>()
				.map(Self::List),
			Json::Null => Err(PatternFilterError::MalformedTerm {
				field: field.to_string(),
				reason: "null is not a search term".to_string(),
			}),
			Json::Object(_) => Err(PatternFilterError::MalformedTerm {
				field: field.to_string(),
				reason: "objects are not search terms".to_string(),
			}),
		}
	}
}

impl From<Scalar> for Term {
	fn from(s: Scalar) -> Self {
		Self::Scalar(s)
	}
}

impl From<&str> for Term {
	fn from(s: &str) -> Self {
		Self::text(s)
	}
}

impl From<String> for Term {
	fn from(s: String) -> Self {
		Self::text(s)
	}
}

impl From<bool> for Term {
	fn from(b: bool) -> Self {
		Self::Scalar(Scalar::Boolean(b))
	}
}

impl From<i32> for Term {
	fn from(i: i32) -> Self {
		Self::Scalar(Scalar::Integer(i64::from(i)))
	}
}

impl From<i64> for Term {
	fn from(i: i64) -> Self {
		Self::Scalar(Scalar::Integer(i))
	}
}

impl From<f64> for Term {
	fn from(x: f64) -> Self {
		Self::Scalar(Scalar::Float(x))
	}
}

impl<T: Into<Term>> From<Vec<T>> for Term {
	fn from(items: Vec<T>) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Term>, const N: usize> From<[T; N]> for Term {
	fn from(items: [T; N]) -> Self {
		Self::List(items.into_iter().map(Into::into).collect())
	}
}

/// Ordered mapping from field name to search term.
///
/// ```rust
/// use trawl_filters::{FilterSpec, Term};
///
/// let spec = FilterSpec::new()
///     .field("title", ["Engineer", "Remote"])
///     .field("status", "open");
///
/// let fields: Vec<_> = spec.iter().map(|(name, _)| name).collect();
/// assert_eq!(fields, vec!["title", "status"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSpec {
	fields: IndexMap<String, Term>,
}

impl FilterSpec {
	/// Create an empty spec.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add (or replace) the term for `name`.
	///
	/// Replacing keeps the field's original position.
	pub fn field(mut self, name: impl Into<String>, term: impl Into<Term>) -> Self {
		self.fields.insert(name.into(), term.into());
		self
	}

	/// Build a spec from a JSON object.
	///
	/// Values may be strings, numbers, booleans or (nested) arrays of those.
	///
	/// # Errors
	///
	/// Returns [`PatternFilterError::NotAnObject`] if `value` is not an object,
	/// and [`PatternFilterError::MalformedTerm`] for null or object terms.
	pub fn from_json(value: serde_json::Value) -> PatternFilterResult<Self> {
		let serde_json::Value::Object(map) = value else {
			return Err(PatternFilterError::NotAnObject {
				found: json_kind(&value).to_string(),
			});
		};

		let mut fields = IndexMap::with_capacity(map.len());
		for (name, raw) in map {
			let term = Term::from_json_value(&name, raw)?;
			fields.insert(name, term);
		}
		Ok(Self { fields })
	}

	/// Build a spec from query-string pairs.
	///
	/// Each value is split into terms on commas, keeping double-quoted
	/// segments together. A single term becomes a scalar; several become a
	/// list. Repeated keys accumulate into one list.
	///
	/// ```rust
	/// use trawl_filters::{FilterSpec, Term};
	///
	/// let spec = FilterSpec::from_query_params(&[("title", "rust, \"web, api\"")]);
	/// assert_eq!(
	///     spec.get("title"),
	///     Some(&Term::from(vec!["rust", "web, api"]))
	/// );
	/// ```
	pub fn from_query_params<K, V>(params: &[(K, V)]) -> Self
	where
		K: AsRef<str>,
		V: AsRef<str>,
	{
		let mut fields: IndexMap<String, Term> = IndexMap::new();
		for (key, raw) in params {
			let mut terms: Vec<Term> = parse_search_terms(raw.as_ref())
				.into_iter()
				.map(Term::text)
				.collect();

			match fields.get_mut(key.as_ref()) {
				Some(existing) => {
					let previous = std::mem::replace(existing, Term::List(Vec::new()));
					let mut merged = match previous {
						Term::List(items) => items,
						scalar => vec![scalar],
					};
					merged.append(&mut terms);
					*existing = Term::List(merged);
				}
				None => {
					let term = if terms.len() == 1 {
						terms.remove(0)
					} else {
						Term::List(terms)
					};
					fields.insert(key.as_ref().to_string(), term);
				}
			}
		}
		Self { fields }
	}

	/// Term for `name`, if present.
	pub fn get(&self, name: &str) -> Option<&Term> {
		self.fields.get(name)
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true if no field was added.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Iterate fields in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl IntoIterator for FilterSpec {
	type Item = (String, Term);
	type IntoIter = indexmap::map::IntoIter<String, Term>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

impl<K, T> FromIterator<(K, T)> for FilterSpec
where
	K: Into<String>,
	T: Into<Term>,
{
	fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
		Self {
			fields: iter
				.into_iter()
				.map(|(k, t)| (k.into(), t.into()))
				.collect(),
		}
	}
}

fn json_kind(value: &serde_json::Value) -> &'static str {
	match value {
		serde_json::Value::Null => "null",
		serde_json::Value::Bool(_) => "a boolean",
		serde_json::Value::Number(_) => "a number",
		serde_json::Value::String(_) => "a string",
		serde_json::Value::Array(_) => "an array",
		serde_json::Value::Object(_) => "an object",
	}
}

/// Parse a comma-separated search string into individual terms
///
/// Handles quoted strings properly, keeping quoted content together.
/// Blank terms are skipped.
///
/// ```
/// use trawl_filters::parse_search_terms;
///
/// let terms = parse_search_terms("rust, programming");
/// assert_eq!(terms, vec!["rust", "programming"]);
///
/// let terms = parse_search_terms("\"hello, world\", rust");
/// assert_eq!(terms, vec!["hello, world", "rust"]);
/// ```
pub fn parse_search_terms(search: &str) -> Vec<String> {
	let mut terms = Vec::new();
	let mut current_term = String::new();
	let mut in_quotes = false;

	for c in search.chars() {
		match c {
			'"' => {
				in_quotes = !in_quotes;
			}
			',' if !in_quotes => {
				let trimmed = current_term.trim();
				if !trimmed.is_empty() {
					terms.push(trimmed.to_string());
				}
				current_term.clear();
			}
			_ => {
				current_term.push(c);
			}
		}
	}

	let trimmed = current_term.trim();
	if !trimmed.is_empty() {
		terms.push(trimmed.to_string());
	}

	terms
}
