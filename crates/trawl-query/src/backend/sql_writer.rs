//! SQL text and bound values, written together.

use crate::value::{Value, Values};

/// Accumulates rendered SQL along with its bound values.
///
/// A placeholder is only ever written together with its value, so the `n`-th
/// placeholder always binds the `n`-th collected value.
///
/// ```rust
/// use trawl_query::{SqlWriter, Value};
///
/// let mut writer = SqlWriter::new();
/// writer.push("\"title\" ILIKE");
/// writer.push_space();
/// writer.push_value(Value::from("%rust%"), |i| format!("${}", i));
///
/// let (sql, values) = writer.finish();
/// assert_eq!(sql, "\"title\" ILIKE $1");
/// assert_eq!(values.as_slice(), &[Value::from("%rust%")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlWriter {
	sql: String,
	values: Values,
}

impl SqlWriter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, s: &str) {
		self.sql.push_str(s);
	}

	/// Push a single space unless the text is empty or already ends in one.
	pub fn push_space(&mut self) {
		if !self.sql.is_empty() && !self.sql.ends_with(' ') {
			self.sql.push(' ');
		}
	}

	/// Push a space, then `keyword`.
	pub fn push_keyword(&mut self, keyword: &str) {
		self.push_space();
		self.sql.push_str(keyword);
	}

	/// Push `ident` as quoted by `quote`.
	pub fn push_identifier<F>(&mut self, ident: &str, quote: F)
	where
		F: FnOnce(&str) -> String,
	{
		self.sql.push_str(&quote(ident));
	}

	/// Bind `value` and write its placeholder.
	///
	/// `placeholder` receives the 1-based position of the value, which is
	/// also returned.
	pub fn push_value<F>(&mut self, value: Value, placeholder: F) -> usize
	where
		F: FnOnce(usize) -> String,
	{
		self.values.push(value);
		let position = self.values.len();
		self.sql.push_str(&placeholder(position));
		position
	}

	/// Write every item with `f`, separated by `separator`.
	pub fn push_list<I, T, F>(&mut self, items: I, separator: &str, mut f: F)
	where
		I: IntoIterator<Item = T>,
		F: FnMut(&mut Self, T),
	{
		for (i, item) in items.into_iter().enumerate() {
			if i > 0 {
				self.sql.push_str(separator);
			}
			f(self, item);
		}
	}

	pub fn sql(&self) -> &str {
		&self.sql
	}

	pub fn values(&self) -> &Values {
		&self.values
	}

	pub fn finish(self) -> (String, Values) {
		(self.sql, self.values)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn dollar(i: usize) -> String {
		format!("${}", i)
	}

	#[rstest]
	fn test_values_follow_placeholders() {
		let mut writer = SqlWriter::new();
		let first = writer.push_value(Value::Int(42), dollar);
		writer.push(", ");
		let second = writer.push_value(Value::from("test"), dollar);

		assert_eq!((first, second), (1, 2));
		assert_eq!(writer.sql(), "$1, $2");
		assert_eq!(
			writer.values().as_slice(),
			&[Value::Int(42), Value::from("test")]
		);
	}

	#[rstest]
	#[case::empty("", "WHERE")]
	#[case::after_word("SELECT *", "SELECT * WHERE")]
	#[case::after_space("SELECT * ", "SELECT * WHERE")]
	fn test_keyword_spacing(#[case] start: &str, #[case] expected: &str) {
		let mut writer = SqlWriter::new();
		writer.push(start);
		writer.push_keyword("WHERE");

		assert_eq!(writer.sql(), expected);
	}

	#[rstest]
	fn test_list_separator() {
		let mut writer = SqlWriter::new();
		writer.push_list(["a", "b", "c"], " AND ", |w, item| {
			w.push_identifier(item, |s| format!("\"{}\"", s));
		});

		assert_eq!(writer.sql(), r#""a" AND "b" AND "c""#);
	}
}
