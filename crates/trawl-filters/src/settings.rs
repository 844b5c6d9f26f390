//! Settings for pattern filter translation.
//!
//! Settings are plain data: they can be built in code with the `with_*`
//! methods or loaded from TOML.
//!
//! ```toml
//! case_sensitive = false
//! wildcards = "escape"
//! escape_char = "\\"
//! merge = "atomic"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How `%` and `_` inside user-supplied terms are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardPolicy {
	/// Terms are wrapped as-is, so embedded wildcards keep their meaning.
	#[default]
	Preserve,
	/// Embedded wildcards are escaped and matched literally.
	Escape,
}

/// What happens to already translated fields when a later field fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
	/// Nothing is merged unless every field translates.
	#[default]
	Atomic,
	/// Fields are merged one by one; fields before the failing one stay merged.
	Incremental,
}

/// Pattern filter settings.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSettings {
	/// Use `LIKE` / `NOT LIKE` instead of `ILIKE` / `NOT ILIKE`
	pub case_sensitive: bool,

	/// Treatment of wildcards embedded in terms
	pub wildcards: WildcardPolicy,

	/// Escape character used when `wildcards` is `escape`
	pub escape_char: char,

	/// Merge behavior on failure
	pub merge: MergePolicy,
}

impl Default for PatternSettings {
	fn default() -> Self {
		Self {
			case_sensitive: false,
			wildcards: WildcardPolicy::Preserve,
			escape_char: '\\',
			merge: MergePolicy::Atomic,
		}
	}
}

impl PatternSettings {
	/// Match case-sensitively.
	pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
		self.case_sensitive = case_sensitive;
		self
	}

	/// Set the wildcard policy.
	pub fn with_wildcards(mut self, wildcards: WildcardPolicy) -> Self {
		self.wildcards = wildcards;
		self
	}

	/// Set the escape character.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::ParseError`] for `%` or `_`.
	pub fn with_escape_char(mut self, escape_char: char) -> Result<Self, ConfigError> {
		self.escape_char = escape_char;
		self.validate()?;
		Ok(self)
	}

	/// Set the merge policy.
	pub fn with_merge(mut self, merge: MergePolicy) -> Self {
		self.merge = merge;
		self
	}

	/// Load settings from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::IoError {
			path: path.as_ref().to_path_buf(),
			source: e,
		})?;

		Self::from_toml(&content)
	}

	/// Parse settings from a TOML string.
	pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
		let settings: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
			message: e.to_string(),
		})?;
		settings.validate()?;
		Ok(settings)
	}

	/// Check that the settings can be used to build patterns.
	///
	/// The escape character must not be a LIKE wildcard, since the pattern
	/// wrapper itself is built from `%`.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if matches!(self.escape_char, '%' | '_') {
			return Err(ConfigError::ParseError {
				message: format!(
					"escape_char must not be a LIKE wildcard, got '{}'",
					self.escape_char
				),
			});
		}
		Ok(())
	}

	/// Whether embedded wildcards are escaped.
	pub fn escapes_wildcards(&self) -> bool {
		self.wildcards == WildcardPolicy::Escape
	}

	/// Escape `%`, `_` and the escape character itself in `term`.
	///
	/// Returns the term unchanged under [`WildcardPolicy::Preserve`].
	pub fn escape_term(&self, term: &str) -> String {
		if !self.escapes_wildcards() {
			return term.to_string();
		}

		let mut escaped = String::with_capacity(term.len());
		for c in term.chars() {
			if c == '%' || c == '_' || c == self.escape_char {
				escaped.push(self.escape_char);
			}
			escaped.push(c);
		}
		escaped
	}
}
