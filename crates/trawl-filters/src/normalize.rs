//! Filter normalization.
//!
//! Normalization turns a [`FilterSpec`] into a [`NormalizedSpec`]: empty lists
//! become the empty-string sentinel and every remaining scalar is rendered to
//! text and wrapped in `%` wildcards. The result is a distinct type, so a
//! spec cannot be normalized twice.

use crate::filter_spec::{FilterSpec, Scalar, Term};
use crate::pattern::Polarity;
use crate::settings::PatternSettings;
use trawl_query::ConditionType;

/// Translation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Any term of a field may match (OR within the field).
	MatchAny,
	/// Every term of a field must match (AND within the field).
	MatchAllIndependently,
	/// No term of a field may match (NOT, AND within the field).
	ExcludeAll,
}

impl Mode {
	/// Polarity of the predicates this mode emits.
	pub fn polarity(self) -> Polarity {
		match self {
			Self::MatchAny | Self::MatchAllIndependently => Polarity::Matches,
			Self::ExcludeAll => Polarity::NotMatches,
		}
	}

	/// How the predicates of one field are joined.
	pub fn combine_type(self) -> ConditionType {
		match self {
			Self::MatchAny => ConditionType::Any,
			Self::MatchAllIndependently | Self::ExcludeAll => ConditionType::All,
		}
	}

	/// Whether empty terms are dropped rather than wrapped.
	pub fn drops_empty_terms(self) -> bool {
		self == Self::ExcludeAll
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::MatchAny => "match_any",
			Self::MatchAllIndependently => "match_all_independently",
			Self::ExcludeAll => "exclude_all",
		}
	}
}

/// One normalized field.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedField {
	pub field: String,
	/// Every scalar is [`Scalar::Text`] holding the final pattern.
	pub term: Term,
}

/// Output of [`normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSpec {
	mode: Mode,
	fields: Vec<NormalizedField>,
	dropped: Vec<String>,
}

impl NormalizedSpec {
	pub fn mode(&self) -> Mode {
		self.mode
	}

	/// Fields that produce predicates, in spec order.
	pub fn fields(&self) -> &[NormalizedField] {
		&self.fields
	}

	/// Fields removed because all their terms were empty (exclude mode only).
	pub fn dropped(&self) -> &[String] {
		&self.dropped
	}

	/// Total number of pattern values across all fields.
	pub fn term_count(&self) -> usize {
		self.fields.iter().map(|f| f.term.scalar_count()).sum()
	}

	pub fn into_fields(self) -> Vec<NormalizedField> {
		self.fields
	}
}

/// Normalize `spec` for `mode`.
///
/// - An empty list becomes the empty string.
/// - Non-empty scalars, including every list element, become `%text%`.
/// - For [`Mode::ExcludeAll`] empty strings are removed instead of wrapped;
///   a field left with no terms is dropped.
/// - For the inclusive modes an empty string becomes `%%`.
///
/// ```rust
/// use trawl_filters::{normalize, FilterSpec, Mode, PatternSettings, Term};
///
/// let spec = FilterSpec::new().field("title", Vec::<String>::new());
/// let normalized = normalize(spec, Mode::MatchAny, &PatternSettings::default());
/// assert_eq!(normalized.fields()[0].term, Term::text("%%"));
/// ```
pub fn normalize(spec: FilterSpec, mode: Mode, settings: &PatternSettings) -> NormalizedSpec {
	let mut fields = Vec::with_capacity(spec.len());
	let mut dropped = Vec::new();

	for (field, term) in spec {
		match normalize_term(term, mode, settings) {
			Some(term) => {
				tracing::trace!(
					field = %field,
					terms = term.scalar_count(),
					mode = mode.as_str(),
					"normalized filter field"
				);
				fields.push(NormalizedField { field, term });
			}
			None => {
				tracing::warn!(
					field = %field,
					mode = mode.as_str(),
					"dropping filter field with only empty terms"
				);
				dropped.push(field);
			}
		}
	}

	NormalizedSpec {
		mode,
		fields,
		dropped,
	}
}

fn normalize_term(term: Term, mode: Mode, settings: &PatternSettings) -> Option<Term> {
	match term {
		Term::List(items) if items.is_empty() => wrap(Scalar::Text(String::new()), mode, settings),
		Term::List(items) => {
			let items: Vec<Term> = items
				.into_iter()
				.filter_map(|item| normalize_term(item, mode, settings))
				.collect();
			if items.is_empty() {
				None
			} else {
				Some(Term::List(items))
			}
		}
		Term::Scalar(scalar) => wrap(scalar, mode, settings),
	}
}

fn wrap(scalar: Scalar, mode: Mode, settings: &PatternSettings) -> Option<Term> {
	if scalar.is_empty_text() {
		if mode.drops_empty_terms() {
			return None;
		}
		return Some(Term::text("%%"));
	}

	let text = match scalar {
		Scalar::Text(s) => settings.escape_term(&s),
		other => settings.escape_term(&other.to_string()),
	};
	Some(Term::text(format!("%{}%", text)))
}
