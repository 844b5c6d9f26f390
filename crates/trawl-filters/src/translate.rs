//! Translation entry points.
//!
//! The free functions drive the whole pipeline against any [`PatternHost`]:
//! normalize, resolve each field through the host's equality builder, build
//! the pattern predicates, combine them per field and merge them into the
//! host's running clause. [`PatternFilterExt`] offers the same calls in the
//! host's chaining style.

use crate::bridge::EqualityDelegate;
use crate::combinator::combine;
use crate::error::PatternFilterError;
use crate::filter_spec::FilterSpec;
use crate::merge::{ClauseMerge, PendingClause};
use crate::normalize::{Mode, NormalizedField, normalize};
use crate::pattern::construct;
use crate::settings::{MergePolicy, PatternSettings};
use trawl_query::ConditionExpression;

/// A query builder that can host pattern filters.
pub trait PatternHost: EqualityDelegate + ClauseMerge {
	fn settings(&self) -> &PatternSettings;
}

/// Add one predicate per field, each field's terms OR-ed.
///
/// Returns the number of conditions merged into the host.
///
/// # Errors
///
/// Errors of the host's equality builder are returned unchanged. On error the
/// running clause is untouched unless the host uses
/// [`MergePolicy::Incremental`].
pub fn match_any<H>(host: &mut H, spec: FilterSpec, extra: &H::Extra) -> Result<usize, H::Error>
where
	H: PatternHost + ?Sized,
	H::Error: From<PatternFilterError>,
{
	apply(host, spec, Mode::MatchAny, extra)
}

/// Add one predicate per field, each field's terms AND-ed.
///
/// See [`match_any`] for errors.
pub fn match_all_independently<H>(
	host: &mut H,
	spec: FilterSpec,
	extra: &H::Extra,
) -> Result<usize, H::Error>
where
	H: PatternHost + ?Sized,
	H::Error: From<PatternFilterError>,
{
	apply(host, spec, Mode::MatchAllIndependently, extra)
}

/// Add one negated predicate per field, each field's terms AND-ed.
///
/// Empty terms are ignored; a field with only empty terms adds nothing.
/// See [`match_any`] for errors.
pub fn exclude_all<H>(host: &mut H, spec: FilterSpec, extra: &H::Extra) -> Result<usize, H::Error>
where
	H: PatternHost + ?Sized,
	H::Error: From<PatternFilterError>,
{
	apply(host, spec, Mode::ExcludeAll, extra)
}

/// Run the pipeline for `mode`.
pub fn apply<H>(host: &mut H, spec: FilterSpec, mode: Mode, extra: &H::Extra) -> Result<usize, H::Error>
where
	H: PatternHost + ?Sized,
	H::Error: From<PatternFilterError>,
{
	let settings = host.settings().clone();
	let normalized = normalize(spec, mode, &settings);

	tracing::debug!(
		mode = mode.as_str(),
		fields = normalized.fields().len(),
		dropped = normalized.dropped().len(),
		terms = normalized.term_count(),
		"applying pattern filter"
	);

	let merged = match settings.merge {
		MergePolicy::Atomic => {
			let mut pending = PendingClause::default();
			for field in normalized.into_fields() {
				if let Some(condition) = translate_field(host, &field, mode, &settings, extra)? {
					pending.push(condition);
				}
			}
			pending.commit(host)
		}
		MergePolicy::Incremental => {
			let mut merged = 0;
			for field in normalized.into_fields() {
				match translate_field(host, &field, mode, &settings, extra) {
					Ok(Some(condition)) => {
						host.merge_condition(condition);
						merged += 1;
					}
					Ok(None) => {}
					Err(e) => {
						tracing::warn!(
							field = %field.field,
							mode = mode.as_str(),
							merged,
							"pattern filter failed, earlier fields stay merged"
						);
						return Err(e);
					}
				}
			}
			merged
		}
	};

	tracing::debug!(mode = mode.as_str(), merged, "pattern filter applied");
	Ok(merged)
}

fn translate_field<H>(
	host: &H,
	field: &NormalizedField,
	mode: Mode,
	settings: &PatternSettings,
	extra: &H::Extra,
) -> Result<Option<ConditionExpression>, H::Error>
where
	H: PatternHost + ?Sized,
	H::Error: From<PatternFilterError>,
{
	let resolved = host.resolve_equality(&field.field, &field.term, extra)?;
	let predicates: Vec<_> = construct(resolved, mode.polarity())
		.into_iter()
		.map(|node| node.into_expr(settings))
		.collect();

	tracing::trace!(
		field = %field.field,
		predicates = predicates.len(),
		"translated filter field"
	);

	Ok(combine(predicates, mode))
}

/// Chaining form of the translation functions.
///
/// Implemented for every [`PatternHost`] that is `Sized`; each call consumes
/// the host and returns it with the new conditions merged.
///
/// ```rust,ignore
/// let qs = QuerySet::new(schema)
///     .match_any(FilterSpec::new().field("title", ["Engineer", "Remote"]))?
///     .exclude_all(FilterSpec::new().field("title", "Intern"))?;
/// ```
pub trait PatternFilterExt: PatternHost + Sized
where
	Self::Error: From<PatternFilterError>,
{
	/// [`match_any`] with default extra arguments.
	fn match_any(self, spec: FilterSpec) -> Result<Self, Self::Error>
	where
		Self::Extra: Default,
	{
		self.match_any_with(spec, &<Self::Extra as Default>::default())
	}

	/// [`match_any`] with explicit extra arguments.
	fn match_any_with(mut self, spec: FilterSpec, extra: &Self::Extra) -> Result<Self, Self::Error> {
		match_any(&mut self, spec, extra)?;
		Ok(self)
	}

	/// [`match_all_independently`] with default extra arguments.
	fn match_all_independently(self, spec: FilterSpec) -> Result<Self, Self::Error>
	where
		Self::Extra: Default,
	{
		self.match_all_independently_with(spec, &<Self::Extra as Default>::default())
	}

	/// [`match_all_independently`] with explicit extra arguments.
	fn match_all_independently_with(
		mut self,
		spec: FilterSpec,
		extra: &Self::Extra,
	) -> Result<Self, Self::Error> {
		match_all_independently(&mut self, spec, extra)?;
		Ok(self)
	}

	/// [`exclude_all`] with default extra arguments.
	fn exclude_all(self, spec: FilterSpec) -> Result<Self, Self::Error>
	where
		Self::Extra: Default,
	{
		self.exclude_all_with(spec, &<Self::Extra as Default>::default())
	}

	/// [`exclude_all`] with explicit extra arguments.
	fn exclude_all_with(mut self, spec: FilterSpec, extra: &Self::Extra) -> Result<Self, Self::Error> {
		exclude_all(&mut self, spec, extra)?;
		Ok(self)
	}
}

impl<H> PatternFilterExt for H
where
	H: PatternHost,
	H::Error: From<PatternFilterError>,
{
}
