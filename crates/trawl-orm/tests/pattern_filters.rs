//! Pattern filters on a query set, rendered through every backend.

use rstest::{fixture, rstest};
use serde_json::json;
use trawl_filters::{
	FilterSpec, MergePolicy, PatternFilterError, PatternFilterExt, PatternSettings, WildcardPolicy,
	exclude_all, match_any,
};
use trawl_orm::{FieldType, LookupOptions, ModelSchema, OrmError, QuerySet};
use trawl_query::{
	Condition, Expr, ExprTrait, MySqlQueryBuilder, PostgresQueryBuilder, QueryBuilder,
	SqliteQueryBuilder, Value,
};

#[fixture]
fn jobs() -> QuerySet {
	QuerySet::new(
		ModelSchema::new("jobs")
			.field("title", FieldType::Text)
			.field("status", FieldType::Text)
			.field_with_column("company", "company_name", FieldType::Text)
			.field("salary", FieldType::Integer)
			.field("remote", FieldType::Boolean),
	)
}

fn where_clause(qs: &QuerySet) -> (String, Vec<Value>) {
	let (sql, values) = PostgresQueryBuilder::new().build_condition(qs.condition());
	(sql, values.into_iter().collect())
}

fn texts(values: &[Value]) -> Vec<&str> {
	values.iter().filter_map(Value::as_str).collect()
}

#[rstest]
fn test_match_any_list(jobs: QuerySet) {
	let qs = jobs
		.match_any(FilterSpec::new().field("title", ["Engineer", "Remote"]))
		.unwrap();

	let (sql, values) = qs.build(&PostgresQueryBuilder::new());
	assert_eq!(
		sql,
		r#"SELECT * FROM "jobs" WHERE ("title" ILIKE $1 OR "title" ILIKE $2)"#
	);
	assert_eq!(
		values.as_slice(),
		&[Value::from("%Engineer%"), Value::from("%Remote%")]
	);
}

#[rstest]
fn test_match_all_independently_list(jobs: QuerySet) {
	let qs = jobs
		.match_all_independently(FilterSpec::new().field("title", ["Engineer", "Remote"]))
		.unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(sql, r#"("title" ILIKE $1 AND "title" ILIKE $2)"#);
	assert_eq!(texts(&values), vec!["%Engineer%", "%Remote%"]);
}

#[rstest]
fn test_exclude_all_scalar(jobs: QuerySet) {
	let qs = jobs.exclude_all(FilterSpec::new().field("title", "Intern")).unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(sql, r#""title" NOT ILIKE $1"#);
	assert_eq!(texts(&values), vec!["%Intern%"]);
}

#[rstest]
fn test_exclude_all_list(jobs: QuerySet) {
	let qs = jobs
		.exclude_all(FilterSpec::new().field("title", ["Intern", "Junior"]))
		.unwrap();

	let (sql, _) = where_clause(&qs);
	assert_eq!(sql, r#"("title" NOT ILIKE $1 AND "title" NOT ILIKE $2)"#);
}

#[rstest]
fn test_scalar_same_in_match_modes(jobs: QuerySet) {
	let spec = || FilterSpec::new().field("title", "Rust");

	let any = jobs.clone().match_any(spec()).unwrap();
	let all = jobs.match_all_independently(spec()).unwrap();

	assert_eq!(where_clause(&any), where_clause(&all));
	assert_eq!(where_clause(&any).0, r#""title" ILIKE $1"#);
}

#[rstest]
fn test_empty_list_matches_everything(jobs: QuerySet) {
	let qs = jobs
		.match_any(FilterSpec::new().field("title", Vec::<&str>::new()))
		.unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(sql, r#""title" ILIKE $1"#);
	assert_eq!(texts(&values), vec!["%%"]);
}

#[rstest]
fn test_empty_list_excluded_is_noop(jobs: QuerySet) {
	let qs = jobs
		.exclude_all(
			FilterSpec::new()
				.field("title", Vec::<&str>::new())
				.field("status", "closed"),
		)
		.unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(sql, r#""status" NOT ILIKE $1"#);
	assert_eq!(texts(&values), vec!["%closed%"]);
}

#[rstest]
fn test_empty_string_in_exclude_list_is_dropped(jobs: QuerySet) {
	let qs = jobs
		.exclude_all(FilterSpec::new().field("title", ["", "Intern"]))
		.unwrap();

	let (sql, _) = where_clause(&qs);
	assert_eq!(sql, r#""title" NOT ILIKE $1"#);
}

#[rstest]
fn test_chaining_keeps_order(jobs: QuerySet) {
	let qs = jobs
		.filter("salary", 100i64)
		.unwrap()
		.match_any(FilterSpec::new().field("title", "A"))
		.unwrap()
		.match_all_independently(FilterSpec::new().field("status", "open"))
		.unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(
		sql,
		r#""salary" = $1 AND "title" ILIKE $2 AND "status" ILIKE $3"#
	);
	assert_eq!(
		values,
		vec![
			Value::Int(100),
			Value::from("%A%"),
			Value::from("%open%")
		]
	);
}

#[rstest]
fn test_several_fields_in_mapping_order(jobs: QuerySet) {
	let spec = FilterSpec::from_json(json!({
		"status": "open",
		"title": ["Rust", "Go"],
	}))
	.unwrap();
	let qs = jobs.match_any(spec).unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(
		sql,
		r#""status" ILIKE $1 AND ("title" ILIKE $2 OR "title" ILIKE $3)"#
	);
	assert_eq!(texts(&values), vec!["%open%", "%Rust%", "%Go%"]);
}

#[rstest]
fn test_query_params_spec(jobs: QuerySet) {
	let spec = FilterSpec::from_query_params(&[("title", r#"Rust,"Senior, Staff""#)]);
	let qs = jobs.match_any(spec).unwrap();

	let (_, values) = where_clause(&qs);
	assert_eq!(texts(&values), vec!["%Rust%", "%Senior, Staff%"]);
}

#[rstest]
fn test_column_name_and_alias(jobs: QuerySet) {
	let qs = jobs
		.match_any_with(
			FilterSpec::new().field("company", "Acme"),
			&LookupOptions::with_alias("j"),
		)
		.unwrap();

	let (sql, _) = where_clause(&qs);
	assert_eq!(sql, r#""j"."company_name" ILIKE $1"#);
}

#[rstest]
fn test_free_functions_report_merged_count(mut jobs: QuerySet) {
	let merged = match_any(
		&mut jobs,
		FilterSpec::new().field("title", ["a", "b"]).field("status", "open"),
		&LookupOptions::default(),
	)
	.unwrap();
	assert_eq!(merged, 2);

	let merged = exclude_all(
		&mut jobs,
		FilterSpec::new().field("title", ""),
		&LookupOptions::default(),
	)
	.unwrap();
	assert_eq!(merged, 0);
	assert_eq!(jobs.condition().len(), 2);
}

#[rstest]
#[case::or_expression(
	Condition::all().add(Expr::col("status").eq("a").or(Expr::col("status").eq("b"))),
	r#"SELECT * FROM "jobs" WHERE ("status" = $1 OR "status" = $2) AND "title" ILIKE $3"#
)]
#[case::negated_or_expression(
	Condition::all()
		.add(Expr::col("status").eq("a").or(Expr::col("status").eq("b")))
		.not(),
	r#"SELECT * FROM "jobs" WHERE NOT ("status" = $1 OR "status" = $2) AND "title" ILIKE $3"#
)]
#[case::or_group(
	Condition::any()
		.add(Expr::col("status").eq("a"))
		.add(Expr::col("status").eq("b")),
	r#"SELECT * FROM "jobs" WHERE ("status" = $1 OR "status" = $2) AND "title" ILIKE $3"#
)]
fn test_earlier_or_keeps_precedence(
	jobs: QuerySet,
	#[case] earlier: Condition,
	#[case] expected: &str,
) {
	let qs = jobs
		.where_cond(earlier)
		.match_any(FilterSpec::new().field("title", "x"))
		.unwrap();

	let (sql, values) = qs.build(&PostgresQueryBuilder::new());
	assert_eq!(sql, expected);
	assert_eq!(texts(values.as_slice()), vec!["a", "b", "%x%"]);
}

#[rstest]
fn test_bare_or_expression_keeps_precedence(jobs: QuerySet) {
	let qs = jobs
		.where_cond(Expr::col("status").eq("a").or(Expr::col("status").eq("b")))
		.exclude_all(FilterSpec::new().field("title", ["x", "y"]))
		.unwrap();

	let (sql, _) = where_clause(&qs);
	assert_eq!(
		sql,
		r#"("status" = $1 OR "status" = $2) AND ("title" NOT ILIKE $3 AND "title" NOT ILIKE $4)"#
	);
}

#[rstest]
#[case::all(Condition::all())]
#[case::any(Condition::any())]
#[case::negated(Condition::all().not())]
fn test_empty_condition_adds_nothing(jobs: QuerySet, #[case] empty: Condition) {
	let qs = jobs
		.where_cond(empty)
		.match_any(FilterSpec::new().field("title", "x"))
		.unwrap();

	assert_eq!(
		qs.to_sql(&PostgresQueryBuilder::new()),
		r#"SELECT * FROM "jobs" WHERE "title" ILIKE $1"#
	);
	assert_eq!(qs.condition().len(), 1);
}

#[rstest]
fn test_unknown_field_propagates(jobs: QuerySet) {
	let result = jobs.match_any(FilterSpec::new().field("salary_max", "1"));

	match result {
		Err(OrmError::UnknownField { model, field }) => {
			assert_eq!(model, "jobs");
			assert_eq!(field, "salary_max");
		}
		other => panic!("Expected UnknownField, got {:?}", other),
	}
}

#[rstest]
fn test_pattern_on_typed_field_is_mismatch(jobs: QuerySet) {
	let result = jobs.match_any(FilterSpec::new().field("salary", 5i64));

	match result {
		Err(OrmError::TypeMismatch { field, expected, value }) => {
			assert_eq!(field, "salary");
			assert_eq!(expected, FieldType::Integer);
			assert_eq!(value, "%5%");
		}
		other => panic!("Expected TypeMismatch, got {:?}", other),
	}
}

#[rstest]
fn test_malformed_json_spec() {
	let err = FilterSpec::from_json(json!({ "title": { "contains": "x" } })).unwrap_err();
	assert!(matches!(err, PatternFilterError::MalformedTerm { .. }));

	let err: OrmError = err.into();
	assert!(matches!(err, OrmError::Pattern(_)));
}

#[rstest]
fn test_atomic_merge_leaves_clause_untouched(mut jobs: QuerySet) {
	jobs = jobs.filter("status", "open").unwrap();

	let result = match_any(
		&mut jobs,
		FilterSpec::new().field("title", "Rust").field("nope", "x"),
		&LookupOptions::default(),
	);

	assert!(result.is_err());
	assert_eq!(jobs.condition().len(), 1);
	assert_eq!(where_clause(&jobs).0, r#""status" = $1"#);
}

#[rstest]
fn test_incremental_merge_keeps_earlier_fields(jobs: QuerySet) {
	let mut qs = jobs.with_settings(PatternSettings::default().with_merge(MergePolicy::Incremental));

	let result = match_any(
		&mut qs,
		FilterSpec::new().field("title", "Rust").field("nope", "x"),
		&LookupOptions::default(),
	);

	assert!(matches!(result, Err(OrmError::UnknownField { .. })));
	assert_eq!(where_clause(&qs).0, r#""title" ILIKE $1"#);
}

#[rstest]
fn test_settings_from_toml(jobs: QuerySet) {
	let settings = PatternSettings::from_toml(
		r#"
		wildcards = "escape"
		escape_char = "!"
		"#,
	)
	.unwrap();
	assert_eq!(settings.wildcards, WildcardPolicy::Escape);

	let qs = jobs
		.with_settings(settings)
		.match_any(FilterSpec::new().field("title", "100%"))
		.unwrap();

	let (sql, values) = where_clause(&qs);
	assert_eq!(sql, r#""title" ILIKE $1 ESCAPE '!'"#);
	assert_eq!(texts(&values), vec!["%100!%%"]);
}

#[rstest]
#[case::postgres(
	Box::new(PostgresQueryBuilder::new()) as Box<dyn QueryBuilder>,
	r#"SELECT * FROM "jobs" WHERE ("title" ILIKE $1 OR "title" ILIKE $2) AND "status" NOT ILIKE $3 LIMIT $4"#
)]
#[case::mysql(
	Box::new(MySqlQueryBuilder::new()) as Box<dyn QueryBuilder>,
	"SELECT * FROM `jobs` WHERE (`title` LIKE ? OR `title` LIKE ?) AND `status` NOT LIKE ? LIMIT ?"
)]
#[case::sqlite(
	Box::new(SqliteQueryBuilder::new()) as Box<dyn QueryBuilder>,
	r#"SELECT * FROM "jobs" WHERE ("title" LIKE ? OR "title" LIKE ?) AND "status" NOT LIKE ? LIMIT ?"#
)]
fn test_dialects(jobs: QuerySet, #[case] builder: Box<dyn QueryBuilder>, #[case] expected: &str) {
	let qs = jobs
		.match_any(FilterSpec::new().field("title", ["Engineer", "Remote"]))
		.unwrap()
		.exclude_all(FilterSpec::new().field("status", "closed"))
		.unwrap()
		.limit(20);

	let (sql, values) = qs.build(builder.as_ref());
	assert_eq!(sql, expected);
	assert_eq!(
		texts(values.as_slice()),
		vec!["%Engineer%", "%Remote%", "%closed%"]
	);
	assert_eq!(values.len(), 4);
}
