//! Column references, table references and operators.

/// A column, optionally qualified by a table name or alias.
///
/// ```rust
/// use trawl_query::ColumnRef;
///
/// let col = ColumnRef::table_column("j", "company_name");
/// assert_eq!(col.table(), Some("j"));
/// assert_eq!(col.name(), "company_name");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRef {
	table: Option<String>,
	column: String,
}

impl ColumnRef {
	pub fn column(column: impl Into<String>) -> Self {
		Self {
			table: None,
			column: column.into(),
		}
	}

	pub fn table_column(table: impl Into<String>, column: impl Into<String>) -> Self {
		Self {
			table: Some(table.into()),
			column: column.into(),
		}
	}

	/// The qualifying table or alias, if any.
	pub fn table(&self) -> Option<&str> {
		self.table.as_deref()
	}

	pub fn name(&self) -> &str {
		&self.column
	}
}

pub trait IntoColumnRef {
	fn into_column_ref(self) -> ColumnRef;
}

impl IntoColumnRef for ColumnRef {
	fn into_column_ref(self) -> ColumnRef {
		self
	}
}

impl IntoColumnRef for &str {
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::column(self)
	}
}

impl IntoColumnRef for String {
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::column(self)
	}
}

// `(table, column)`
impl<T, C> IntoColumnRef for (T, C)
where
	T: Into<String>,
	C: Into<String>,
{
	fn into_column_ref(self) -> ColumnRef {
		ColumnRef::table_column(self.0, self.1)
	}
}

/// The table of a FROM clause, optionally aliased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
	name: String,
	alias: Option<String>,
}

impl TableRef {
	pub fn table(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			alias: None,
		}
	}

	/// `name AS alias`
	pub fn alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			alias: Some(alias.into()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn alias_name(&self) -> Option<&str> {
		self.alias.as_deref()
	}
}

pub trait IntoTableRef {
	fn into_table_ref(self) -> TableRef;
}

impl IntoTableRef for TableRef {
	fn into_table_ref(self) -> TableRef {
		self
	}
}

impl IntoTableRef for &str {
	fn into_table_ref(self) -> TableRef {
		TableRef::table(self)
	}
}

impl IntoTableRef for String {
	fn into_table_ref(self) -> TableRef {
		TableRef::table(self)
	}
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOper {
	And,
	Or,
	Equal,
	NotEqual,
	GreaterThan,
	Like,
	NotLike,
	/// Case-insensitive LIKE
	ILike,
	NotILike,
	In,
}

impl BinOper {
	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::And => "AND",
			Self::Or => "OR",
			Self::Equal => "=",
			Self::NotEqual => "<>",
			Self::GreaterThan => ">",
			Self::Like => "LIKE",
			Self::NotLike => "NOT LIKE",
			Self::ILike => "ILIKE",
			Self::NotILike => "NOT ILIKE",
			Self::In => "IN",
		}
	}

	/// Whether an operand built with this operator needs parentheses
	/// next to a sibling predicate.
	#[must_use]
	pub fn is_logical(&self) -> bool {
		matches!(self, Self::And | Self::Or)
	}

	/// The case-sensitive counterpart of a pattern operator.
	///
	/// Dialects without `ILIKE` render the case-insensitive operators with it.
	#[must_use]
	pub fn case_sensitive(self) -> Self {
		match self {
			Self::ILike => Self::Like,
			Self::NotILike => Self::NotLike,
			other => other,
		}
	}
}
