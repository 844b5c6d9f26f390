//! Model schemas.
//!
//! A [`ModelSchema`] names a table and the fields a query set may filter on.

use std::fmt;

/// Storage type of a field, driving value coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
	Text,
	Integer,
	BigInteger,
	Float,
	Boolean,
	Date,
	DateTime,
	Uuid,
}

impl FieldType {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Integer => "integer",
			Self::BigInteger => "big integer",
			Self::Float => "float",
			Self::Boolean => "boolean",
			Self::Date => "date",
			Self::DateTime => "datetime",
			Self::Uuid => "uuid",
		}
	}
}

impl fmt::Display for FieldType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
	/// Name used in filters
	pub name: String,
	/// Database column
	pub column: String,
	pub field_type: FieldType,
}

/// Table name plus its filterable fields, in declaration order.
///
/// ```rust
/// use trawl_orm::{FieldType, ModelSchema};
///
/// let schema = ModelSchema::new("jobs")
///     .field("title", FieldType::Text)
///     .field_with_column("company", "company_name", FieldType::Text);
///
/// assert_eq!(schema.resolve("company").map(|f| f.column.as_str()), Some("company_name"));
/// assert_eq!(schema.resolve("company_name").map(|f| f.name.as_str()), Some("company"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
	table: String,
	fields: Vec<FieldDef>,
}

impl ModelSchema {
	pub fn new(table: impl Into<String>) -> Self {
		Self {
			table: table.into(),
			fields: Vec::new(),
		}
	}

	/// Add a field stored in a column of the same name.
	pub fn field(self, name: impl Into<String>, field_type: FieldType) -> Self {
		let name = name.into();
		let column = name.clone();
		self.field_with_column(name, column, field_type)
	}

	/// Add a field stored in a differently named column.
	pub fn field_with_column(
		mut self,
		name: impl Into<String>,
		column: impl Into<String>,
		field_type: FieldType,
	) -> Self {
		self.fields.push(FieldDef {
			name: name.into(),
			column: column.into(),
			field_type,
		});
		self
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn fields(&self) -> &[FieldDef] {
		&self.fields
	}

	/// Look a field up by name, falling back to its column name.
	pub fn resolve(&self, name: &str) -> Option<&FieldDef> {
		self.fields
			.iter()
			.find(|f| f.name == name)
			.or_else(|| self.fields.iter().find(|f| f.column == name))
	}
}
