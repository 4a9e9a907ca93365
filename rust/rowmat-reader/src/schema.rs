//! The slice of a table schema that reader binding depends on: field order and
//! field ids.

/// A field of a struct type, identified by its schema-wide id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedField {
    pub id: i32,
    pub name: String,
    pub optional: bool,
}

impl NestedField {
    pub fn optional(id: i32, name: impl Into<String>) -> NestedField {
        NestedField {
            id,
            name: name.into(),
            optional: true,
        }
    }

    pub fn required(id: i32, name: impl Into<String>) -> NestedField {
        NestedField {
            id,
            name: name.into(),
            optional: false,
        }
    }
}

/// An ordered list of fields; position `i` in a decoded [`Row`](crate::value::Row)
/// corresponds to `fields()[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructType {
    fields: Vec<NestedField>,
}

impl StructType {
    pub fn new(fields: Vec<NestedField>) -> StructType {
        StructType { fields }
    }

    pub fn fields(&self) -> &[NestedField] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<NestedField> for StructType {
    fn from_iter<I: IntoIterator<Item = NestedField>>(iter: I) -> Self {
        StructType::new(iter.into_iter().collect())
    }
}
