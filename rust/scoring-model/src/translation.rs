use serde::{Deserialize, Serialize};

/// One raw-to-standard field mapping record.
///
/// Records are compared and hashed by value, so two records that map the same
/// raw field onto the same standard field are indistinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Translation {
    /// The canonical schema identifier the raw field is mapped to.
    pub standard_field_name: String,
    /// The field identifier as it appears in the source data.
    pub raw_field_name: String,
}

impl Translation {
    /// Creates a record mapping `raw_field_name` onto `standard_field_name`.
    pub fn new<S, R>(standard_field_name: S, raw_field_name: R) -> Self
    where
        S: Into<String>,
        R: Into<String>,
    {
        Self {
            standard_field_name: standard_field_name.into(),
            raw_field_name: raw_field_name.into(),
        }
    }

    /// The canonical schema identifier.
    pub fn standard_field_name(&self) -> &str {
        &self.standard_field_name
    }

    /// The identifier as it appears in the source data.
    pub fn raw_field_name(&self) -> &str {
        &self.raw_field_name
    }
}

/// A translation keyed by the standard field name it was matched under.
pub type FieldTranslation = (String, Translation);
