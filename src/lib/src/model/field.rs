use serde::{Deserialize, Serialize};
use std::fmt;

/// A column definition in the shape the Airtable metadata API takes it:
/// name, wire type name, optional description, and type-specific options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FieldOptions>,
}

/// The subset of Airtable field types the catalog uses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    SingleLineText,
    Email,
    DateTime,
    Date,
    SingleSelect,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldOptions {
    pub choices: Vec<SelectChoice>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SelectChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl FieldDefinition {
    pub fn new(name: impl AsRef<str>, field_type: FieldType) -> FieldDefinition {
        FieldDefinition {
            id: None,
            name: String::from(name.as_ref()),
            field_type,
            description: None,
            options: None,
        }
    }

    pub fn description(mut self, description: impl AsRef<str>) -> FieldDefinition {
        self.description = Some(String::from(description.as_ref()));
        self
    }

    pub fn choices(mut self, choices: Vec<SelectChoice>) -> FieldDefinition {
        self.options = Some(FieldOptions { choices });
        self
    }

    pub fn all_fields_to_string<V: AsRef<[FieldDefinition]>>(fields: V) -> String {
        let names: Vec<String> = fields.as_ref().iter().map(|f| f.name.to_owned()).collect();

        let combined_names = names.join(", ");

        format!("[{combined_names}]")
    }
}

impl SelectChoice {
    pub fn new(name: impl AsRef<str>, color: impl AsRef<str>) -> SelectChoice {
        SelectChoice {
            id: None,
            name: String::from(name.as_ref()),
            color: Some(String::from(color.as_ref())),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::SingleLineText => "singleLineText",
            FieldType::Email => "email",
            FieldType::DateTime => "dateTime",
            FieldType::Date => "date",
            FieldType::SingleSelect => "singleSelect",
        };
        write!(f, "{name}")
    }
}
