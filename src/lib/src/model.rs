pub mod field;
pub mod record;
pub mod table;

pub use crate::model::field::{FieldDefinition, FieldOptions, FieldType, SelectChoice};
pub use crate::model::record::{NewRecord, Record};
pub use crate::model::table::{RemoteField, Table};
