//! The field catalog: the set of columns the synced table is expected to
//! carry for subscription tracking.
//!

use crate::model::{FieldDefinition, FieldType, SelectChoice};

/// The fields the table should have. Order matters: missing fields are
/// appended to the remote schema in this order.
pub fn desired_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("Email", FieldType::Email).description("User email address"),
        FieldDefinition::new("Created At", FieldType::DateTime)
            .description("When the account was created"),
        FieldDefinition::new("Last Login", FieldType::DateTime)
            .description("Time of the most recent login"),
        FieldDefinition::new("Subscription Status", FieldType::SingleSelect)
            .description("Current subscription status")
            .choices(vec![
                SelectChoice::new("Active", "greenLight2"),
                SelectChoice::new("Inactive", "redLight2"),
                SelectChoice::new("Trial", "yellowLight2"),
                SelectChoice::new("Expired", "grayLight2"),
            ]),
        FieldDefinition::new("Subscription Type", FieldType::SingleSelect)
            .description("Subscription tier")
            .choices(vec![
                SelectChoice::new("Free", "grayLight2"),
                SelectChoice::new("Basic", "blueLight2"),
                SelectChoice::new("Premium", "purpleLight2"),
            ]),
        FieldDefinition::new("Start Date", FieldType::Date).description("Subscription start date"),
        FieldDefinition::new("End Date", FieldType::Date).description("Subscription end date"),
    ]
}
