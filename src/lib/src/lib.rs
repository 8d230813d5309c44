//! # libairsync
//!
//! Keeps an Airtable table's field schema in step with the field catalog the
//! application expects, over the Airtable metadata REST API.
//!
//! The whole sync in one call:
//!
//! ```
//! use libairsync::config::AirtableConfig;
//! use libairsync::{schema, sync};
//!
//! let config = AirtableConfig::get()?;
//! let desired = schema::desired_fields();
//! let outcome = sync::sync_schema(&config, &desired).await?;
//! println!("added {} fields", outcome.added.len());
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod schema;
pub mod sync;
pub mod view;
