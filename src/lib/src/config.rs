//! Configuration for airsync: API credentials and target identifiers
//!

pub mod airtable_config;

pub use crate::config::airtable_config::AirtableConfig;
