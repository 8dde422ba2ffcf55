//! data.gov.sg datastore access (CKAN `datastore_search`).

pub mod client;
pub mod types;

pub use client::DatastoreClient;
