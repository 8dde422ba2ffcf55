pub mod datastore;
pub mod factory;
pub mod http_client_factory;
pub mod mock;

pub use datastore::DatastoreClient;
pub use mock::MockPageSource;
