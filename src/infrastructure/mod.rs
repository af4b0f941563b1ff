pub mod http;
pub mod snapshot;
pub mod sources;
pub mod sqlite;
