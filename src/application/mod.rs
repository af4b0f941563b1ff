pub mod dedupe;
pub mod enrich;
pub mod ingest;
pub mod news_query;
pub mod persist;
pub mod rank;
pub mod summary;
