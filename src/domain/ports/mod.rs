pub mod news_repository;
pub mod page_fetcher;
pub mod snapshot_writer;
