pub mod migrations;
pub mod news_repo;
pub mod unavailable;
