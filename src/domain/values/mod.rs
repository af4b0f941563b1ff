pub mod impact;
pub mod lexicon;
pub mod news_source;
pub mod relative_time;
pub mod sentiment;
pub mod symbol_table;
