pub mod nba_api;
pub mod query;
