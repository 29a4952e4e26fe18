pub mod db;
pub mod db_config;
