pub mod domain;
pub mod infra;

pub use domain::{Business, BusinessDirectorName, Director, DirectorBusiness, RegisterRecord};
pub use infra::db::{Database, RecordRepository};
pub use infra::db_config::DbConfig;
