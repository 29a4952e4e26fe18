//! Domain types for the company register.
//!
//! All entities are owned by the external register database; this crate
//! only reads them.

mod business;
mod director;

pub use business::Business;
pub use director::Director;

use serde::{Deserialize, Serialize};

/// Link row associating a director with a business.
///
/// The register has no direct foreign key between directors and
/// businesses; every join goes through this table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectorBusiness {
    pub director_id: i64,
    pub business_id: i64,
}

/// Combined register row: a director together with one of their businesses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRecord {
    pub director_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub business_name: String,
    pub registered_address: String,
    pub registration_number: String,
}

/// Reporting row pairing a business name with a director's full name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessDirectorName {
    pub business_name: String,
    pub director_name: String,
}
