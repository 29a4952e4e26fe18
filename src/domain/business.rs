use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub registered_address: String,
    pub registration_date: NaiveDate,
    pub registration_number: String,
}
