use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Director {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub occupation: String,
    pub date_of_birth: NaiveDate,
}

impl Director {
    /// Full name as presented in register reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
