use super::DbConn;
use crate::domain::{Business, BusinessDirectorName, Director, RegisterRecord};
use anyhow::Result;
use rusqlite::Row;

/// Cap on the number of rows returned by [`RecordRepository::latest_directors`].
const LATEST_DIRECTORS_LIMIT: i64 = 100;

/// Repository for the fixed register reporting queries.
///
/// Every operation is a single parameterized SELECT. Failures are never
/// surfaced to the caller: each public method logs the underlying cause
/// and substitutes an empty row set (or an absent single row).
pub struct RecordRepository {
    conn: DbConn,
}

impl RecordRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// All register records: one row per director–business link.
    pub fn records(&self) -> Vec<RegisterRecord> {
        self.try_records().unwrap_or_else(|err| {
            log::warn!("register records query failed: {err}");
            Vec::new()
        })
    }

    /// All directors on the register.
    pub fn directors(&self) -> Vec<Director> {
        self.try_directors().unwrap_or_else(|err| {
            log::warn!("directors query failed: {err}");
            Vec::new()
        })
    }

    /// Single director lookup by id.
    pub fn director_by_id(&self, id: i64) -> Option<Director> {
        self.try_director_by_id(id).unwrap_or_else(|err| {
            log::warn!("director lookup failed for id {id}: {err}");
            None
        })
    }

    /// All businesses on the register.
    pub fn businesses(&self) -> Vec<Business> {
        self.try_businesses().unwrap_or_else(|err| {
            log::warn!("businesses query failed: {err}");
            Vec::new()
        })
    }

    /// Single business lookup by id.
    pub fn business_by_id(&self, id: i64) -> Option<Business> {
        self.try_business_by_id(id).unwrap_or_else(|err| {
            log::warn!("business lookup failed for id {id}: {err}");
            None
        })
    }

    /// Businesses whose registration date falls in the given calendar year.
    pub fn businesses_registered_in(&self, year: i32) -> Vec<Business> {
        self.try_businesses_registered_in(year).unwrap_or_else(|err| {
            log::warn!("businesses-registered-in query failed for year {year}: {err}");
            Vec::new()
        })
    }

    /// The most recently added directors, newest id first, capped at 100.
    pub fn latest_directors(&self) -> Vec<Director> {
        self.try_latest_directors().unwrap_or_else(|err| {
            log::warn!("latest directors query failed: {err}");
            Vec::new()
        })
    }

    /// Business names paired with the full name of each linked director.
    pub fn business_director_names(&self) -> Vec<BusinessDirectorName> {
        self.try_business_director_names().unwrap_or_else(|err| {
            log::warn!("business/director names query failed: {err}");
            Vec::new()
        })
    }

    fn try_records(&self) -> Result<Vec<RegisterRecord>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            r#"
            SELECT d.id, d.first_name, d.last_name, b.name, b.registered_address, b.registration_number
            FROM directors d
            JOIN director_businesses db ON d.id = db.director_id
            JOIN businesses b ON db.business_id = b.id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RegisterRecord {
                director_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                business_name: row.get(3)?,
                registered_address: row.get(4)?,
                registration_number: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn try_directors(&self) -> Result<Vec<Director>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            "SELECT d.id, d.first_name, d.last_name, d.occupation, d.date_of_birth FROM directors d",
        )?;
        let rows = stmt.query_map([], director_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn try_director_by_id(&self, id: i64) -> Result<Option<Director>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            "SELECT d.id, d.first_name, d.last_name, d.occupation, d.date_of_birth
             FROM directors d
             WHERE d.id = ?1",
        )?;
        let mut rows = stmt.query_map([id], director_from_row)?;

        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    fn try_businesses(&self) -> Result<Vec<Business>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            "SELECT b.id, b.name, b.registered_address, b.registration_date, b.registration_number
             FROM businesses b",
        )?;
        let rows = stmt.query_map([], business_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn try_business_by_id(&self, id: i64) -> Result<Option<Business>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            "SELECT b.id, b.name, b.registered_address, b.registration_date, b.registration_number
             FROM businesses b
             WHERE b.id = ?1",
        )?;
        let mut rows = stmt.query_map([id], business_from_row)?;

        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    fn try_businesses_registered_in(&self, year: i32) -> Result<Vec<Business>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        // Registration dates are stored as ISO-8601 text, so the year
        // component is extractable in the database itself.
        let mut stmt = conn.prepare(
            "SELECT b.id, b.name, b.registered_address, b.registration_date, b.registration_number
             FROM businesses b
             WHERE CAST(strftime('%Y', b.registration_date) AS INTEGER) = ?1",
        )?;
        let rows = stmt.query_map([year], business_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn try_latest_directors(&self) -> Result<Vec<Director>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            "SELECT d.id, d.first_name, d.last_name, d.occupation, d.date_of_birth
             FROM directors d
             ORDER BY d.id DESC
             LIMIT ?1",
        )?;
        let rows = stmt.query_map([LATEST_DIRECTORS_LIMIT], director_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    fn try_business_director_names(&self) -> Result<Vec<BusinessDirectorName>> {
        let conn = self
            .conn
            .lock()
            .expect("RecordRepository: failed to acquire database lock");
        let mut stmt = conn.prepare(
            r#"
            SELECT b.name AS business_name, d.first_name || ' ' || d.last_name AS director_name
            FROM businesses b
            JOIN director_businesses db ON b.id = db.business_id
            JOIN directors d ON db.director_id = d.id
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(BusinessDirectorName {
                business_name: row.get(0)?,
                director_name: row.get(1)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}

fn director_from_row(row: &Row<'_>) -> rusqlite::Result<Director> {
    Ok(Director {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        occupation: row.get(3)?,
        date_of_birth: row.get(4)?,
    })
}

fn business_from_row(row: &Row<'_>) -> rusqlite::Result<Business> {
    Ok(Business {
        id: row.get(0)?,
        name: row.get(1)?,
        registered_address: row.get(2)?,
        registration_date: row.get(3)?,
        registration_number: row.get(4)?,
    })
}
