//! Repository implementations for register data access.
//!
//! Provides the read-only reporting queries over directors, businesses,
//! and the director–business link table.

mod record;

pub use record::RecordRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub(super) type DbConn = Arc<Mutex<Connection>>;
