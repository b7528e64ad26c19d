//! I/O module
//!
//! Handles seed loading, action script parsing and report output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, report serialization)
//! - `seed` - Built-in seed accounts and seed file loading
//! - `sync_reader` - Synchronous action reader with iterator interface
//! - `async_reader` - Asynchronous action reader with batch reading interface

pub mod async_reader;
pub mod csv_format;
pub mod seed;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    convert_action_record, convert_seed_record, write_accounts_csv, ActionCsvRecord,
    SeedCsvRecord,
};
pub use seed::{default_accounts, load_accounts_csv};
pub use sync_reader::SyncReader;
