pub mod application;
pub mod domain;
pub mod io;
pub mod storage;

pub use application::{LedgerError, LedgerService, StockEvent};
pub use domain::*;
pub use storage::{MemoryStore, SqliteStore, Store};
