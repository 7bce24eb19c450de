// Application layer - the ledger service, its error taxonomy and the
// read-model structs handed to the UI.

pub mod error;
pub mod reporting;
pub mod service;

pub use error::*;
pub use reporting::*;
pub use service::*;
