// Application layer - the account use cases.
// Transport adapters (HTTP today) call into `LedgerService` and render its
// results; no business rule lives outside this module and `domain`.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
