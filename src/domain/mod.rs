mod clock;
mod customer;
mod ledger;
mod money;
mod operation;

pub use clock::*;
pub use customer::*;
pub use ledger::*;
pub use money::*;
pub use operation::*;
