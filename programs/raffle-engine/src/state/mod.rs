pub use entry_ledger::*;
pub use raffle::*;
pub use vault::*;

pub mod entry_ledger;
pub mod raffle;
pub mod vault;
