pub mod emergency_withdraw;
pub mod enter_raffle;
pub mod fulfill_random_words;
pub mod initialize;
pub mod pause;
pub mod perform_upkeep;
pub mod read_raffle;

pub use emergency_withdraw::*;
pub use enter_raffle::*;
pub use fulfill_random_words::*;
pub use initialize::*;
pub use pause::*;
pub use perform_upkeep::*;
pub use read_raffle::*;
