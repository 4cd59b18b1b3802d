pub mod chain;
pub mod pool;
pub mod vault;

pub use chain::{chain_name, Amm};
pub use pool::{VaultPool, YieldPool};
pub use vault::VaultStat;
