pub mod collector;
pub mod filter;
pub mod symbol;

pub use collector::YieldCollector;
pub use filter::VaultFilter;
pub use symbol::derive_symbol;
