use serde::Deserialize;

use super::Amm;

/// One vault entry from the RangeAPY feed. Lives for a single collect cycle.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultStat {
    pub vault: String,
    pub chain_id: u32,
    pub amm: Amm,
    pub current_notional: f64,
    #[serde(default)]
    pub apr: Option<f64>,
}
