use std::collections::{HashMap, HashSet};

use crate::models::VaultStat;

/// Drops vaults on the per-chain exclusion list. Addresses are compared
/// case-insensitively; chains without a list exclude nothing.
pub struct VaultFilter {
    excluded: HashMap<u32, HashSet<String>>,
}

impl VaultFilter {
    pub fn new(excluded_vaults: &HashMap<u32, Vec<String>>) -> Self {
        let excluded = excluded_vaults
            .iter()
            .map(|(chain_id, vaults)| {
                let set = vaults.iter().map(|v| v.to_lowercase()).collect();
                (*chain_id, set)
            })
            .collect();
        Self { excluded }
    }

    pub fn is_excluded(&self, vault: &VaultStat) -> bool {
        self.excluded
            .get(&vault.chain_id)
            .is_some_and(|set| set.contains(&vault.vault.to_lowercase()))
    }

    pub fn apply(&self, vaults: Vec<VaultStat>) -> Vec<VaultStat> {
        let before = vaults.len();
        let kept: Vec<VaultStat> = vaults.into_iter().filter(|v| !self.is_excluded(v)).collect();
        let dropped = before - kept.len();
        if dropped > 0 {
            tracing::debug!("excluded {} vault(s) from feed of {}", dropped, before);
        }
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amm;

    fn stat(vault: &str, chain_id: u32) -> VaultStat {
        VaultStat {
            vault: vault.to_string(),
            chain_id,
            amm: Amm::Uniswap,
            current_notional: 1.0,
            apr: None,
        }
    }

    fn filter() -> VaultFilter {
        let mut excluded = HashMap::new();
        excluded.insert(1, vec!["0xAbCdEf0000000000000000000000000000000001".to_string()]);
        excluded.insert(137, vec![]);
        VaultFilter::new(&excluded)
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let f = filter();
        assert!(f.is_excluded(&stat("0xabcdef0000000000000000000000000000000001", 1)));
        assert!(f.is_excluded(&stat("0xABCDEF0000000000000000000000000000000001", 1)));
    }

    #[test]
    fn test_same_address_on_other_chain_is_kept() {
        let f = filter();
        assert!(!f.is_excluded(&stat("0xabcdef0000000000000000000000000000000001", 137)));
        assert!(!f.is_excluded(&stat("0xabcdef0000000000000000000000000000000001", 42161)));
    }

    #[test]
    fn test_apply_keeps_order() {
        let f = filter();
        let vaults = vec![
            stat("0x01", 1),
            stat("0xABCDEF0000000000000000000000000000000001", 1),
            stat("0x02", 1),
        ];
        let kept = f.apply(vaults);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].vault, "0x01");
        assert_eq!(kept[1].vault, "0x02");
    }
}
