use crate::utils::format_symbol;

/// Ticker pair from a subgraph vault name shaped like
/// `"<TokenA name> / <TokenB name>"`: last word before the slash, first word
/// after it, joined with a hyphen. Total over arbitrary names, including the
/// degraded sentinel "failed/failed" and names with no slash at all.
pub fn derive_symbol(pool_name: &str) -> String {
    let (left, right) = pool_name.split_once('/').unwrap_or((pool_name, ""));
    let base = left.split_whitespace().last().unwrap_or(left);
    let quote = right.split_whitespace().next().unwrap_or(right);
    format!("{}-{}", format_symbol(base), format_symbol(quote))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_symbol_from_pair_name() {
        assert_eq!(derive_symbol("Wrapped Ether / USD Coin"), "ETHER-USD");
        assert_eq!(derive_symbol("Wrapped BTC / Tether USD"), "BTC-TETHER");
    }

    #[test]
    fn test_derive_symbol_without_spaces() {
        assert_eq!(derive_symbol("WETH/USDC"), "WETH-USDC");
    }

    #[test]
    fn test_derive_symbol_degraded_sentinel() {
        assert_eq!(derive_symbol("failed/failed"), "FAILED-FAILED");
    }

    #[test]
    fn test_derive_symbol_total_over_malformed_names() {
        assert_eq!(derive_symbol(""), "-");
        assert_eq!(derive_symbol("no slash here"), "HERE-");
        assert_eq!(derive_symbol("/"), "-");
    }
}
