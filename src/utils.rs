//! Formatting helpers matching the display conventions of the downstream
//! yield aggregator. Both functions are total: any input string comes back
//! formatted, never as an error.

/// Chain slug -> display name ("ethereum" -> "Ethereum", "bsc" -> "Binance").
pub fn format_chain(chain: &str) -> String {
    match chain {
        "bsc" => "Binance".to_string(),
        _ => {
            let mut chars = chain.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        }
    }
}

/// Raw token-name fragment -> display symbol: trims, strips parentheses,
/// uppercases.
pub fn format_symbol(token: &str) -> String {
    token.trim().replace(['(', ')'], "").to_uppercase()
}
