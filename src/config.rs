use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::chain::{
    Amm, CHAIN_ID_ARBITRUM, CHAIN_ID_BASE, CHAIN_ID_BSC, CHAIN_ID_ETH, CHAIN_ID_MANTLE,
    CHAIN_ID_POLYGON,
};
use crate::sources::SourceError;

const CONFIG_PATH: &str = "config.toml";

/// Immutable adaptor configuration, built once at startup and handed to the
/// collector. Every field has a default so a partial (or missing)
/// config.toml works.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    #[serde(default = "default_app_url")]
    pub app_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_concurrent_queries")]
    pub max_concurrent_queries: usize,
    // Static registries; code-defined, not file-overridable (TOML keys are
    // strings, chain ids are not). Tests construct Config directly.
    #[serde(skip_deserializing, default = "default_subgraphs")]
    pub subgraphs: HashMap<Amm, HashMap<u32, String>>,
    #[serde(skip_deserializing, default = "default_excluded_vaults")]
    pub excluded_vaults: HashMap<u32, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            app_url: default_app_url(),
            request_timeout_secs: default_timeout_secs(),
            max_concurrent_queries: default_max_concurrent_queries(),
            subgraphs: default_subgraphs(),
            excluded_vaults: default_excluded_vaults(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(CONFIG_PATH).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(CONFIG_PATH)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Registry lookup for the subgraph serving an (amm, chain) pair. A
    /// pair referenced by live feed data but missing here is a fatal
    /// configuration error, not a vault to skip.
    pub fn subgraph_for(&self, amm: Amm, chain_id: u32) -> Result<&str, SourceError> {
        self.subgraphs
            .get(&amm)
            .and_then(|by_chain| by_chain.get(&chain_id))
            .map(String::as_str)
            .ok_or_else(|| {
                SourceError::Config(format!(
                    "no subgraph registered for {} on chain {}",
                    amm, chain_id
                ))
            })
    }
}

fn default_feed_url() -> String {
    "https://rangeprotocol-public.s3.ap-southeast-1.amazonaws.com/data/RangeAPY.json".to_string()
}

fn default_app_url() -> String {
    crate::PROJECT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_concurrent_queries() -> usize {
    20
}

fn default_subgraphs() -> HashMap<Amm, HashMap<u32, String>> {
    let table: &[(Amm, &[(u32, &str)])] = &[
        (
            Amm::Uniswap,
            &[
                (CHAIN_ID_ETH, "https://api.thegraph.com/subgraphs/name/0xbateman/ethereum-uniswap"),
                (CHAIN_ID_ARBITRUM, "https://api.thegraph.com/subgraphs/name/0xbateman/arbitrum-uniswap"),
                (CHAIN_ID_BASE, "https://api.thegraph.com/subgraphs/name/0xbateman/base-uniswap"),
            ],
        ),
        (
            Amm::Pancakeswap,
            &[
                (CHAIN_ID_BSC, "https://api.thegraph.com/subgraphs/name/0xbateman/range-bsc-pancakeswap"),
                (CHAIN_ID_ETH, "https://api.thegraph.com/subgraphs/name/0xbateman/mainnet-pancakeswap"),
            ],
        ),
        (
            Amm::Sushiswap,
            &[(CHAIN_ID_ARBITRUM, "https://api.thegraph.com/subgraphs/name/0xbateman/arbitrum-sushiswap")],
        ),
        (
            Amm::Quickswap,
            &[(CHAIN_ID_POLYGON, "https://api.thegraph.com/subgraphs/name/0xbateman/polygon-quickswap")],
        ),
        (
            Amm::Retro,
            &[(CHAIN_ID_POLYGON, "https://api.thegraph.com/subgraphs/name/0xbateman/polygon-retro")],
        ),
        (
            Amm::Agni,
            &[(CHAIN_ID_MANTLE, "https://api.goldsky.com/api/public/project_clm9yop8acrue2nrf5ck9fujh/subgraphs/mantle/1.0/gn")],
        ),
        (
            Amm::Camelot,
            &[(CHAIN_ID_ARBITRUM, "https://api.thegraph.com/subgraphs/name/0xbateman/arbitrum-camelot")],
        ),
        (
            Amm::Fusionx,
            &[(CHAIN_ID_MANTLE, "https://api.goldsky.com/api/public/project_clm97huay3j9y2nw04d8nhmrt/subgraphs/fusionX/0.1/gn")],
        ),
        (
            Amm::Izumi,
            &[(CHAIN_ID_MANTLE, "https://api.goldsky.com/api/public/project_clm97huay3j9y2nw04d8nhmrt/subgraphs/mantle-izumi/0.2/gn")],
        ),
        (
            Amm::Swapsicle,
            &[(CHAIN_ID_MANTLE, "https://api.goldsky.com/api/public/project_clm97huay3j9y2nw04d8nhmrt/subgraphs/swapsicle/1.0.0/gn")],
        ),
    ];

    table
        .iter()
        .map(|(amm, chains)| {
            let by_chain = chains
                .iter()
                .map(|(chain_id, url)| (*chain_id, (*url).to_string()))
                .collect();
            (*amm, by_chain)
        })
        .collect()
}

fn default_excluded_vaults() -> HashMap<u32, Vec<String>> {
    let table: &[(u32, &[&str])] = &[
        (
            CHAIN_ID_ETH,
            &[
                "0x3d0D622513191E8CF2ED5A340A9180bbfA2Ca95D",
                "0xF9ab542616A0C8fA94e41c968622C3b2367F5ad1",
            ],
        ),
        (CHAIN_ID_POLYGON, &[]),
        (
            CHAIN_ID_BSC,
            &[
                "0x51eaDC8e4D72cca149e3d9254cC5195357056328",
                "0x04f7a8FD669B6e84c3A642f6f48B1200A4B1E1E2",
            ],
        ),
        (
            CHAIN_ID_ARBITRUM,
            &[
                "0xABda61ECDbd45a02bFc5fcE2141f76D50D19bFBD",
                "0x7548a71f63a2402413E9647798084E8802C288c2",
                "0x27d435274ac6fB174812bC9eA5c4E902Ed271592",
            ],
        ),
        (
            CHAIN_ID_MANTLE,
            &[
                "0x46E7d197159e39C8A010887C5805f3bB8DDc7aD6",
                "0x92c2fCCC1E38Fb5bB669A57eA5806E4d893b7D45",
                "0xb7ae5Ff93690d1F4Cd2fDC9F818D4D9DaA73EcC4",
                "0x51FA25E5fb0533Fe7b9f4a22CD3146f0B17E4440",
                "0x7dCCC722fC4E735339e3BA21440dB15B22e0C162",
            ],
        ),
        (CHAIN_ID_BASE, &[]),
    ];

    table
        .iter()
        .map(|(chain_id, vaults)| {
            let lowered = vaults.iter().map(|v| v.to_lowercase()).collect();
            (*chain_id, lowered)
        })
        .collect()
}
