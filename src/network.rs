use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::Serialize;

use crate::error::WalletError;

/// Networks offered by the selector.
///
/// `Rinkeby` is known to wallets natively and is only ever switched to; the others are added
/// from their [`NetworkDescriptor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Rinkeby,
    Polygon,
    Bsc,
}

impl Network {
    /// Modal order.
    pub const ALL: [Network; 3] = [Network::Rinkeby, Network::Polygon, Network::Bsc];

    pub fn name(&self) -> &'static str {
        match self {
            Network::Rinkeby => "Rinkeby",
            Network::Polygon => "Polygon",
            Network::Bsc => "BSC",
        }
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Rinkeby => 4,
            Network::Polygon => 137,
            Network::Bsc => 56,
        }
    }

    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id())
    }

    /// Maps the decimal id reported by the wallet to a network. Anything unrecognised is
    /// treated as the test network.
    pub fn from_network_version(version: &str) -> Network {
        match version {
            "137" => Network::Polygon,
            "56" => Network::Bsc,
            _ => Network::Rinkeby,
        }
    }

    /// Parameters for `wallet_addEthereumChain`, `None` for natively supported networks.
    pub fn descriptor(&self) -> Option<&'static NetworkDescriptor> {
        registry().get(self)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.name() == s)
            .ok_or_else(|| WalletError::UnknownNetwork(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// EIP-3085 chain parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    /// The first entry is the primary endpoint, the rest are fallbacks.
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}

impl NetworkDescriptor {
    fn new(
        chain_id: u64,
        chain_name: &str,
        native_currency: (&str, &str, u8),
        rpc_urls: &[&str],
        block_explorer_urls: &[&str],
    ) -> Self {
        let (name, symbol, decimals) = native_currency;
        NetworkDescriptor {
            chain_id: format!("{:#x}", chain_id),
            chain_name: chain_name.to_owned(),
            native_currency: NativeCurrency {
                name: name.to_owned(),
                symbol: symbol.to_owned(),
                decimals,
            },
            rpc_urls: rpc_urls.iter().map(|url| url.to_string()).collect(),
            block_explorer_urls: block_explorer_urls.iter().map(|url| url.to_string()).collect(),
        }
    }
}

const BSC_RPC_URLS: [&str; 13] = [
    "https://bsc-dataseed1.binance.org",
    "https://bsc-dataseed2.binance.org",
    "https://bsc-dataseed3.binance.org",
    "https://bsc-dataseed4.binance.org",
    "https://bsc-dataseed1.defibit.io",
    "https://bsc-dataseed2.defibit.io",
    "https://bsc-dataseed3.defibit.io",
    "https://bsc-dataseed4.defibit.io",
    "https://bsc-dataseed1.ninicoin.io",
    "https://bsc-dataseed2.ninicoin.io",
    "https://bsc-dataseed3.ninicoin.io",
    "https://bsc-dataseed4.ninicoin.io",
    "wss://bsc-ws-node.nariox.org",
];

lazy_static! {
    static ref REGISTRY: HashMap<Network, NetworkDescriptor> = {
        let mut networks = HashMap::new();
        networks.insert(
            Network::Polygon,
            NetworkDescriptor::new(
                137,
                "Polygon Mainnet",
                ("MATIC", "MATIC", 18),
                &["https://polygon-rpc.com/"],
                &["https://polygonscan.com/"],
            ),
        );
        networks.insert(
            Network::Bsc,
            NetworkDescriptor::new(
                56,
                "Binance Smart Chain Mainnet",
                ("Binance Chain Native Token", "BNB", 18),
                &BSC_RPC_URLS,
                &["https://bscscan.com"],
            ),
        );
        networks
    };
}

/// Descriptors for every network that has to be added to the wallet before use.
pub fn registry() -> &'static HashMap<Network, NetworkDescriptor> {
    &REGISTRY
}
