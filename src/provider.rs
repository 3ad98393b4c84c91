use async_trait::async_trait;
use serde_json::json;
use web3::transports::eip_1193::{Eip1193, Provider};
use web3::{Transport, Web3};

use crate::address::checksum_address;
use crate::error::{Result, WalletError};
use crate::network::NetworkDescriptor;

/// The subset of an injected wallet the workflows talk to.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// `eth_requestAccounts`. May prompt the user.
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Decimal network id, as in `net_version`.
    async fn network_version(&self) -> Result<String>;

    /// `wallet_switchEthereumChain`. Fails for chains the wallet does not know.
    async fn switch_chain(&self, chain_id: &str) -> Result<()>;

    /// `wallet_addEthereumChain`.
    async fn add_chain(&self, descriptor: &NetworkDescriptor) -> Result<()>;
}

/// Wallet injected at `window.ethereum`.
#[derive(Clone)]
pub struct Eip1193Wallet {
    web3: Web3<Eip1193>,
}

impl Eip1193Wallet {
    pub fn detect() -> Option<Self> {
        match Provider::default() {
            Ok(Some(provider)) => Some(Self {
                web3: Web3::new(Eip1193::new(provider)),
            }),
            Ok(None) => None,
            Err(err) => {
                log::error!("failed to read window.ethereum: {}", WalletError::from(err));
                None
            }
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for Eip1193Wallet {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        let accounts = self.web3.eth().request_accounts().await?;
        Ok(accounts
            .into_iter()
            .map(|account| checksum_address(&format!("{:?}", account)))
            .collect())
    }

    async fn network_version(&self) -> Result<String> {
        Ok(self.web3.net().version().await?)
    }

    async fn switch_chain(&self, chain_id: &str) -> Result<()> {
        log::debug!("wallet_switchEthereumChain {}", chain_id);
        self.web3
            .transport()
            .execute("wallet_switchEthereumChain", vec![json!({ "chainId": chain_id })])
            .await?;
        Ok(())
    }

    async fn add_chain(&self, descriptor: &NetworkDescriptor) -> Result<()> {
        log::debug!("wallet_addEthereumChain {}", descriptor.chain_name);
        let params = serde_json::to_value(descriptor)
            .map_err(|err| WalletError::Provider(err.to_string()))?;
        self.web3
            .transport()
            .execute("wallet_addEthereumChain", vec![params])
            .await?;
        Ok(())
    }
}
