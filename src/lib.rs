mod address;
mod components;
mod error;
mod hooks;
mod network;
mod provider;
mod state;
mod workflow;

pub use address::{checksum_address, minify_address};
pub use components::{
    AccountLabel, ConnectButton, NetworkButton, NetworkModal, WalletBar, WalletContextProvider,
};
pub use error::{Result, WalletError};
pub use hooks::{use_focus_on_mount, use_wallet, UseWalletHandle};
pub use network::{registry, NativeCurrency, Network, NetworkDescriptor};
pub use provider::{Eip1193Wallet, WalletProvider};
pub use state::{ConnectionAction, ConnectionState, Modal};
pub use workflow::{connect, switch_network, InFlight, WorkflowGuard};
