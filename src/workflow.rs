use std::cell::Cell;
use std::rc::Rc;

use crate::error::{Result, WalletError};
use crate::network::Network;
use crate::provider::WalletProvider;
use crate::state::ConnectionAction;

/// Requests account access and reads the current network.
///
/// Nothing is returned for the caller to apply unless every request succeeded.
pub async fn connect<P>(provider: Option<&P>) -> Result<ConnectionAction>
where
    P: WalletProvider + ?Sized,
{
    let provider = provider.ok_or(WalletError::NoProvider)?;

    let accounts = provider.request_accounts().await?;
    let account = accounts.into_iter().next().ok_or(WalletError::NoAccounts)?;
    let version = provider.network_version().await?;
    let network = Network::from_network_version(&version);
    log::debug!("connected {} on {} (net_version {})", account, network, version);

    Ok(ConnectionAction::Connected { account, network })
}

/// Switches to a network the wallet already knows, or adds it from its descriptor.
pub async fn switch_network<P>(provider: Option<&P>, target: Network) -> Result<ConnectionAction>
where
    P: WalletProvider + ?Sized,
{
    let provider = provider.ok_or(WalletError::NoProvider)?;

    match target.descriptor() {
        None => provider.switch_chain(&target.chain_id_hex()).await?,
        Some(descriptor) => provider.add_chain(descriptor).await?,
    }
    log::debug!("switched to {}", target);

    Ok(ConnectionAction::NetworkSwitched(target))
}

/// Allows one workflow at a time per component instance.
#[derive(Clone, Debug, Default)]
pub struct WorkflowGuard {
    busy: Rc<Cell<bool>>,
}

/// Held for the duration of a workflow; releases the guard on drop.
#[derive(Debug)]
pub struct InFlight {
    busy: Rc<Cell<bool>>,
}

impl WorkflowGuard {
    pub fn try_begin(&self) -> Option<InFlight> {
        if self.busy.replace(true) {
            return None;
        }
        Some(InFlight {
            busy: self.busy.clone(),
        })
    }

    pub fn begin(&self) -> Result<InFlight> {
        self.try_begin().ok_or(WalletError::Busy)
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

impl PartialEq for WorkflowGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.busy, &other.busy)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
