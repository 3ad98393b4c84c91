use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::error::{Result, WalletError};
use crate::network::Network;
use crate::provider::Eip1193Wallet;
use crate::state::{ConnectionAction, ConnectionState};
use crate::workflow::{self, WorkflowGuard};

#[derive(Clone, PartialEq)]
pub struct UseWalletHandle {
    state: UseReducerHandle<ConnectionState>,
    guard: WorkflowGuard,
}

impl UseWalletHandle {
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn connected(&self) -> bool {
        self.state.is_connected()
    }

    pub fn display_address(&self) -> String {
        self.state.display_account.clone()
    }

    pub fn connect(&self) {
        log::debug!("connect wallet");
        self.run(|| async move {
            let wallet = Eip1193Wallet::detect();
            workflow::connect(wallet.as_ref()).await
        });
    }

    pub fn switch_network(&self, target: Network) {
        log::debug!("switch network to {}", target);
        self.run(move || async move {
            let wallet = Eip1193Wallet::detect();
            workflow::switch_network(wallet.as_ref(), target).await
        });
    }

    pub fn open_modal(&self) {
        self.state.dispatch(ConnectionAction::OpenModal);
    }

    pub fn close_modal(&self) {
        self.state.dispatch(ConnectionAction::CloseModal);
    }

    /// Spawns a workflow and applies its action once it succeeds. Triggers arriving while
    /// another workflow is pending are dropped.
    fn run<F, Fut>(&self, workflow: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<ConnectionAction>> + 'static,
    {
        let in_flight = match self.guard.begin() {
            Ok(in_flight) => in_flight,
            Err(err) => {
                log::warn!("{}", err);
                return;
            }
        };
        let dispatcher = self.state.dispatcher();

        spawn_local(async move {
            let result = workflow().await;
            drop(in_flight);
            match result {
                Ok(action) => dispatcher.dispatch(action),
                Err(WalletError::NoProvider) => log::warn!("no wallet found"),
                Err(err) => log::error!("{}", err),
            }
        });
    }
}

#[hook]
pub fn use_wallet() -> UseWalletHandle {
    let state = use_reducer(ConnectionState::default);
    let guard = use_memo(|_| WorkflowGuard::default(), ());

    UseWalletHandle {
        state,
        guard: (*guard).clone(),
    }
}
