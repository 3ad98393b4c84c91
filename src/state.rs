use std::rc::Rc;

use yew::Reducible;

use crate::address::minify_address;
use crate::network::Network;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open,
}

/// Everything the wallet bar renders. Lives for the page and starts from `Default` on load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    /// Minified account, empty while disconnected.
    pub display_account: String,
    pub selected_network: Option<Network>,
    /// Set by the first successful connect and never cleared.
    pub network_ui_enabled: bool,
    pub modal: Modal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionAction {
    Connected { account: String, network: Network },
    NetworkSwitched(Network),
    OpenModal,
    CloseModal,
}

impl ConnectionState {
    pub fn apply(&self, action: ConnectionAction) -> ConnectionState {
        let mut next = self.clone();
        match action {
            ConnectionAction::Connected { account, network } => {
                next.display_account = minify_address(&account);
                next.selected_network = Some(network);
                next.network_ui_enabled = true;
            }
            ConnectionAction::NetworkSwitched(network) => {
                next.selected_network = Some(network);
                next.modal = Modal::Closed;
            }
            ConnectionAction::OpenModal => {
                if next.network_ui_enabled {
                    next.modal = Modal::Open;
                }
            }
            ConnectionAction::CloseModal => next.modal = Modal::Closed,
        }
        next
    }

    pub fn is_connected(&self) -> bool {
        !self.display_account.is_empty()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal == Modal::Open
    }

    pub fn connect_label(&self) -> String {
        if self.is_connected() {
            self.display_account.clone()
        } else {
            "Connect Wallet".to_owned()
        }
    }

    pub fn network_label(&self) -> String {
        match self.selected_network {
            Some(network) => network.to_string(),
            None => "Select Network".to_owned(),
        }
    }
}

impl Reducible for ConnectionState {
    type Action = ConnectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x1234567890123456789012345678901234567890";

    fn connected() -> ConnectionState {
        ConnectionState::default().apply(ConnectionAction::Connected {
            account: ADDRESS.to_owned(),
            network: Network::Polygon,
        })
    }

    #[test]
    fn test_default_state() {
        let state = ConnectionState::default();
        assert!(!state.is_connected());
        assert!(!state.network_ui_enabled);
        assert_eq!(state.selected_network, None);
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(state.connect_label(), "Connect Wallet");
        assert_eq!(state.network_label(), "Select Network");
    }

    #[test]
    fn test_connected_sets_fields_together() {
        let state = connected();
        assert_eq!(state.display_account, "0x1234...7890");
        assert_eq!(state.selected_network, Some(Network::Polygon));
        assert!(state.network_ui_enabled);
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(state.connect_label(), "0x1234...7890");
        assert_eq!(state.network_label(), "Polygon");
    }

    #[test]
    fn test_open_modal_gated_until_connected() {
        let state = ConnectionState::default().apply(ConnectionAction::OpenModal);
        assert_eq!(state, ConnectionState::default());

        let state = connected().apply(ConnectionAction::OpenModal);
        assert!(state.is_modal_open());
    }

    #[test]
    fn test_close_modal() {
        let state = connected()
            .apply(ConnectionAction::OpenModal)
            .apply(ConnectionAction::CloseModal);
        assert_eq!(state.modal, Modal::Closed);
        assert_eq!(state.selected_network, Some(Network::Polygon));
    }

    #[test]
    fn test_network_switched_closes_modal() {
        let state = connected()
            .apply(ConnectionAction::OpenModal)
            .apply(ConnectionAction::NetworkSwitched(Network::Bsc));
        assert_eq!(state.selected_network, Some(Network::Bsc));
        assert_eq!(state.modal, Modal::Closed);
    }

    #[test]
    fn test_network_ui_stays_enabled() {
        let state = connected()
            .apply(ConnectionAction::OpenModal)
            .apply(ConnectionAction::NetworkSwitched(Network::Rinkeby))
            .apply(ConnectionAction::CloseModal);
        assert!(state.network_ui_enabled);
        assert!(state.is_connected());
    }

    #[test]
    fn test_reduce_reuses_unchanged_state() {
        let state = Rc::new(ConnectionState::default());
        let next = state.clone().reduce(ConnectionAction::OpenModal);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
