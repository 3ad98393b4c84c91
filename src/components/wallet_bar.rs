use yew::prelude::*;

use super::{ConnectButton, NetworkButton, NetworkModal, WalletContextProvider};

/// Connect button, network trigger and network modal, wired to one wallet context.
#[function_component]
pub fn WalletBar() -> Html {
    html! {
        <WalletContextProvider>
            <div class="flex justify-end px-4 py-4 space-x-1">
                <ConnectButton />
                <NetworkButton />
            </div>
            <NetworkModal />
        </WalletContextProvider>
    }
}
