use yew::prelude::*;

use super::{BUTTON_CLASS, DISABLED_BUTTON_CLASS, MISSING_CONTEXT};
use crate::hooks::UseWalletHandle;

/// Opens the network modal. Disabled until a wallet has been connected.
#[function_component]
pub fn NetworkButton() -> Html {
    let wallet = use_context::<UseWalletHandle>().expect(MISSING_CONTEXT);

    if !wallet.state().network_ui_enabled {
        return html! {
            <button type="button" class={DISABLED_BUTTON_CLASS} disabled={true}>
                {"Select a Network"}
            </button>
        };
    }

    let label = wallet.state().network_label();
    let onclick = Callback::from(move |_: MouseEvent| wallet.open_modal());

    html! {
        <button type="button" class={BUTTON_CLASS} {onclick}>{label}</button>
    }
}
