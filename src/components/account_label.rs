use yew::prelude::*;

use super::MISSING_CONTEXT;
use crate::hooks::UseWalletHandle;

#[function_component]
pub fn AccountLabel() -> Html {
    let wallet = use_context::<UseWalletHandle>().expect(MISSING_CONTEXT);

    html! {
        <div>
            if wallet.connected() {
                {wallet.display_address()}
            } else {
                {"Disconnected"}
            }
        </div>
    }
}
