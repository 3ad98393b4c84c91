use yew::prelude::*;

use super::{BUTTON_CLASS, MISSING_CONTEXT};
use crate::hooks::UseWalletHandle;

#[function_component]
pub fn ConnectButton() -> Html {
    let wallet = use_context::<UseWalletHandle>().expect(MISSING_CONTEXT);
    let label = wallet.state().connect_label();

    let onclick = Callback::from(move |_: MouseEvent| wallet.connect());

    html! {
        <button type="button" class={BUTTON_CLASS} {onclick}>{label}</button>
    }
}
