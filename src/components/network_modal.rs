use yew::prelude::*;

use super::{BUTTON_CLASS, MISSING_CONTEXT};
use crate::hooks::{use_focus_on_mount, UseWalletHandle};
use crate::network::Network;

#[function_component]
pub fn NetworkModal() -> Html {
    let wallet = use_context::<UseWalletHandle>().expect(MISSING_CONTEXT);

    if wallet.state().is_modal_open() {
        html! { <NetworkDialog /> }
    } else {
        html! {}
    }
}

/// Takes focus when it mounts so Escape reaches the keydown handler.
#[function_component]
fn NetworkDialog() -> Html {
    let wallet = use_context::<UseWalletHandle>().expect(MISSING_CONTEXT);
    let dialog = use_node_ref();
    use_focus_on_mount(dialog.clone());

    let on_backdrop = {
        let wallet = wallet.clone();
        Callback::from(move |_: MouseEvent| wallet.close_modal())
    };
    let on_keydown = {
        let wallet = wallet.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                wallet.close_modal();
            }
        })
    };

    let buttons = Network::ALL.into_iter().map(|network| {
        let wallet = wallet.clone();
        let onclick = Callback::from(move |_: MouseEvent| wallet.switch_network(network));
        html! {
            <button type="button" class={BUTTON_CLASS} key={network.name()} {onclick}>
                {network.name()}
            </button>
        }
    });

    html! {
        <div class="fixed inset-0 z-10 overflow-y-auto" role="dialog" aria-modal="true" tabindex="-1" ref={dialog} onkeydown={on_keydown}>
            <div class="min-h-screen px-4 text-center">
                <div class="fixed inset-0" onclick={on_backdrop} />
                <span class="inline-block h-screen align-middle" aria-hidden="true">{"\u{200b}"}</span>
                <div class="inline-block w-full max-w-sm p-6 my-8 overflow-hidden text-left align-middle transition-all transform shadow-xl bg-slate-500 rounded-2xl">
                    <h3 class="text-lg font-medium leading-6 text-white">{"Select a Network"}</h3>
                    <div class="flex justify-start mt-8 space-x-1">
                        {for buttons}
                    </div>
                </div>
            </div>
        </div>
    }
}
