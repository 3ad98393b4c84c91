use yew::prelude::*;

use crate::hooks::{use_wallet, UseWalletHandle};

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn WalletContextProvider(props: &Props) -> Html {
    let wallet = use_wallet();

    html! {
        <ContextProvider<UseWalletHandle> context={wallet}>
            {for props.children.iter()}
        </ContextProvider<UseWalletHandle>>
    }
}
