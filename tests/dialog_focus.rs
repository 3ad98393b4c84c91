#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;
use yew_network_switcher::use_focus_on_mount;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component]
fn Page() -> Html {
    let dialog = use_node_ref();
    use_focus_on_mount(dialog.clone());

    html! {
        <>
            <button id="trigger">{"Select Network"}</button>
            <div id="dialog" tabindex="-1" ref={dialog} />
        </>
    }
}

#[wasm_bindgen_test]
async fn test_dialog_takes_focus_on_mount() {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    yew::Renderer::<Page>::with_root(root).render();
    sleep(Duration::from_millis(50)).await;

    let active = document.active_element().unwrap();
    assert_eq!(active.id(), "dialog");
}
