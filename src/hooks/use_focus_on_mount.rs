use web_sys::HtmlElement;
use yew::prelude::*;

/// Moves keyboard focus to `node` once it is mounted.
#[hook]
pub fn use_focus_on_mount(node: NodeRef) {
    use_effect_with_deps(
        |node| {
            if let Some(element) = node.cast::<HtmlElement>() {
                if let Err(err) = element.focus() {
                    log::warn!("failed to focus dialog: {:?}", err);
                }
            }
            || ()
        },
        node,
    );
}
