use yew_network_switcher::WalletBar;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    yew::Renderer::<WalletBar>::new().render();
}
