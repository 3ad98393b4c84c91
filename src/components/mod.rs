mod account_label;
mod connect_button;
mod context_provider;
mod network_button;
mod network_modal;
mod wallet_bar;

pub use account_label::AccountLabel;
pub use connect_button::ConnectButton;
pub use context_provider::WalletContextProvider;
pub use network_button::NetworkButton;
pub use network_modal::NetworkModal;
pub use wallet_bar::WalletBar;

const BUTTON_CLASS: &str = "px-4 py-2 text-sm font-medium text-white bg-teal-600 rounded-md hover:bg-opacity-50 focus:outline-none focus-visible:ring-2 focus-visible:ring-white focus-visible:ring-opacity-75";
const DISABLED_BUTTON_CLASS: &str = "px-4 py-2 text-sm font-medium text-white bg-teal-600 rounded-md opacity-70 focus:outline-none focus-visible:ring-2 focus-visible:ring-white focus-visible:ring-opacity-75";

const MISSING_CONTEXT: &str =
    "no wallet context found. you must wrap your components in a <WalletContextProvider/>";
