mod use_focus_on_mount;
mod use_wallet;

pub use use_focus_on_mount::use_focus_on_mount;
pub use use_wallet::{use_wallet, UseWalletHandle};
