use thiserror::Error;
use wasm_bindgen::JsValue;

/// EIP-1193 "user rejected request" code.
const USER_REJECTED: i64 = 4001;

pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("no wallet found")]
    NoProvider,

    #[error("wallet returned no accounts")]
    NoAccounts,

    #[error("request rejected by user: {0}")]
    Rejected(String),

    #[error("wallet provider error: {0}")]
    Provider(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("another wallet request is in progress")]
    Busy,
}

impl From<web3::Error> for WalletError {
    fn from(err: web3::Error) -> Self {
        match err {
            web3::Error::Rpc(rpc) if rpc.code.code() == USER_REJECTED => Self::Rejected(rpc.message),
            other => Self::Provider(other.to_string()),
        }
    }
}

impl From<JsValue> for WalletError {
    fn from(value: JsValue) -> Self {
        Self::Provider(format!("{:?}", value))
    }
}
