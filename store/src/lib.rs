//! Abstract storage port for the custody wallet core.
//!
//! Every storage backend (SQL, embedded KV, in-memory for testing) implements
//! these traits. The registry depends only on the traits; schema and migration
//! mechanics live with the backend.

pub mod account;
pub mod error;
pub mod wallet;

pub use account::AccountStore;
pub use error::StoreError;
pub use wallet::WalletStore;

/// Both halves of the port, for components that need wallets and accounts.
pub trait Store: WalletStore + AccountStore {}

impl<T: WalletStore + AccountStore> Store for T {}
