//! # ts-infra
//!
//! Adapters behind the ports declared in `ts-core`: the REST API client,
//! remote image storage, CEP lookups, the on-disk selection store and the
//! in-memory session.

pub mod fs;
pub mod http;
pub mod session;

pub use fs::FileSelectionStore;
pub use http::{HttpApiClient, HttpImageStorage, ViaCepClient};
pub use session::InMemorySessionStore;
