//! REST implementation of the provider contract.

mod config;
mod rest;

pub use config::ProviderConfig;
pub use rest::RestProvider;
