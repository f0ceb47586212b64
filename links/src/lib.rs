//! Shared domain core for the linkbin client.
//!
//! This crate owns the data model, the session guard, the auth-form and
//! dashboard state machines, and the HTTP clients for the authentication
//! provider and the links API. It builds for both `wasm32` (the Leptos
//! `client` crate) and native targets (the `server` crate and tests), so the
//! UI layer only wires signals to these types.

pub mod api;
pub mod auth_form;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod load;
pub mod model;
pub mod provider;
pub mod route;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use api::{HttpLinksApi, LinksApi};
pub use config::ClientConfig;
pub use error::{ApiError, AuthError, ValidationError};
pub use load::LoadState;
pub use model::{Credentials, Link, NewLink, Session, User};
pub use provider::{AuthProvider, GoTrueClient, MemoryStorage, SessionStorage};
pub use route::Route;
pub use session::{Guard, SessionState};
