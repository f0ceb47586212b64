//! Startup errors for the SSR host.

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Leptos options could not be loaded from `LEPTOS_*` or the workspace
    /// manifest.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
