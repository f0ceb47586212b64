//! Tagged load state for remote data.

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;

/// Lifecycle of a remote fetch. Replaces separate loading flags and
/// nullable error strings with one value the view can match on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}
