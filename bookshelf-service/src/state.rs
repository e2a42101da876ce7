//! Application state management

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{books::Bookshelf, config::Config};

/// Application state shared across handlers
///
/// Cloning is cheap; every clone points at the same bookshelf. Handlers
/// hold the bookshelf lock for the whole of one operation, so concurrent
/// requests observe each other's effects in some serial order.
#[derive(Clone, Default)]
pub struct AppState {
    config: Arc<Config>,
    books: Arc<Mutex<Bookshelf>>,
}

impl AppState {
    /// Create a new builder for AppState
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the shared bookshelf
    pub fn books(&self) -> &Arc<Mutex<Bookshelf>> {
        &self.books
    }
}

/// Builder for AppState
#[derive(Default)]
pub struct AppStateBuilder {
    config: Option<Config>,
    bookshelf: Option<Bookshelf>,
}

impl AppStateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Start from an already populated bookshelf
    pub fn bookshelf(mut self, bookshelf: Bookshelf) -> Self {
        self.bookshelf = Some(bookshelf);
        self
    }

    pub fn build(self) -> AppState {
        AppState {
            config: Arc::new(self.config.unwrap_or_default()),
            books: Arc::new(Mutex::new(self.bookshelf.unwrap_or_default())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::BookInput;

    #[tokio::test]
    async fn test_clones_share_bookshelf() {
        let state = AppState::default();
        let clone = state.clone();

        state
            .books()
            .lock()
            .await
            .create(BookInput::named("shared"))
            .unwrap();

        assert_eq!(clone.books().lock().await.len(), 1);
    }

    #[tokio::test]
    async fn test_builder() {
        let mut config = Config::default();
        config.service.name = "built".to_string();

        let mut shelf = Bookshelf::new();
        shelf.create(BookInput::named("seed")).unwrap();

        let state = AppState::builder().config(config).bookshelf(shelf).build();
        assert_eq!(state.config().service.name, "built");
        assert_eq!(state.books().lock().await.len(), 1);
    }

    #[test]
    fn test_builder_defaults_to_empty_shelf() {
        let state = AppState::builder().config(Config::default()).build();
        assert!(state.books().try_lock().unwrap().is_empty());
    }
}
