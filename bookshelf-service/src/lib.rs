//! # bookshelf-service
//!
//! A small REST service that keeps a collection of books in memory.
//!
//! ## Features
//!
//! - **Book collection**: create, list with filters, get, update and delete by id
//! - **Validation**: a name is required and `readPage` may not exceed `pageCount`
//! - **Middleware stack**: request ids, panic recovery, body size limit, compression, CORS
//! - **Configuration**: defaults, TOML files and `BOOKSHELF_` environment variables
//! - **Health checks**: liveness and readiness probes
//! - **Graceful shutdown**: SIGTERM and SIGINT drain in-flight requests
//!
//! ## Example
//!
//! ```rust,no_run
//! use bookshelf_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::builder().config(config.clone()).build();
//!     let app = build_router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod app;
pub mod books;
pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod observability;
pub mod responses;
pub mod server;
pub mod state;

/// Commonly used items
pub mod prelude {
    pub use crate::app::build_router;
    pub use crate::books::{
        Book, BookError, BookErrorKind, BookInput, BookOperation, BookSummary, Bookshelf,
        ListFilter, ListQuery,
    };
    pub use crate::config::{Config, MiddlewareConfig, ServiceConfig};
    pub use crate::error::{Error, Result};
    pub use crate::health::{health, readiness};
    pub use crate::ids::{BookId, RequestId};
    pub use crate::observability::{init_tracing, shutdown_tracing};
    pub use crate::responses::{Created, Fail, Success};
    pub use crate::server::Server;
    pub use crate::state::{AppState, AppStateBuilder};

    pub use axum::{
        extract::{Path, Query, State},
        routing::{delete, get, post, put},
        Json, Router,
    };
    pub use tracing::{debug, error, info, warn};
}
