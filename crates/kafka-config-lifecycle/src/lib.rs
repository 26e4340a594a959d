//! Lifecycle tracking for open Kafka client handles.
//!
//! Client factories register every handle they construct with a
//! [`ClientRegistry`]; the application's shutdown hook calls
//! [`ClientRegistry::close_all`] once, which closes every tracked handle
//! in a fixed kind order (producers, consumers, admin clients) while
//! tolerating partial failures.
//!
//! The registry is plain state, not a global: create one at the
//! composition root, share it behind an `Arc`, and pass it wherever
//! clients are constructed.
//!
//! ## Example
//!
//! ```rust
//! use kafka_config_lifecycle::{ClientKind, ClientRegistry, ManagedClient};
//! use std::sync::Arc;
//!
//! struct Producer;
//!
//! impl ManagedClient for Producer {
//!     fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!         Ok(())
//!     }
//! }
//!
//! let registry = Arc::new(ClientRegistry::new());
//! registry.register(ClientKind::Producer, Arc::new(Producer));
//!
//! // later, from the shutdown hook:
//! registry.close_all().expect("all clients closed");
//! assert!(registry.is_empty());
//! ```

mod error;
mod registry;

pub use error::{CloseFailure, ShutdownError};
pub use registry::{ClientKind, ClientRegistry, ManagedClient};
