//! Products domain module.
//!
//! The single resource this server manages.
//!
//! ## Architecture
//!
//! - `schema.rs` - Create and Full product shapes plus reply helpers
//! - `repository.rs` - Storage capability trait
//! - `sql.rs` / `memory.rs` - Repository implementations
//! - `service.rs` - The five product operations, shared by every transport
//! - `seed.rs` - Startup seeding of an empty store
//! - `endpoints.rs` - REST routes (http feature)

mod error;
mod memory;
mod repository;
mod schema;
mod seed;
mod service;
mod sql;

#[cfg(feature = "http")]
pub mod endpoints;

pub use error::{ProductError, ProductResult};
pub use memory::InMemoryProductRepository;
pub use repository::ProductRepository;
pub use schema::{NOT_FOUND_MESSAGE, Product, ProductCreate, UpdateReply, deleted_message};
pub use seed::{seed_catalog, seed_if_empty};
pub use service::ProductService;
pub use sql::SqlProductRepository;
