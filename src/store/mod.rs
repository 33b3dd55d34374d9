//! Data access layer.
//!
//! One store per entity, each a thin `Clone`-able wrapper around the shared
//! connection pool. Stores are constructed once at startup and handed to the
//! handlers through `web::Data`.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
