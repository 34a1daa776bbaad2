pub mod api;
pub mod error;
pub mod input;
pub mod mutation;
pub mod query;
pub mod seed;
pub mod view;

pub use error::{EntityKind, StoreError};
