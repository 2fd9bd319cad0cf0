pub mod client;
pub mod model;
pub mod query;

pub use client::{Perspective, StoreClient};
pub use model::{Post, PostSummary, Slug};
