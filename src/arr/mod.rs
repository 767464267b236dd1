//! Radarr API access.

mod client;
mod types;

pub use client::{MovieCatalog, RadarrClient};
pub use types::{Movie, NewTag, Tag};
