//! Elsewherr - streaming availability tags for Radarr
//!
//! Looks up where each Radarr movie can be streamed (TMDB watch providers) and
//! keeps a set of prefixed Radarr tags, one per configured provider, in step
//! with that availability.

pub mod arr;
pub mod config;
pub mod error;
pub mod metadata;
pub mod sync;
pub mod tags;

pub use error::{Error, Result};
