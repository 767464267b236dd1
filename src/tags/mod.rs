//! Provider tag naming, classification and per-movie reconciliation.
//!
//! A provider tag is a Radarr tag whose label is the configured prefix
//! followed by a normalized provider name, e.g. `elsewherr_netflix`.
//! [`ProviderTagRegistry`] sorts the existing Radarr tags into those elsewherr
//! owns and those it may assign, and [`reconcile`] applies them to a movie.

mod label;
mod reconcile;
mod registry;

pub use label::{canonical_label, normalize};
pub use reconcile::reconcile;
pub use registry::{ensure_provider_tags, ProviderTagRegistry};
