use crate::arr::{MovieCatalog, Tag};
use crate::tags::label::{canonical_label, normalize};
use crate::tags::reconcile::reconcile;
use tracing::{debug, warn};

/// Radarr tags classified against the configured prefix and provider list.
///
/// Built once per run from the full tag list and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ProviderTagRegistry {
    prefix: String,
    to_remove: Vec<Tag>,
    to_add: Vec<Tag>,
}

impl ProviderTagRegistry {
    /// Classify `existing` tags.
    ///
    /// A tag is managed (and so removed from every movie before re-adding) if
    /// its label contains the lowercased prefix anywhere. It is addable if its
    /// label, with the prefix taken out, is exactly one of the normalized
    /// required providers.
    ///
    /// Both checks are substring based: a hand-made tag such as
    /// `my_elsewherr_list` counts as managed under prefix `elsewherr_`.
    pub fn new(prefix: &str, required_providers: &[String], existing: &[Tag]) -> Self {
        let prefix_lower = prefix.to_lowercase();
        let required: Vec<String> = required_providers.iter().map(|p| normalize(p)).collect();
        debug!(?required, "Normalized required providers");

        let mut to_remove = Vec::new();
        let mut to_add = Vec::new();

        for tag in existing {
            if tag.label.contains(&prefix_lower) {
                debug!(id = tag.id, label = %tag.label, "Managed tag, will be removed from movies");
                to_remove.push(tag.clone());
            }
            let stripped = tag.label.replace(&prefix_lower, "");
            if required.contains(&stripped) {
                debug!(id = tag.id, label = %tag.label, "Required provider tag, can be added to movies");
                to_add.push(tag.clone());
            }
        }

        Self {
            prefix: prefix.to_string(),
            to_remove,
            to_add,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Tags removed from every movie before availability is applied
    pub fn to_remove(&self) -> &[Tag] {
        &self.to_remove
    }

    /// Tags that may be added back when a provider is available
    pub fn to_add(&self) -> &[Tag] {
        &self.to_add
    }

    /// New tag list for a movie currently tagged `current` and streamable on
    /// `available_providers`.
    pub fn reconcile(&self, current: &[i64], available_providers: &[String]) -> Vec<i64> {
        reconcile(
            current,
            &self.to_remove,
            &self.to_add,
            available_providers,
            &self.prefix,
        )
    }
}

/// Create one Radarr tag per required provider.
///
/// Radarr rejects labels it already has, so this is safe to run every time.
/// Failures are logged and skipped. Returns the number of tags created.
pub async fn ensure_provider_tags(
    catalog: &dyn MovieCatalog,
    prefix: &str,
    required_providers: &[String],
) -> usize {
    let mut created = 0;

    for provider in required_providers {
        let label = canonical_label(prefix, provider);
        match catalog.create_tag(&label).await {
            Ok(tag) => {
                debug!(id = tag.id, label = %tag.label, "Created provider tag");
                created += 1;
            }
            Err(e) => {
                warn!(label = %label, "Could not create provider tag: {}", e);
            }
        }
    }

    created
}
