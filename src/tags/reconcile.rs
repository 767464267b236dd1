use crate::arr::Tag;
use crate::tags::label::canonical_label;
use tracing::{debug, info};

/// Compute a movie's tag list from its current tags and the providers it is
/// available on.
///
/// Every id in `to_remove` is dropped (ids the movie doesn't carry are simply
/// skipped). Then, for each available provider, every tag in `to_add` whose
/// label contains the provider's canonical label is appended. The result has
/// no duplicate ids; the first occurrence keeps its position.
///
/// Tags not managed by elsewherr keep their relative order.
pub fn reconcile(
    current: &[i64],
    to_remove: &[Tag],
    to_add: &[Tag],
    available_providers: &[String],
    prefix: &str,
) -> Vec<i64> {
    let mut tags: Vec<i64> = current
        .iter()
        .copied()
        .filter(|id| !to_remove.iter().any(|tag| tag.id == *id))
        .collect();

    for provider in available_providers {
        let wanted = canonical_label(prefix, provider);
        for tag in to_add.iter().filter(|tag| tag.label.contains(&wanted)) {
            info!("Adding tag {}", wanted);
            tags.push(tag.id);
        }
    }

    let before = tags.len();
    dedup_preserving_order(&mut tags);
    if tags.len() != before {
        debug!(dropped = before - tags.len(), "Removed duplicate tag ids");
    }

    tags
}

fn dedup_preserving_order(ids: &mut Vec<i64>) {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(*id));
}
