//! Deterministic badge conflict resolution.

use showreel_core::Badge;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Resolve candidate badges into a deduplicated, ranked, ordered list.
///
/// Badges compete only within the same `group`; within a group the highest
/// `rank` survives. When two candidates in a group share the maximum rank
/// the first-seen candidate wins. That is deterministic for a given
/// candidate order, but candidate order across collectors reflects their
/// completion order, so cross-collector ties are not guaranteed stable
/// between runs.
///
/// Survivors are sorted by category priority (unknown categories last),
/// then by descending rank within a category. The sort is stable, so
/// first-seen order breaks any remaining ties.
///
/// # Examples
///
/// ```
/// use showreel_core::{Badge, BadgeCategory};
/// use showreel_pipeline::resolve_badges;
///
/// let resolved = resolve_badges(vec![
///     Badge::new("euro-ncap-4", BadgeCategory::Safety, "safety-rating", 40),
///     Badge::new("euro-ncap-5", BadgeCategory::Safety, "safety-rating", 50),
/// ]);
/// assert_eq!(resolved.len(), 1);
/// assert_eq!(resolved[0].id, "euro-ncap-5");
/// ```
pub fn resolve_badges(candidates: Vec<Badge>) -> Vec<Badge> {
    let mut group_order: Vec<String> = Vec::new();
    let mut survivors: HashMap<String, Badge> = HashMap::new();

    for badge in candidates {
        match survivors.get(&badge.group) {
            None => {
                group_order.push(badge.group.clone());
                survivors.insert(badge.group.clone(), badge);
            }
            // First-seen wins ties, so only a strictly higher rank replaces.
            Some(current) if badge.rank > current.rank => {
                survivors.insert(badge.group.clone(), badge);
            }
            Some(_) => {}
        }
    }

    let mut resolved: Vec<Badge> = group_order
        .into_iter()
        .filter_map(|group| survivors.remove(&group))
        .collect();
    resolved.sort_by_key(|badge| (badge.category.priority(), Reverse(badge.rank)));
    resolved
}
