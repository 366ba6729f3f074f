//! Cascade closure, promotion and minimal cover.

use crate::index::{IndexedForest, NodeId};

use super::checked::CheckedSet;

/// Add every strict descendant of `id` to `set`, in preorder.
pub(super) fn close_downward(forest: &IndexedForest, id: NodeId, set: &mut CheckedSet) {
    set.extend(forest.descendants(id).map(|d| forest[d].value.as_str()));
}

/// Promote parents whose children are all present, until nothing changes.
///
/// Each pass scans the members present when the pass starts; parents added
/// during a pass are themselves scanned on the next one, which carries the
/// promotion up the ancestor chain. The set only grows and is bounded by the
/// node count, so this terminates.
///
/// A promotion climbs at most one level per pass over the whole set, so the
/// cost is O(depth × |set|) on a chain. Scanning members appended during the
/// pass would be linear but reorders the emitted values (see
/// `test_promote_order_follows_passes`).
pub(super) fn promote(forest: &IndexedForest, set: &mut CheckedSet) {
    let mut pass = 0usize;
    loop {
        pass += 1;
        let mut added = 0usize;
        let len = set.len();
        for i in 0..len {
            let Some(parent) = set
                .get(i)
                .and_then(|value| forest.get(value))
                .and_then(|id| forest.parent(id))
            else {
                continue;
            };
            let parent = &forest[parent];
            if set.contains(&parent.value) {
                continue;
            }
            if parent.children_value.iter().all(|c| set.contains(c)) {
                set.insert(&parent.value);
                added += 1;
            }
        }
        log::trace!("Promotion pass {}: {} parents added", pass, added);
        if added == 0 {
            break;
        }
    }
}

/// Remove from `set` every value covered by a strict ancestor.
///
/// Values that name no node in the forest have no ancestors and are kept.
pub(super) fn minimal_cover(forest: &IndexedForest, set: &CheckedSet) -> Vec<String> {
    set.iter()
        .filter(|value| match forest.get(value) {
            Some(id) => !forest
                .ancestors(id)
                .any(|a| set.contains(&forest[a].value)),
            None => true,
        })
        .map(String::from)
        .collect()
}
