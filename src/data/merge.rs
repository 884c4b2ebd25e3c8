//! Recursive left-biased tree merge.
//!
//! Trees are merged most-generic first (`root`, then `en`, then `en_GB`):
//! every key in the more specific tree overrides, recursively when both
//! sides are branches; keys only present in the generic tree survive. The
//! fold is associative, so `[A, B, C]` and `(A ⊕ B) ⊕ C` agree.

use super::node::LocaleNode;

/// Merge `overlay` over `base`, consuming `base`.
pub fn merge(mut base: LocaleNode, overlay: &LocaleNode) -> LocaleNode {
    merge_into(&mut base, overlay);
    base
}

/// Left-fold an ordered list of trees, most generic first.
pub fn merge_all(trees: impl IntoIterator<Item = LocaleNode>) -> LocaleNode {
    let mut trees = trees.into_iter();
    let Some(mut merged) = trees.next() else {
        return LocaleNode::branch();
    };
    for tree in trees {
        merge_into(&mut merged, &tree);
    }
    merged
}

pub(crate) fn merge_into(base: &mut LocaleNode, overlay: &LocaleNode) {
    match (base, overlay) {
        (LocaleNode::Branch(base), LocaleNode::Branch(overlay)) => {
            for (key, value) in overlay.iter() {
                match base.get_mut(key) {
                    Some(existing) => merge_into(existing, value),
                    None => base.insert(key.clone(), value.clone()),
                }
            }
        }
        // Leaf on either side: the more specific tree wins outright.
        (base, overlay) => *base = overlay.clone(),
    }
}
