//! Alias resolution.
//!
//! An `alias` child redirects a branch to data living elsewhere in the same
//! merged tree:
//!
//! ```text
//! months
//! ├── format
//! │   └── wide ...
//! └── stand-alone
//!     └── alias[@source="locale"][@path="../format"]
//! ```
//!
//! Resolution is a single top-down pass over the merged tree. At each branch
//! the `alias` key is unset; when its `source` attribute is the literal
//! `locale`, the `path` attribute (leading `../` segments walk up from the
//! branch, the rest descends) is looked up in the *partially resolved* tree
//! and the target branch is grafted in with existing keys winning. A missing
//! or non-branch target is a silent no-op.
//!
//! The pass drives an explicit path agenda and re-borrows the root for each
//! step instead of mutating the tree while iterating it, so grafted children
//! are themselves visited and nested aliases resolve in document order.

use super::node::{Branch, LocaleNode};

pub fn resolve_aliases(root: &mut LocaleNode) {
    let debug = std::env::var_os("GLOTTA_DEBUG_DATA").is_some();

    let mut agenda: Vec<Vec<String>> = vec![Vec::new()];
    while let Some(path) = agenda.pop() {
        let redirect = match branch_at_mut(root, &path) {
            Some(branch) => take_alias(branch),
            None => continue,
        };

        if let Some(relative) = redirect {
            if let Some(target) = target_path(&path, &relative) {
                if debug {
                    eprintln!("[alias] {} -> {}", path.join("/"), target.join("/"));
                }
                let grafted = node_at(root, &target).cloned();
                if let Some(LocaleNode::Branch(source)) = grafted {
                    if let Some(branch) = branch_at_mut(root, &path) {
                        graft(branch, &source);
                    }
                }
            }
        }

        // Children are listed after grafting so aliased-in subtrees are
        // visited too. Reverse push keeps document order on the stack.
        if let Some(LocaleNode::Branch(branch)) = node_at(root, &path) {
            let children: Vec<Vec<String>> = branch
                .iter()
                .filter(|(_, node)| matches!(node, LocaleNode::Branch(_)))
                .map(|(key, _)| {
                    let mut child = path.clone();
                    child.push(key.to_string());
                    child
                })
                .collect();
            for child in children.into_iter().rev() {
                agenda.push(child);
            }
        }
    }
}

/// Unset the branch's `alias` key. Returns the redirect path when the alias
/// is live (`source="locale"`); an alias with any other source is removed
/// but performs no redirection.
fn take_alias(branch: &mut Branch) -> Option<String> {
    let has_alias = branch.iter().any(|(key, _)| key.name() == "alias");
    if !has_alias {
        return None;
    }
    let (key, _) = branch.remove_named("alias")?;
    if key.attr("source") != Some("locale") {
        return None;
    }
    key.attr("path").map(str::to_string)
}

/// Absolute target path: strip one level off `base` per leading `../`, then
/// descend into the remaining segments. `None` when the path climbs past the
/// root.
fn target_path(base: &[String], relative: &str) -> Option<Vec<String>> {
    let mut rest = relative;
    let mut ups = 0usize;
    while let Some(stripped) = rest.strip_prefix("../") {
        ups += 1;
        rest = stripped;
    }
    if ups > base.len() {
        return None;
    }

    let mut target: Vec<String> = base[..base.len() - ups].to_vec();
    target.extend(rest.split('/').filter(|segment| !segment.is_empty()).map(str::to_string));
    Some(target)
}

/// Copy `source` entries into `dst`; existing keys win, recursively.
fn graft(dst: &mut Branch, source: &Branch) {
    for (key, value) in source.iter() {
        match dst.get_mut(key) {
            None => dst.insert(key.clone(), value.clone()),
            Some(LocaleNode::Branch(existing)) => {
                if let LocaleNode::Branch(inner) = value {
                    graft(existing, inner);
                }
            }
            // Existing leaf beats the aliased value.
            Some(LocaleNode::Leaf(_)) => {}
        }
    }
}

pub(crate) fn node_at<'a>(root: &'a LocaleNode, path: &[String]) -> Option<&'a LocaleNode> {
    let mut current = root;
    for segment in path {
        current = current.child(segment)?;
    }
    Some(current)
}

fn branch_at_mut<'a>(root: &'a mut LocaleNode, path: &[String]) -> Option<&'a mut Branch> {
    let mut current = root;
    for segment in path {
        current = current.as_branch_mut()?.child_mut(segment)?;
    }
    current.as_branch_mut()
}
