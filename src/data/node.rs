//! Locale-data tree nodes.
//!
//! A parsed locale source is a tree of [`LocaleNode`]s: leaves carry text,
//! branches carry an *ordered* list of uniquely-keyed children. Keys may
//! embed attributes in the composite form `name[@attr="value"]`; they are
//! parsed once into a [`NodeKey`] at tree construction, never re-parsed on
//! lookup.

use std::fmt;

/// A branch key, parsed from its composite `name[@attr="value"]` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey {
    name: String,
    attributes: Vec<(String, String)>,
}

impl NodeKey {
    /// A plain key with no attributes.
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), attributes: Vec::new() }
    }

    /// Parse a composite key. Attribute clauses that do not scan are dropped;
    /// the part before the first `[` is always the name.
    pub fn parse(raw: &str) -> Self {
        let (name, rest) = match raw.find('[') {
            Some(at) => (&raw[..at], &raw[at..]),
            None => (raw, ""),
        };
        let attributes = regex!(r#"\[@([^=\]]+)="([^"]*)"\]"#)
            .captures_iter(rest)
            .map(|caps| (caps[1].to_string(), caps[2].to_string()))
            .collect();
        Self { name: name.to_string(), attributes }
    }

    /// Add one attribute (builder style, used heavily by fixtures).
    pub fn with_attr(mut self, attr: &str, value: &str) -> Self {
        self.attributes.push((attr.to_string(), value.to_string()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(attr, _)| attr == name).map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Does `segment` address this key? Composite equality when the key has
    /// attributes, bare-name equality otherwise.
    pub(crate) fn matches_composite(&self, segment: &str) -> bool {
        if self.attributes.is_empty() {
            self.name == segment
        } else {
            segment.starts_with(self.name.as_str()) && self.to_string() == segment
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (attr, value) in &self.attributes {
            write!(f, "[@{attr}=\"{value}\"]")?;
        }
        Ok(())
    }
}

/// One node of a locale-data tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleNode {
    Leaf(String),
    Branch(Branch),
}

impl LocaleNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        LocaleNode::Leaf(text.into())
    }

    /// An empty branch.
    pub fn branch() -> Self {
        LocaleNode::Branch(Branch::default())
    }

    /// Leaf text, `None` for branches.
    pub fn text(&self) -> Option<&str> {
        match self {
            LocaleNode::Leaf(text) => Some(text),
            LocaleNode::Branch(_) => None,
        }
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            LocaleNode::Branch(branch) => Some(branch),
            LocaleNode::Leaf(_) => None,
        }
    }

    pub fn as_branch_mut(&mut self) -> Option<&mut Branch> {
        match self {
            LocaleNode::Branch(branch) => Some(branch),
            LocaleNode::Leaf(_) => None,
        }
    }

    /// Child addressed by one path segment; `None` on leaves and misses.
    pub fn child(&self, segment: &str) -> Option<&LocaleNode> {
        self.as_branch()?.child(segment)
    }
}

/// Ordered, uniquely-keyed children of a branch node.
///
/// Iteration order is insertion order and is significant: merge preserves it
/// and alias grafting lets first-listed entries win. Branches are small (CLDR
/// fan-out), so a flat pair vector beats a map here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    entries: Vec<(NodeKey, LocaleNode)>,
}

impl Branch {
    /// Insert or replace. Replacement keeps the key's original position.
    pub fn insert(&mut self, key: NodeKey, node: LocaleNode) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((key, node)),
        }
    }

    pub fn get(&self, key: &NodeKey) -> Option<&LocaleNode> {
        self.entries.iter().find(|(existing, _)| existing == key).map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, key: &NodeKey) -> Option<&mut LocaleNode> {
        self.entries.iter_mut().find(|(existing, _)| existing == key).map(|(_, node)| node)
    }

    /// Child addressed by a path segment: exact composite match first, then
    /// the first entry (insertion order) whose bare name matches.
    pub fn child(&self, segment: &str) -> Option<&LocaleNode> {
        self.entries
            .iter()
            .find(|(key, _)| key.matches_composite(segment))
            .or_else(|| self.entries.iter().find(|(key, _)| key.name() == segment))
            .map(|(_, node)| node)
    }

    pub fn child_mut(&mut self, segment: &str) -> Option<&mut LocaleNode> {
        let at = self
            .entries
            .iter()
            .position(|(key, _)| key.matches_composite(segment))
            .or_else(|| self.entries.iter().position(|(key, _)| key.name() == segment))?;
        Some(&mut self.entries[at].1)
    }

    /// Remove the first entry with the given bare name.
    pub fn remove_named(&mut self, name: &str) -> Option<(NodeKey, LocaleNode)> {
        let at = self.entries.iter().position(|(key, _)| key.name() == name)?;
        Some(self.entries.remove(at))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NodeKey, LocaleNode)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
