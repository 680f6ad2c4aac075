use super::entry::{is_higher_priority, RouteEntry};
use super::pattern::{is_rule_segment, segments};

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;

pub(super) type LeafList<H> = Vec<Arc<RouteEntry<H>>>;

pub(super) type Candidates<'a, H> = SmallVec<[&'a [Arc<RouteEntry<H>>]; 8]>;

/// One level of the per-domain pattern tree, indexed by path segment.
///
/// Every `:name` and `*name` child shares the single `param` edge, so
/// `/u/:id` and `/u/:slug` lead to the same node.
#[derive(Debug)]
pub(super) struct Node<H> {
    statics: HashMap<Box<str>, Node<H>>,
    param: Option<Box<Node<H>>>,
    leaves: Option<LeafList<H>>,
}

impl<H> Node<H> {
    pub(super) fn new() -> Self {
        Self {
            statics: HashMap::new(),
            param: None,
            leaves: None,
        }
    }

    pub(super) fn insert(&mut self, entry: Arc<RouteEntry<H>>) {
        let mut node: &mut Node<H> = self;
        for segment in segments(entry.uri()) {
            node = if is_rule_segment(segment) {
                &mut **node.param.get_or_insert_with(|| Box::new(Node::new()))
            } else {
                node.statics.entry(segment.into()).or_insert_with(Node::new)
            };
        }

        let leaves = node.leaves.get_or_insert_with(Vec::new);
        let pos = leaves
            .iter()
            .position(|old| is_higher_priority(&entry, old))
            .unwrap_or(leaves.len());
        leaves.insert(pos, entry);
    }

    /// Leaf lists along the walk for `parts`, shallowest first.
    ///
    /// A literal edge is preferred; the param edge is the fallback. The walk
    /// stops at a node with neither.
    pub(super) fn candidates<'a>(&'a self, parts: &[&str]) -> Candidates<'a, H> {
        let mut lists: Candidates<'a, H> = SmallVec::new();
        let last = parts.len().saturating_sub(1);
        let mut node: &'a Node<H> = self;

        for (i, &part) in parts.iter().enumerate() {
            if let Some(leaves) = &node.leaves {
                lists.push(leaves.as_slice());
            }
            node = match node.statics.get(part).or_else(|| node.param.as_deref()) {
                Some(child) => child,
                None => break,
            };
            if i == last {
                if let Some(leaves) = &node.leaves {
                    lists.push(leaves.as_slice());
                }
            }
        }

        lists
    }
}
