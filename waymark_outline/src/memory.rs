// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document tree implementing [`HeadingSource`].
//!
//! Nodes are stored in insertion order and that order is treated as document
//! order, so build parents before children and siblings first to last. Each node
//! carries document-space bounds so scroll hosts can derive viewport positions.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::ids::IdSet;
use crate::types::{HeadingLevels, HeadingSource};

/// Width given to nodes built by the convenience constructors.
const NODE_WIDTH: f64 = 720.0;
/// Height given to nodes built by the convenience constructors.
const NODE_HEIGHT: f64 = 40.0;

/// Handle of a node in a [`MemoryDocument`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(u32);

impl NodeKey {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// One element of a [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryNode {
    /// Lower-case tag name.
    pub tag: String,
    /// `id` attribute, if any.
    pub id: Option<String>,
    /// Text content.
    pub text: String,
    /// Parent element; `None` for top-level nodes.
    pub parent: Option<NodeKey>,
    /// Document-space bounds (`y0` is the distance from the top of the page).
    pub bounds: Rect,
    removed: bool,
}

/// A small element tree standing in for a rendered page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryDocument {
    nodes: Vec<MemoryNode>,
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element and return its handle.
    pub fn insert(
        &mut self,
        parent: Option<NodeKey>,
        tag: &str,
        text: &str,
        bounds: Rect,
    ) -> NodeKey {
        let key = NodeKey(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(MemoryNode {
            tag: tag.to_ascii_lowercase(),
            id: None,
            text: String::from(text),
            parent,
            bounds,
            removed: false,
        });
        key
    }

    /// Insert a top-level `div` whose id is `marker`.
    pub fn container(&mut self, marker: &str) -> NodeKey {
        let key = self.insert(None, "div", "", Rect::ZERO);
        self.set_id(key, marker);
        key
    }

    /// Insert a child element whose top edge sits `top` pixels down the page.
    pub fn element(&mut self, parent: NodeKey, tag: &str, text: &str, top: f64) -> NodeKey {
        self.insert(Some(parent), tag, text, block_at(top))
    }

    /// Insert an `h{level}` heading whose top edge sits `top` pixels down the page.
    pub fn heading(&mut self, parent: NodeKey, level: u8, text: &str, top: f64) -> NodeKey {
        self.insert(Some(parent), &format!("h{level}"), text, block_at(top))
    }

    /// Set (or replace) the id attribute of a node.
    pub fn set_id(&mut self, key: NodeKey, id: &str) {
        if let Some(node) = self.nodes.get_mut(key.idx()) {
            node.id = Some(String::from(id));
        }
    }

    /// Move a node to a new document-space top.
    pub fn set_top(&mut self, key: NodeKey, top: f64) {
        if let Some(node) = self.nodes.get_mut(key.idx()) {
            node.bounds = Rect::new(node.bounds.x0, top, node.bounds.x1, top + node.bounds.height());
        }
    }

    /// Detach a node (and implicitly its subtree) from the document.
    pub fn remove(&mut self, key: NodeKey) {
        if let Some(node) = self.nodes.get_mut(key.idx()) {
            node.removed = true;
        }
    }

    /// Look up a node that is still attached.
    pub fn node(&self, key: NodeKey) -> Option<&MemoryNode> {
        self.is_attached(key).then(|| &self.nodes[key.idx()])
    }

    /// Whether the node and all its ancestors are attached.
    pub fn is_attached(&self, key: NodeKey) -> bool {
        let mut cursor = Some(key);
        while let Some(k) = cursor {
            match self.nodes.get(k.idx()) {
                Some(node) if !node.removed => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// First attached node carrying `id`, in document order.
    pub fn find_by_id(&self, id: &str) -> Option<NodeKey> {
        self.keys()
            .find(|&k| self.nodes[k.idx()].id.as_deref() == Some(id) && self.is_attached(k))
    }

    /// Document-space bounds of an attached node.
    pub fn bounds(&self, key: NodeKey) -> Option<Rect> {
        self.node(key).map(|n| n.bounds)
    }

    /// Document-space bottom edge of the lowest attached node.
    pub fn content_height(&self) -> f64 {
        self.keys()
            .filter(|&k| self.is_attached(k))
            .map(|k| self.nodes[k.idx()].bounds.y1)
            .fold(0.0, f64::max)
    }

    /// Number of nodes ever inserted, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        (0..self.nodes.len()).map(|i| NodeKey(u32::try_from(i).unwrap_or(u32::MAX)))
    }

    fn is_descendant(&self, key: NodeKey, ancestor: NodeKey) -> bool {
        let mut cursor = self.nodes.get(key.idx()).and_then(|n| n.parent);
        while let Some(k) = cursor {
            if k == ancestor {
                return true;
            }
            cursor = self.nodes.get(k.idx()).and_then(|n| n.parent);
        }
        false
    }
}

fn block_at(top: f64) -> Rect {
    Rect::new(0.0, top, NODE_WIDTH, top + NODE_HEIGHT)
}

impl HeadingSource for MemoryDocument {
    type Heading = NodeKey;
    type Container = NodeKey;

    fn find_container(&self, marker: &str) -> Option<NodeKey> {
        self.find_by_id(marker)
    }

    fn locate_headings(&self, container: &NodeKey, levels: HeadingLevels) -> Vec<NodeKey> {
        self.keys()
            .filter(|&k| {
                levels.matches_tag(&self.nodes[k.idx()].tag)
                    && self.is_descendant(k, *container)
                    && self.is_attached(k)
            })
            .collect()
    }

    fn read_text(&self, heading: &NodeKey) -> String {
        self.nodes
            .get(heading.idx())
            .map(|n| String::from(n.text.trim()))
            .unwrap_or_default()
    }

    fn read_id(&self, heading: &NodeKey) -> Option<String> {
        self.nodes
            .get(heading.idx())
            .and_then(|n| n.id.clone())
            .filter(|id| !id.is_empty())
    }

    fn assign_id(&mut self, heading: &NodeKey, id: &str) {
        self.set_id(*heading, id);
    }

    fn document_ids(&self) -> IdSet {
        self.keys()
            .filter(|&k| self.is_attached(k))
            .filter_map(|k| self.nodes[k.idx()].id.clone())
            .filter(|id| !id.is_empty())
            .collect()
    }
}
