//! Arena-backed document tree with parent links.

use std::collections::HashSet;

use crate::error::{Error, Result};

use super::node::{Kind, Node, NodeId};

/// A document tree.
///
/// All nodes live in one arena (index 0 is always the root). Ownership flows
/// top-down through `children`; `parent` is a plain index back into the same
/// arena. Nodes are never freed: a node removed from its parent is simply
/// unreachable from the root and has its parent link cleared.
///
/// Every mutation keeps these invariants:
/// - a node appears in its parent's `children` exactly once
/// - `child.parent == Some(p)` iff `p.children` contains `child`
/// - children order is preserved except where the operation says otherwise
///
/// Traversals assume the tree is finite and acyclic. Mutations refuse to
/// create cycles, but trees imported from a parser are not checked.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    /// Bumped by every insertion or removal of a child.
    revision: u64,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(Kind::Article)
    }
}

impl Tree {
    /// Create a tree with a single root node of the given kind.
    pub fn new(root: Kind) -> Self {
        Self {
            nodes: vec![Node::new(root)],
            revision: 0,
        }
    }

    /// Create a tree from pre-built nodes.
    ///
    /// `nodes[0]` is the root. Parent links are taken as-is; run
    /// [`link_parents`](crate::normalize::link_parents) to derive them from
    /// `children`.
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes, revision: 0 }
    }

    /// Get the root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0 as usize)
    }

    /// Get a mutable node by ID.
    ///
    /// Changing `children` or `parent` through this reference bypasses the
    /// tree invariants; use the structural operations for that.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0 as usize)
    }

    /// Get a node, failing if the ID does not belong to this tree.
    pub fn get(&self, id: NodeId) -> Result<&Node> {
        self.node(id).ok_or(Error::UnknownNode(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.node_mut(id).ok_or(Error::UnknownNode(id))
    }

    /// Structural revision counter.
    ///
    /// Changes whenever a child is inserted or removed anywhere in the tree.
    /// Caption and kind edits do not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Get the number of allocated nodes (reachable or not).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocate a new detached node and return its ID.
    ///
    /// Structural fields are reset; attach children with
    /// [`append_child`](Self::append_child).
    pub fn alloc_node(&mut self, mut node: Node) -> NodeId {
        node.children.clear();
        node.parent = None;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Allocate a node and append it to `parent` in one step.
    pub fn push(&mut self, parent: NodeId, node: Node) -> Result<NodeId> {
        self.get(parent)?;
        let id = self.alloc_node(node);
        self.append_child(parent, id)?;
        Ok(id)
    }

    pub fn kind(&self, id: NodeId) -> Option<Kind> {
        self.node(id).map(|n| n.kind)
    }

    pub fn caption(&self, id: NodeId) -> &str {
        self.node(id).map(|n| n.caption.as_str()).unwrap_or("")
    }

    /// Children of a node (empty for unknown IDs).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`.
    ///
    /// The child is detached from its current parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.get(child)?;
        self.ensure_not_ancestor(child, parent)?;
        self.detach(child)?;
        let len = self.get(parent)?.children.len();
        self.insert_at(parent, len, child)
    }

    /// Remove `child` from `parent`, clearing its parent link.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.replace_child(parent, child, &[])
    }

    /// Replace `child` with `new_children`, spliced in order at its position.
    ///
    /// Each replacement is detached from its previous parent before being
    /// inserted, so splicing a node's own children into its place works.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        child: NodeId,
        new_children: &[NodeId],
    ) -> Result<()> {
        let mut index = self
            .index_in(parent, child)
            .ok_or(Error::NotAChild { parent, child })?;

        // Validate everything before touching the tree.
        let mut seen = HashSet::with_capacity(new_children.len());
        for &new_child in new_children {
            self.get(new_child)?;
            self.ensure_not_ancestor(new_child, parent)?;
            if !seen.insert(new_child) {
                return Err(Error::Integrity(format!(
                    "{new_child:?} appears twice in a replacement list"
                )));
            }
        }

        self.get_mut(parent)?.children.remove(index);
        self.get_mut(child)?.parent = None;
        self.revision += 1;

        for &new_child in new_children {
            if let Some((old_parent, old_index)) = self.detach(new_child)?
                && old_parent == parent
                && old_index < index
            {
                index -= 1;
            }
            self.insert_at(parent, index, new_child)?;
            index += 1;
        }
        Ok(())
    }

    /// Move `node` next to `target`: right after it, or right before it
    /// when `before` is set.
    ///
    /// Fails with [`Error::Detached`] if `target` has no parent.
    pub fn move_to(&mut self, node: NodeId, target: NodeId, before: bool) -> Result<()> {
        self.get(node)?;
        let parent = self.get(target)?.parent.ok_or(Error::Detached(target))?;
        if node == target {
            return Err(Error::Cycle { node, target });
        }
        self.ensure_not_ancestor(node, parent)?;

        self.detach(node)?;
        let index = self.index_in(parent, target).ok_or_else(|| {
            Error::Integrity(format!("{target:?} is not listed under its parent"))
        })?;
        let at = if before { index } else { index + 1 };
        self.insert_at(parent, at, node)
    }

    /// Unlink a node from its parent. Returns the old parent and position.
    fn detach(&mut self, id: NodeId) -> Result<Option<(NodeId, usize)>> {
        let Some(parent) = self.get(id)?.parent else {
            return Ok(None);
        };
        let index = self.index_in(parent, id).ok_or_else(|| {
            Error::Integrity(format!("{id:?} points at {parent:?} but is not its child"))
        })?;
        self.get_mut(parent)?.children.remove(index);
        self.get_mut(id)?.parent = None;
        self.revision += 1;
        Ok(Some((parent, index)))
    }

    /// Insert a detached node into `parent` at `index`.
    fn insert_at(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        self.get_mut(parent)?.children.insert(index, child);
        self.get_mut(child)?.parent = Some(parent);
        self.revision += 1;
        Ok(())
    }

    /// Fail if placing `node` under `parent` would create a cycle.
    fn ensure_not_ancestor(&self, node: NodeId, parent: NodeId) -> Result<()> {
        if node == NodeId::ROOT {
            return Err(Error::RootMove);
        }
        let mut current = Some(parent);
        while let Some(id) = current {
            if id == node {
                return Err(Error::Cycle {
                    node,
                    target: parent,
                });
            }
            current = self.get(id)?.parent;
        }
        Ok(())
    }

    fn index_in(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.node(parent)?.children.iter().position(|&c| c == child)
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// All ancestors, from the root down to the direct parent.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.parent(id);
        while let Some(p) = current {
            out.push(p);
            current = self.parent(p);
        }
        out.reverse();
        out
    }

    /// All children of this node's parent, including the node itself.
    fn all_siblings(&self, id: NodeId) -> &[NodeId] {
        self.parent(id).map(|p| self.children(p)).unwrap_or(&[])
    }

    /// Siblings of a node, excluding the node itself.
    pub fn siblings(&self, id: NodeId) -> Vec<NodeId> {
        self.all_siblings(id)
            .iter()
            .copied()
            .filter(|&s| s != id)
            .collect()
    }

    /// Previous sibling. `None` for the first child and for detached nodes.
    pub fn previous(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.all_siblings(id);
        let index = siblings.iter().position(|&s| s == id)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    /// Next sibling. `None` for the last child and for detached nodes.
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.all_siblings(id);
        let index = siblings.iter().position(|&s| s == id)?;
        siblings.get(index + 1).copied()
    }

    pub fn first_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.all_siblings(id).first().copied()
    }

    pub fn last_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.all_siblings(id).last().copied()
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Iterate over all descendants in pre-order, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> DfsIter<'_> {
        let mut stack: Vec<NodeId> = self.children(id).to_vec();
        stack.reverse();
        DfsIter { tree: self, stack }
    }

    /// Iterate over every reachable node in pre-order, starting at the root.
    pub fn iter_dfs(&self) -> DfsIter<'_> {
        DfsIter {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    pub fn ancestors_of_kind(&self, id: NodeId, kind: Kind) -> Vec<NodeId> {
        self.ancestors(id)
            .into_iter()
            .filter(|&a| self.kind(a) == Some(kind))
            .collect()
    }

    pub fn descendants_of_kind(&self, id: NodeId, kind: Kind) -> Vec<NodeId> {
        self.descendants(id)
            .filter(|&d| self.kind(d) == Some(kind))
            .collect()
    }

    pub fn has_ancestor_of_kind(&self, id: NodeId, kind: Kind) -> bool {
        let mut current = self.parent(id);
        while let Some(p) = current {
            if self.kind(p) == Some(kind) {
                return true;
            }
            current = self.parent(p);
        }
        false
    }

    /// Number of ancestors sharing this node's kind.
    pub fn level(&self, id: NodeId) -> usize {
        match self.kind(id) {
            Some(kind) => self.ancestors_of_kind(id, kind).len(),
            None => 0,
        }
    }

    /// Nesting depth of a section: 1 for a top-level section.
    pub fn section_level(&self, id: NodeId) -> usize {
        1 + self.level(id)
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Verify parent/child consistency over the whole arena.
    ///
    /// Detached nodes are included: their children must still point at them,
    /// and no live node may point at a parent that does not list it.
    pub fn check_integrity(&self) -> Result<()> {
        if let Some(parent) = self.parent(NodeId::ROOT) {
            return Err(Error::Integrity(format!("root has parent {parent:?}")));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            let id = NodeId(index as u32);
            for &child in &node.children {
                let child_node = self.get(child)?;
                if child_node.parent != Some(id) {
                    return Err(Error::Integrity(format!(
                        "{child:?} is listed under {id:?} but points at {:?}",
                        child_node.parent
                    )));
                }
            }
            if let Some(parent) = node.parent {
                let count = self
                    .get(parent)?
                    .children
                    .iter()
                    .filter(|&&c| c == id)
                    .count();
                if count != 1 {
                    return Err(Error::Integrity(format!(
                        "{id:?} appears {count} times under its parent {parent:?}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Render the reachable tree as an indented outline, one node per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(NodeId::ROOT, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        out.push_str(&" ".repeat(depth * 2));
        out.push_str(&format!("{:?}", node.kind));
        if let Some(level) = node.heading_level {
            out.push_str(&format!(" h{level}"));
        }
        if !node.caption.is_empty() {
            out.push_str(&format!(" {:?}", node.caption));
        }
        out.push('\n');
        for &child in &node.children {
            self.dump_node(child, depth + 1, out);
        }
    }
}

/// Pre-order iterator over tree nodes.
pub struct DfsIter<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order so they're visited left-to-right
        self.stack
            .extend(self.tree.children(current).iter().rev().copied());
        Some(current)
    }
}
