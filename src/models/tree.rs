use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::Post;

/// A post and the replies attached to it
///
/// Children behave as an ordered map keyed by post id: ids are unique among siblings and
/// iteration follows attachment order. Equality compares ids and tree shape.
///
/// Dropping, comparing and serializing are all iterative, so a reply chain of any
/// length is handled without growing the call stack.
pub struct TreeNode {
    pub post: Post,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(post: Post) -> Self {
        Self { post, children: Vec::new() }
    }

    /// Assemble a node from children already known to have unique ids
    pub(crate) fn with_children(post: Post, children: Vec<TreeNode>) -> Self {
        Self { post, children }
    }

    pub fn id(&self) -> &str {
        &self.post.id
    }

    /// Attach a reply under this node
    ///
    /// A child with the same id is replaced in place and keeps its position.
    pub fn attach_child(&mut self, child: TreeNode) {
        match self.children.iter_mut().find(|c| c.id() == child.id()) {
            Some(existing) => *existing = child,
            None => self.children.push(child),
        }
    }

    pub fn child(&self, id: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.id() == id)
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(TreeNode::id)
    }

    pub fn len_children(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of posts below this node, excluding the node itself
    pub fn descendant_count(&self) -> usize {
        self.walk().count() - 1
    }

    /// Length of the longest reply chain below this node (0 for a leaf)
    pub fn depth(&self) -> usize {
        self.walk().map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Pre-order traversal yielding each node with its depth relative to `self`
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(0, self)] }
    }
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

impl PartialEq for TreeNode {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.walk();
        let mut right = other.walk();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some((ld, l)), Some((rd, r))) if ld == rd && l.post == r.post => {}
                _ => return false,
            }
        }
    }
}

impl Eq for TreeNode {}

impl fmt::Debug for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("post", &self.post)
            .field("children", &self.child_ids().collect::<Vec<_>>())
            .finish()
    }
}

/// One entry of the serialized form: posts in pre-order with their depth and child ids
#[derive(Serialize)]
struct FlatNode<'a> {
    depth: usize,
    post: &'a Post,
    children: Vec<&'a str>,
}

impl Serialize for TreeNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.walk().map(|(depth, node)| FlatNode {
            depth,
            post: &node.post,
            children: node.child_ids().collect(),
        }))
    }
}

/// Iterator returned by [`TreeNode::walk`]
///
/// Uses an explicit stack so arbitrarily long reply chains don't exhaust the call stack.
pub struct Walk<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}
