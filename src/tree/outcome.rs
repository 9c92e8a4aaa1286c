use serde::Serialize;

use crate::models::TreeNode;

/// A successfully rebuilt thread
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ThreadTree {
    /// The smallest-id post of the archive with every reply reachable from it
    pub root: TreeNode,
    /// Posts whose parent could not be resolved, in id order, each with any replies that
    /// were attached to it. None of these are reachable from `root`.
    pub orphans: Vec<TreeNode>,
}

impl ThreadTree {
    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    pub fn orphan_ids(&self) -> impl Iterator<Item = &str> {
        self.orphans.iter().map(TreeNode::id)
    }

    /// Replies hanging below orphans; hidden along with them but not orphans themselves
    pub fn detached_reply_count(&self) -> usize {
        self.orphans.iter().map(TreeNode::descendant_count).sum()
    }

    /// Number of posts shown in the tree, root included
    pub fn post_count(&self) -> usize {
        self.root.descendant_count() + 1
    }

    /// User-facing notice about hidden posts, `None` when every post was connected
    pub fn orphan_notice(&self) -> Option<String> {
        match self.orphan_count() {
            0 => None,
            1 => Some(
                "A post from the archive could not be shown because it is not connected to the \
                 root post. This can happen when a post in its reply chain has been deleted or \
                 made private."
                    .to_string(),
            ),
            n => Some(format!(
                "{} posts from the archive could not be shown because they are not connected to \
                 the root post. This can happen when posts in their reply chain have been deleted \
                 or made private.",
                n
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Post;

    fn node(id: &str) -> TreeNode {
        TreeNode::new(Post {
            id: id.to_string(),
            parent_id: None,
            author_avatar_url: String::new(),
            author_display_name: String::new(),
            author_handle: String::new(),
            body_html: String::new(),
            body_text: String::new(),
            reply_count: 0,
            timestamp: None,
        })
    }

    fn thread(orphans: Vec<TreeNode>) -> ThreadTree {
        ThreadTree { root: node("1"), orphans }
    }

    #[test]
    fn test_no_orphans_no_notice() {
        let t = thread(vec![]);
        assert_eq!(t.orphan_count(), 0);
        assert!(t.orphan_notice().is_none());
        assert_eq!(t.post_count(), 1);
    }

    #[test]
    fn test_single_orphan_singular_notice() {
        let notice = thread(vec![node("5")]).orphan_notice().unwrap();
        assert!(notice.starts_with("A post from the archive could not be shown"));
        assert!(notice.contains("a post in its reply chain"));
    }

    #[test]
    fn test_multiple_orphans_plural_notice() {
        let t = thread(vec![node("5"), node("6"), node("7")]);
        let notice = t.orphan_notice().unwrap();
        assert!(notice.starts_with("3 posts from the archive could not be shown"));
        assert!(notice.contains("posts in their reply chain"));
        assert_eq!(t.orphan_ids().collect::<Vec<_>>(), vec!["5", "6", "7"]);
    }

    #[test]
    fn test_detached_replies_are_counted_separately() {
        let mut orphan = node("5");
        orphan.attach_child(node("8"));
        let t = thread(vec![orphan, node("6")]);

        assert_eq!(t.orphan_count(), 2);
        assert_eq!(t.detached_reply_count(), 1);
    }
}
