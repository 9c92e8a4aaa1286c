//! Tree builder for archived reply threads.
//!
//! # Algorithm
//!
//! 1. Records are stably sorted by numeric id (`id_str`, falling back to `id`); records
//!    without a numeric id sort last. The smallest id becomes the root regardless of its
//!    own parent reference.
//! 2. A single pass parses each record and resolves its parent among posts seen so far.
//!    Because posts are registered in id order, a reply whose parent has a larger id can
//!    never resolve and is counted as an orphan. A post is looked up before it registers
//!    itself, so a self-reply is an orphan as well.
//! 3. Posts live in an arena local to the call; the owned tree is assembled afterwards
//!    in reverse arena order, which visits every child before its parent.
//!
//! The first record that fails to parse aborts the build. No partial tree is returned.

use std::collections::HashMap;

use serde_json::Value;

use crate::errors::ArchiveError;
use crate::models::{Post, TreeNode};
use crate::parsers::parse_record;
use crate::parsers::record::numeric_id;
use crate::tree::ThreadTree;

struct Slot {
    post: Post,
    children: Vec<usize>,
}

/// Build a reply tree from every record of an archive
///
/// Returns `Ok(None)` for an empty archive.
///
/// # Errors
///
/// Returns [`ArchiveError::MissingField`] for the first record (in id order) that lacks a
/// required field.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use thread_archive::build_tree;
///
/// let user = json!({"profile_image_url_https": "", "name": "A", "screen_name": "a"});
/// let records = vec![
///     json!({"id_str": "2", "in_reply_to_status_id_str": "1", "text": "reply",
///            "created_at": "2020-01-01T00:00:01Z", "user": user.clone()}),
///     json!({"id_str": "1", "text": "root", "created_at": "2020-01-01T00:00:00Z", "user": user}),
/// ];
///
/// let thread = build_tree(records)?.expect("non-empty archive");
/// assert_eq!(thread.root.id(), "1");
/// assert_eq!(thread.root.child_ids().collect::<Vec<_>>(), vec!["2"]);
/// # Ok::<(), thread_archive::ArchiveError>(())
/// ```
pub fn build_tree(mut records: Vec<Value>) -> Result<Option<ThreadTree>, ArchiveError> {
    if records.is_empty() {
        tracing::debug!("Archive has no records, no tree to build");
        return Ok(None);
    }

    records.sort_by_cached_key(|record| {
        let id = numeric_id(record);
        (id.is_none(), id)
    });

    let mut arena: Vec<Slot> = Vec::with_capacity(records.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut orphan_slots = Vec::new();

    for (position, raw) in records.iter().enumerate() {
        let (post, parent_id) = parse_record(raw)?;
        let slot = arena.len();
        let previous = index.get(&post.id).copied();

        if position > 0 {
            match parent_id.as_deref().and_then(|parent| index.get(parent)).copied() {
                Some(parent_slot) => attach(&mut arena, parent_slot, slot, previous),
                None => {
                    tracing::warn!(id = %post.id, parent = ?parent_id, "Orphaned post");
                    orphan_slots.push(slot);
                }
            }
        }

        if previous.is_some() {
            tracing::warn!(id = %post.id, "Duplicate post id, later record replaces earlier");
        }
        index.insert(post.id.clone(), slot);
        arena.push(Slot { post, children: Vec::new() });
    }

    let mut built: Vec<Option<TreeNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (slot, Slot { post, children }) in arena.into_iter().enumerate().rev() {
        let children = children.iter().filter_map(|&child| built[child].take()).collect();
        built[slot] = Some(TreeNode::with_children(post, children));
    }

    let orphans: Vec<TreeNode> =
        orphan_slots.iter().filter_map(|&slot| built[slot].take()).collect();
    let Some(root) = built.first_mut().and_then(Option::take) else {
        return Ok(None);
    };

    tracing::debug!(
        root = %root.id(),
        posts = root.descendant_count() + 1,
        orphans = orphans.len(),
        "Built reply tree"
    );

    Ok(Some(ThreadTree { root, orphans }))
}

/// Link `slot` under `parent_slot`, replacing a same-id sibling in place
fn attach(arena: &mut [Slot], parent_slot: usize, slot: usize, previous: Option<usize>) {
    let existing = previous.and_then(|prev| {
        arena[parent_slot].children.iter().position(|&child| child == prev)
    });

    let children = &mut arena[parent_slot].children;
    match existing {
        Some(position) => children[position] = slot,
        None => children.push(slot),
    }
}
