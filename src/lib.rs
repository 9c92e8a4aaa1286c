//! Thread Archive - Rebuild reply trees from line-delimited JSON post archives
//!
//! This library turns a twarc-style archive (one Twitter API post object per line)
//! into a rooted reply tree ready for display. It supports:
//!
//! - Splitting archive text into JSON records with exact line-numbered errors
//! - Validating each record into a strongly-typed [`Post`]
//! - Building a deterministic reply tree rooted at the smallest post id
//! - Counting posts whose parent cannot be resolved (orphans)
//!
//! # Example
//!
//! ```
//! use thread_archive::load_thread_from_str;
//!
//! let archive = concat!(
//!     r#"{"id_str":"1","text":"root","created_at":"2020-01-01T00:00:00Z","user":{"profile_image_url_https":"a","name":"A","screen_name":"a"}}"#,
//!     "\n",
//!     r#"{"id_str":"2","in_reply_to_status_id_str":"1","text":"reply","created_at":"2020-01-01T00:00:01Z","user":{"profile_image_url_https":"b","name":"B","screen_name":"b"}}"#,
//!     "\n",
//! );
//! let thread = load_thread_from_str(archive)?.expect("archive is not empty");
//! assert_eq!(thread.root.post.id, "1");
//! assert_eq!(thread.orphan_count(), 0);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod errors;
pub mod loader;
pub mod models;
pub mod parsers;
pub mod tree;
pub mod utils;

// Re-export commonly used types
pub use errors::ArchiveError;
pub use loader::{load_thread, load_thread_from_str};
pub use models::{Post, TreeNode};
pub use parsers::{parse_archive, parse_record};
pub use tree::{ThreadTree, build_tree};
pub use utils::escape_html;
