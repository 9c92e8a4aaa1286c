//! Parsers that turn archive text into validated posts
//!
//! # Error Handling Strategy
//!
//! Unlike a best-effort log reader, an archive is rendered as a single reply tree, and a
//! tree built from a partially-read archive would silently misrepresent the thread. The
//! parsers therefore follow an **all-or-nothing** approach:
//!
//! - **Line failures**: The first line that isn't valid JSON aborts ingestion with
//!   [`ArchiveError::Syntax`](crate::ArchiveError::Syntax), carrying the 1-based line number
//!   and the raw line for diagnostics.
//!
//! - **Record failures**: A JSON object missing a required field aborts with
//!   [`ArchiveError::MissingField`](crate::ArchiveError::MissingField), carrying the record's
//!   id when one can be recovered.
//!
//! - **Soft failures**: An unparsable `created_at` is tolerated; the post simply has no
//!   timestamp. A parent reference that isn't a string is treated as absent, leaving the
//!   post unresolved rather than failing the record.
//!
//! Errors are typed with `thiserror` so callers can show a short message to the user and
//! send the details to the log.

pub mod archive;
pub mod deserializers;
pub mod record;
pub mod timestamps;

pub use archive::parse_archive;
pub use record::parse_record;
pub use timestamps::parse_created_at;
