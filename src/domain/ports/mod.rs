//! Port trait definitions (Hexagonal Architecture)
//!
//! - IssueSearch: paged, oldest-first reads from the issue tracker
//! - IssueWriter: the three state-changing calls made per assignment
//!
//! Services depend only on these traits, so the live GitHub adapter and
//! the dry-run adapter are interchangeable.

pub mod issue_search;
pub mod issue_writer;

pub use issue_search::IssueSearch;
pub use issue_writer::IssueWriter;
