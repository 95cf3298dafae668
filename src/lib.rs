//! Duplicate-name resolution for file editors.
//!
//! Given a filename to copy and the filenames already present in a
//! directory, [`next_copy_name`] derives a fresh name following the
//! `stem`, `stem copy`, `stem copy N` convention, reusing the lowest free
//! number before minting a new maximum:
//!
//! ```
//! use copyname::next_copy_name;
//!
//! let files = ["sarah.txt", "sarah copy.txt", "sarah copy 3.txt"];
//! assert_eq!(next_copy_name(files, "sarah.txt"), "sarah copy 2.txt");
//! ```
//!
//! The crate is a pure library: the caller lists the directory, asks for a
//! name, and creates the file. Nothing here touches the filesystem and no
//! state survives a call, so two concurrent duplications of the same
//! family can race; serializing the list, compute, create sequence is the
//! caller's responsibility.

mod copy_name;
mod error;
mod filename;
mod slot;

pub use self::copy_name::next_copy_name;
pub use self::error::EmptySlotSet;
pub use self::filename::Filename;
pub use self::slot::next_free_slot;
