#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod arena;
pub mod error;
pub mod list;

pub use error::{ListError, ListErrorKind, ListResult};
pub use list::{List, NodeRef};

/// The payload carried by every node.
pub type Value = i32;
