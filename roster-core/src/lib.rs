//! Directory console core.
//!
//! [`directory`] talks to the remote user/role service and classifies its
//! failures. [`view`] holds the pure search/filter/sort derivation.
//! [`controller`] owns the cached collections, view parameters and modal
//! forms, and reconciles the cache after each mutation.
#![allow(missing_docs)]

pub mod controller;
pub mod directory;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod view;

pub use controller::{
    CacheState, ConsoleError, DirectoryController, Modal, ModalMode,
    messages::{Message, RoleField, UserField},
};
pub use directory::{
    Collection, DirectoryError, DirectoryResult, DirectoryService, Operation,
    http::HttpDirectory,
};
pub use view::ViewParams;
