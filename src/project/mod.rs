// src/project/mod.rs

//! Application state: the owned task collection and the mutation boundary.
//!
//! - [`store`] owns the single task collection; every mutation goes through
//!   [`store::ProjectStore::apply`] and replaces the collection wholesale.
//! - [`draft`] holds partial form state and validates it before commit.

pub mod draft;
pub mod store;

pub use draft::{TaskDraft, TaskPatch};
pub use store::{ProjectStore, TaskMutation, ViewSettings};
