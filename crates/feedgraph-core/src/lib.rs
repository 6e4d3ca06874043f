//! # feedgraph-core
//!
//! Foundation types, errors, and logging helpers for the feedgraph activity engine.
//!
//! This crate provides the shared vocabulary the other feedgraph crates depend on:
//!
//! - **Account names**: [`AccountName`], the identity every account is compared by
//! - **Activities**: [`Activity`] records linking an actor, a [`Verb`], and a target
//! - **Errors**: [`GraphError`], the recoverable failures of follow/post/like
//! - **Logging**: subscriber setup and a capture layer for tests

#![deny(unsafe_code)]

pub mod activity;
pub mod errors;
pub mod logging;
pub mod names;

pub use activity::{Activity, Verb};
pub use errors::GraphError;
pub use names::AccountName;
