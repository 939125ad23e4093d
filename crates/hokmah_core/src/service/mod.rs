//! Command execution service.
//!
//! # Responsibility
//! - Apply parsed commands to the owned task list.
//! - Persist the list after every successful mutation.
//! - Hand structured outcomes to the presentation layer.

pub mod tracker;
