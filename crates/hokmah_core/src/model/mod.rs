//! Task domain model.
//!
//! # Responsibility
//! - Define the three task variants and their shared capabilities.
//! - Own the ordered in-memory collection and its index rules.
//! - Pin the date/time patterns used for input, display and records.
//!
//! # Invariants
//! - Task names are never blank; event windows are strictly increasing.
//! - Collection indices exposed to callers are 1-based.

pub mod datetime;
pub mod task;
pub mod task_list;
