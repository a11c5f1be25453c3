//! `PetVida` core - the domain-state layer of a pet health plan application
//!
//! This crate owns the four client-side stores (identity, pet roster,
//! appointment book, subscription) plus the static doctor/location/plan
//! catalogs. Each store validates, performs one simulated remote round trip,
//! mutates in-memory state, and persists a per-user JSON snapshot. The
//! presentation layer is the sole consumer of the store APIs.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Static doctor, location, and plan reference catalogs
pub mod catalog;
/// The four domain stores - identity, pets, appointments, subscription
pub mod core;
/// Serde data model for users, pets, appointments, and subscriptions
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Random id generation for user-created records
pub mod id;
/// Tracing initialization for the embedding application shell
pub mod logging;
/// Injectable remote-operation capability and the simulated backend
pub mod remote;
/// Session-scoped context created on sign-in
pub mod session;
/// Snapshot store abstraction with memory- and file-backed implementations
pub mod storage;

#[cfg(test)]
pub mod test_utils;
