//! Recursive file enumeration with regex filtering and interactive selection.
//!
//! The walker in [`services::fs::walker`] produces a flat list of every file
//! under a root directory with paths rewritten relative to that root; the
//! facade in [`services::select`] filters the list by file name and hands it
//! to a host-provided picker.

pub mod core;
pub mod models;
pub mod services;
