//! ESROCOS orchestration tools for the TASTE/Ocarina toolchain
//!
//! This crate provides the command-line glue between an ESROCOS project
//! checkout and the external TASTE modeling tools: building the project,
//! opening the TASTE editor, generating function skeletons, and converting
//! ROS message definitions to ASN.1 type modules.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Documentation
    missing_docs,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]

pub mod api;
pub mod asn1;
pub mod config;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod taste;
pub mod version;

// Re-export main API functions
pub use api::{
    BuildOptions, ConvertOptions, ProjectOptions, convert_messages, edit_project,
    generate_skeletons, run_build,
};
pub use config::{Linkings, ProjectConfig};
pub use exceptions::EsrocosError;
