//! Interaction with the external TASTE/Ocarina toolchain
//!
//! Split into argument assembly ([`args`]), the transient pre-init
//! environment script ([`init_script`]), and subprocess invocation
//! ([`invoke`]). All operations are synchronous and blocking.

pub mod args;
pub mod init_script;
pub mod invoke;
