//! Standard exit codes for the ESROCOS binaries
//!
//! These exit codes are shared by all entry points to provide consistent
//! error reporting across the toolset. The external build/editor tools'
//! own exit codes are passed through untouched on success paths.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Configuration error (missing esrocos.yml, missing required key, bad YAML)
pub const EXIT_CONFIG_ERROR: i32 = 102;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 103;

/// Execution error (failed to spawn an external tool)
pub const EXIT_EXECUTION_ERROR: i32 = 104;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// Dependency error (required external tool not available)
pub const EXIT_DEPENDENCY_ERROR: i32 = 106;

/// ASN.1 generation error (message not found, ambiguous, or unparsable)
pub const EXIT_GENERATION_ERROR: i32 = 107;
