// UserSleuth - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "UserSleuth";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backing store
// =============================================================================

/// Default backing store file name, resolved relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "users.json";

/// Maximum size of the backing store file in bytes. The store is read in a
/// single whole-file pass, so this bounds peak memory for one query.
pub const MAX_STORE_FILE_SIZE: u64 = 16 * 1024 * 1024; // 16 MB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
