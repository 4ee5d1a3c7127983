// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "StaffDir";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "staffdir";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".staffdir";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "staffdir.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "STAFFDIR_CONFIG";

/// Environment variable for debug mode
pub const ENV_DEBUG: &str = "STAFFDIR_DEBUG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "STAFFDIR_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "STAFFDIR_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "STAFFDIR_LOG";

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "STAFFDIR_DATA_DIR";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 4000;

/// Default body limit for API requests (1 MB)
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// Seeding
// =============================================================================

/// Environment variable to seed an empty database at startup
pub const ENV_SEED_ON_START: &str = "STAFFDIR_SEED_ON_START";

/// Environment variable for the number of seeded employees
pub const ENV_SEED_EMPLOYEES: &str = "STAFFDIR_SEED_EMPLOYEES";

/// Employees generated by a seed request
pub const DEFAULT_SEED_EMPLOYEES: usize = 1000;

/// Upper bound for a configured seed size
pub const MAX_SEED_EMPLOYEES: usize = 100_000;

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "staffdir.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -64000 = 64MB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// SQLite WAL auto-checkpoint threshold (pages, ~4MB at 1000)
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// WAL checkpoint interval in seconds (5 minutes)
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Shutdown
// =============================================================================

/// Graceful shutdown timeout in seconds
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
