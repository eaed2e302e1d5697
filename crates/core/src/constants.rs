//! Shared constants for the phonebook crates.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Port the HTTP server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3001;

/// Environment variable holding the PostgreSQL connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Environment variable overriding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Environment variable naming a directory of static front-end files.
pub const STATIC_DIR_VAR: &str = "PHONEBOOK_STATIC_DIR";
