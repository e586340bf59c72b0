//! Environment key names.
//!
//! Keys are matched case-insensitively in both the `.env` file and the
//! process environment; these constants are the canonical spelling used in
//! error messages.

// Deploy
pub const PORT: &str = "PORT";
pub const HOSTNAME: &str = "HOSTNAME";
pub const HTTP_SERVER: &str = "HTTP_SERVER";

// Bot client
pub const API_ID: &str = "API_ID";
pub const API_HASH: &str = "API_HASH";
pub const BOT_TOKEN: &str = "BOT_TOKEN";
pub const BOT_WORKER: &str = "BOT_WORKER";
pub const BOT_SESSION: &str = "BOT_SESSION";
pub const BOT_MAX_MESSAGE_CACHE_SIZE: &str = "BOT_MAX_MESSAGE_CACHE_SIZE";

// Database
pub const MONGO_DB_URL: &str = "MONGO_DB_URL";
pub const MONGO_DB_NAME: &str = "MONGO_DB_NAME";

// Access and features
pub const RATE_LIMITER: &str = "RATE_LIMITER";
pub const BACKUP_CHANNEL: &str = "BACKUP_CHANNEL";
pub const ROOT_ADMINS_ID: &str = "ROOT_ADMINS_ID";
pub const PRIVATE_REQUEST: &str = "PRIVATE_REQUEST";
pub const PROTECT_CONTENT: &str = "PROTECT_CONTENT";
pub const FORCE_SUB_CHANNELS: &str = "FORCE_SUB_CHANNELS";
pub const AUTO_GENERATE_LINK: &str = "AUTO_GENERATE_LINK";

// Runtime-managed, discarded on load
pub const CHANNELS_N_INVITE: &str = "CHANNELS_N_INVITE";

/// Every key the settings schema knows about.
pub const ALL: [&str; 19] = [
    PORT,
    HOSTNAME,
    HTTP_SERVER,
    API_ID,
    API_HASH,
    BOT_TOKEN,
    BOT_WORKER,
    BOT_SESSION,
    BOT_MAX_MESSAGE_CACHE_SIZE,
    MONGO_DB_URL,
    MONGO_DB_NAME,
    RATE_LIMITER,
    BACKUP_CHANNEL,
    ROOT_ADMINS_ID,
    PRIVATE_REQUEST,
    PROTECT_CONTENT,
    FORCE_SUB_CHANNELS,
    AUTO_GENERATE_LINK,
    CHANNELS_N_INVITE,
];

/// Whether `name` is a schema key, ignoring case.
pub fn is_known(name: &str) -> bool {
    ALL.iter().any(|key| key.eq_ignore_ascii_case(name))
}

/// Whether `name` is a schema key spelled exactly as declared.
pub fn is_canonical(name: &str) -> bool {
    ALL.contains(&name)
}
