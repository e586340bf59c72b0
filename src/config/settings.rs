//! Application settings and configuration structures.

use std::collections::HashMap;
use std::fmt;
use std::net::{AddrParseError, SocketAddr};

use serde::{Serialize, Serializer};

use super::coercion;
use super::keys;
use super::loader::ConfigLoader;
use crate::domain::{ChannelRegistry, MongoSrvDsn, REDACTED};
use crate::shared::error::{ConfigError, FieldError, FieldErrorKind};

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;
/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_SERVER: bool = true;
pub const DEFAULT_RATE_LIMITER: bool = true;

/// Root configuration structure containing all application settings.
///
/// Built once at startup and shared read-only afterwards. The only field that
/// changes after load is [`Settings::channels`], which has its own locking.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    /// Service bind configuration
    pub server: ServerSettings,

    /// Telegram client credentials and sizing
    pub bot: BotSettings,

    /// MongoDB configuration
    pub database: DatabaseSettings,

    /// Admins, subscription gating and feature toggles
    pub access: AccessSettings,

    /// Channel invite metadata, always empty after load
    pub channels: ChannelRegistry,
}

/// Server binding configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerSettings {
    /// Host address to bind to (e.g., "0.0.0.0")
    pub host: String,

    /// Port number to listen on
    pub port: u16,

    /// Whether the keep-alive HTTP server is started
    pub http_enabled: bool,
}

/// Telegram bot client configuration.
#[derive(Clone, Serialize)]
pub struct BotSettings {
    /// Application ID from my.telegram.org
    pub api_id: i64,

    /// Application hash from my.telegram.org
    #[serde(serialize_with = "redact")]
    pub api_hash: String,

    /// Token issued by BotFather
    #[serde(serialize_with = "redact")]
    pub token: String,

    /// Number of concurrent update workers
    pub workers: u32,

    /// Session name used to persist the client login
    pub session: String,

    /// Upper bound for the client's message cache
    pub max_message_cache_size: usize,
}

/// MongoDB configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSettings {
    /// SRV connection string
    pub url: MongoSrvDsn,

    /// Database name
    pub name: String,
}

/// Access control and feature toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessSettings {
    pub rate_limiter: bool,

    /// Chat that receives a copy of every stored file
    pub backup_channel: i64,

    /// Users allowed to run admin commands
    pub root_admins: Vec<i64>,

    /// Use join requests instead of direct invite links
    pub private_request: bool,

    /// Forbid forwarding and saving of delivered files
    pub protect_content: bool,

    /// Channels a user must join before files are delivered
    pub force_sub_channels: Vec<i64>,

    /// Generate share links automatically for uploaded files
    pub auto_generate_link: bool,
}

impl Settings {
    /// Load settings from the application `.env` file and environment variables.
    ///
    /// The loading order is:
    /// 1. `<application root>/.env` (optional)
    /// 2. Environment variables (highest priority)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` listing every missing or malformed field,
    /// or a source error if the `.env` file cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new().load()
    }

    /// Build settings from already-layered raw values.
    ///
    /// Every field is checked before returning so that the error lists all
    /// problems at once.
    pub fn from_raw(raw: &RawSettings) -> Result<Self, ConfigError> {
        let mut fields = FieldReader::new(raw);

        let server = ServerSettings::read(&mut fields);
        let bot = BotSettings::read(&mut fields);
        let database = DatabaseSettings::read(&mut fields);
        let access = AccessSettings::read(&mut fields);
        let channels = coercion::reset_channels(raw.get(keys::CHANNELS_N_INVITE));

        match (server, bot, database, access) {
            (Some(server), Some(bot), Some(database), Some(access)) if fields.is_clean() => {
                Ok(Self {
                    server,
                    bot,
                    database,
                    access,
                    channels,
                })
            }
            _ => Err(ConfigError::Invalid(fields.into_errors())),
        }
    }

    /// Get the full server address as a string.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl ServerSettings {
    fn read(fields: &mut FieldReader<'_>) -> Option<Self> {
        let host = fields.with_default(keys::HOSTNAME, DEFAULT_HOST.to_string(), coercion::parse_string);
        let port = fields.with_default(keys::PORT, DEFAULT_PORT, |raw| {
            coercion::parse_int(raw, "a valid port number (0-65535)")
        });
        let http_enabled =
            fields.with_default(keys::HTTP_SERVER, DEFAULT_HTTP_SERVER, coercion::parse_bool);

        Some(Self {
            host: host?,
            port: port?,
            http_enabled: http_enabled?,
        })
    }

    /// Get the socket address for binding.
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl BotSettings {
    fn read(fields: &mut FieldReader<'_>) -> Option<Self> {
        let api_id = fields.required(keys::API_ID, coercion::parse_i64);
        let api_hash = fields.required(keys::API_HASH, coercion::parse_string);
        let token = fields.required(keys::BOT_TOKEN, coercion::parse_string);
        let workers = fields.required(keys::BOT_WORKER, |raw| {
            coercion::parse_int(raw, "a valid non-negative integer")
        });
        let session = fields.required(keys::BOT_SESSION, coercion::parse_string);
        let max_message_cache_size = fields.required(keys::BOT_MAX_MESSAGE_CACHE_SIZE, |raw| {
            coercion::parse_int(raw, "a valid non-negative integer")
        });

        Some(Self {
            api_id: api_id?,
            api_hash: api_hash?,
            token: token?,
            workers: workers?,
            session: session?,
            max_message_cache_size: max_message_cache_size?,
        })
    }
}

impl fmt::Debug for BotSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotSettings")
            .field("api_id", &self.api_id)
            .field("api_hash", &REDACTED)
            .field("token", &REDACTED)
            .field("workers", &self.workers)
            .field("session", &self.session)
            .field("max_message_cache_size", &self.max_message_cache_size)
            .finish()
    }
}

impl DatabaseSettings {
    fn read(fields: &mut FieldReader<'_>) -> Option<Self> {
        let url = fields.required(keys::MONGO_DB_URL, coercion::parse_mongo_dsn);
        let name = fields.required(keys::MONGO_DB_NAME, coercion::parse_string);

        Some(Self {
            url: url?,
            name: name?,
        })
    }
}

impl AccessSettings {
    fn read(fields: &mut FieldReader<'_>) -> Option<Self> {
        let rate_limiter =
            fields.with_default(keys::RATE_LIMITER, DEFAULT_RATE_LIMITER, coercion::parse_bool);
        let backup_channel = fields.required(keys::BACKUP_CHANNEL, coercion::parse_i64);
        let root_admins = fields.required(keys::ROOT_ADMINS_ID, coercion::parse_id_list);
        let private_request = fields.required(keys::PRIVATE_REQUEST, coercion::parse_bool);
        let protect_content = fields.required(keys::PROTECT_CONTENT, coercion::parse_bool);
        let force_sub_channels = fields.required(keys::FORCE_SUB_CHANNELS, coercion::parse_id_list);
        let auto_generate_link = fields.required(keys::AUTO_GENERATE_LINK, coercion::parse_bool);

        Some(Self {
            rate_limiter: rate_limiter?,
            backup_channel: backup_channel?,
            root_admins: root_admins?,
            private_request: private_request?,
            protect_content: protect_content?,
            force_sub_channels: force_sub_channels?,
            auto_generate_link: auto_generate_link?,
        })
    }

    pub fn is_root_admin(&self, user_id: i64) -> bool {
        self.root_admins.contains(&user_id)
    }

    /// Whether users must join at least one channel before receiving files.
    pub fn requires_subscription(&self) -> bool {
        !self.force_sub_channels.is_empty()
    }
}

/// Layered string values keyed case-insensitively by environment key.
#[derive(Clone, Default)]
pub struct RawSettings {
    values: HashMap<String, String>,
}

impl RawSettings {
    pub fn new(values: HashMap<String, String>) -> Self {
        values.into_iter().collect()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into().to_ascii_lowercase(), v.into()))
                .collect(),
        }
    }
}

/// Reads fields one by one, recording every failure instead of stopping at
/// the first.
struct FieldReader<'a> {
    raw: &'a RawSettings,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    fn new(raw: &'a RawSettings) -> Self {
        Self {
            raw,
            errors: Vec::new(),
        }
    }

    fn required<T>(
        &mut self,
        key: &'static str,
        parse: impl FnOnce(&str) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        match self.raw.get(key) {
            Some(raw) => self.record(key, parse(raw)),
            None => {
                self.errors.push(FieldError::missing(key));
                None
            }
        }
    }

    fn with_default<T>(
        &mut self,
        key: &'static str,
        default: T,
        parse: impl FnOnce(&str) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        match self.raw.get(key) {
            Some(raw) => self.record(key, parse(raw)),
            None => Some(default),
        }
    }

    fn record<T>(&mut self, key: &'static str, result: Result<T, FieldErrorKind>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(kind) => {
                self.errors.push(FieldError::new(key, kind));
                None
            }
        }
    }

    fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

fn redact<S: Serializer>(_secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(REDACTED)
}
