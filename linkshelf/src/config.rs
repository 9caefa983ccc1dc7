use std::path::PathBuf;

/// Document holding the link rows.
pub const DEFAULT_SHEET_ID: &str = "1Q9vg9mPI_9kpTV-avTHan4kLJMr39xhe5BG7nDpSj0U";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
pub const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Google,
    Memory,
}

impl StoreBackend {
    fn from_env(value: &str) -> anyhow::Result<Self> {
        match value {
            "google" => Ok(Self::Google),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow::anyhow!(
                "Invalid LINKSHELF_STORE '{other}'. Expected 'google' or 'memory'"
            )),
        }
    }
}

/// Service account credentials for the spreadsheet.
///
/// Both values may be empty; that only surfaces as an error when a request
/// actually needs to authenticate.
#[derive(Clone, Default)]
pub struct ServiceAccount {
    pub client_email: String,
    /// PEM private key with real newlines
    pub private_key: String,
}

impl std::fmt::Debug for ServiceAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccount")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SheetConfig {
    pub sheet_id: String,
    /// Worksheet title; the first worksheet is used when no tab has this title
    pub sheet_name: String,
    pub token_uri: String,
    pub api_base: String,
    pub account: ServiceAccount,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port the API listens on
    pub port: u16,
    /// Which row store backs the API
    pub store: StoreBackend,
    pub sheet: SheetConfig,
    /// Built web UI assets, served at `/` when the directory exists
    pub ui_dist: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env_parse("LINKSHELF_PORT", 8080)?,
            store: StoreBackend::from_env(&env_str("LINKSHELF_STORE", "google"))?,
            sheet: SheetConfig {
                sheet_id: env_str("LINKSHELF_SHEET_ID", DEFAULT_SHEET_ID),
                sheet_name: env_str("LINKSHELF_SHEET_NAME", DEFAULT_SHEET_NAME),
                token_uri: env_str("GOOGLE_TOKEN_URI", DEFAULT_TOKEN_URI),
                api_base: env_str("GOOGLE_SHEETS_API_BASE", DEFAULT_SHEETS_API_BASE),
                account: ServiceAccount {
                    client_email: env_str("GOOGLE_SERVICE_ACCOUNT_EMAIL", ""),
                    private_key: unescape_private_key(&env_str("GOOGLE_PRIVATE_KEY", "")),
                },
            },
            ui_dist: ui_dist_from_env(),
        })
    }
}

/// Keys pasted into `.env` files usually carry literal `\n` sequences.
pub fn unescape_private_key(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

/// Resolve the web UI dist directory.
///
/// If `LINKSHELF_UI_DIST` is set, that value is used as-is. Otherwise resolve
/// from the workspace root so the server can be launched from the repository
/// root or from `linkshelf/`.
fn ui_dist_from_env() -> PathBuf {
    if let Ok(path) = std::env::var("LINKSHELF_UI_DIST") {
        return PathBuf::from(path);
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("linkshelf-ui/dist")
}
