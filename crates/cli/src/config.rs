//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional. Empty values are treated as unset.
//! - `BIRTHDAY_PASS_DATA_DIR` - Directory for persisted state (default: `.birthday-pass`)
//! - `BIRTHDAY_PASS_FRIEND_NAME` - Name shown in the greeting (default: `Ranjitha (Ranjj)`)
//! - `BIRTHDAY_PASS_FLIPBOOK_URL` - Fallback flipbook link (default: `https://heyzine.com/`)
//! - `BIRTHDAY_PASS_PLAYLIST_URL` - Playlist embed URL
//! - `BIRTHDAY_PASS_CATALOG` - JSON file with a custom pass catalog
//! - `BIRTHDAY_PASS_LETTER` - Text file with the birthday letter (default: built-in letter)

use std::path::{Path, PathBuf};

use birthday_pass_core::{Catalog, CatalogError, FlipbookLink};
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".birthday-pass";
const DEFAULT_FRIEND_NAME: &str = "Ranjitha (Ranjj)";
const DEFAULT_FLIPBOOK_URL: &str = "https://heyzine.com/";
const DEFAULT_PLAYLIST_URL: &str =
    "https://open.spotify.com/embed/playlist/3tc4TLYRYfvrhiT9J7TBEB?utm_source=generator";

/// Letter shown when `BIRTHDAY_PASS_LETTER` is unset. `{name}` is replaced
/// with the friend's name.
const DEFAULT_LETTER: &str = concat!(
    "Dear {name},\n",
    "\n",
    "You do so many small things for me every day \u{2014} holding my things, waiting for me in class, reserving my seat, bringing lunch or snacks, helping with project work, listening to my rants, and gossiping with me until you finally say \u{201c}Classic Namgyake.\u{201d}\n",
    "\n",
    "You share things with me that you don\u{2019}t share with others. You walk, talk, and eat everything on the way, and somehow make it all funny. The way you love your family \u{2014} I really respect that.\n",
    "\n",
    "I still remember the day I was stressed with a project and told you to tell me later. You cried \u{2014} and I hated that I made you cry. But it also made me realize how much I matter to you, and that means a lot.\n",
    "\n",
    "Whenever your friends tease you by calling me your only best friend, and you just agree without pretending \u{2014} I love that you accept the truth so confidently.\n",
    "\n",
    "We\u{2019}ve been together for 3 years and we\u{2019}re still going strong. Sorry for getting you in trouble when I laugh in class. And thanks for making those boring lectures bearable.\n",
    "\n",
    "So... happy birthday, Ranjj \u{1f609}\n",
    "\n",
    "\u{2014} your permanent clown & bodyguard",
);

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the persisted state files
    pub data_dir: PathBuf,
    /// Name shown in the greeting
    pub friend_name: String,
    /// Link used when no flipbook link has been saved
    pub flipbook_default: FlipbookLink,
    /// Playlist embed URL
    pub playlist_url: String,
    /// Custom catalog file; the built-in catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Letter text file; the built-in letter is used when unset
    pub letter_path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let flipbook_url = get("BIRTHDAY_PASS_FLIPBOOK_URL")
            .unwrap_or_else(|| DEFAULT_FLIPBOOK_URL.to_owned());
        let flipbook_default = FlipbookLink::parse(&flipbook_url).map_err(|e| {
            ConfigError::InvalidEnvVar("BIRTHDAY_PASS_FLIPBOOK_URL".to_owned(), e.to_string())
        })?;

        Ok(Self {
            data_dir: get("BIRTHDAY_PASS_DATA_DIR")
                .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from),
            friend_name: get("BIRTHDAY_PASS_FRIEND_NAME")
                .unwrap_or_else(|| DEFAULT_FRIEND_NAME.to_owned()),
            flipbook_default,
            playlist_url: get("BIRTHDAY_PASS_PLAYLIST_URL")
                .unwrap_or_else(|| DEFAULT_PLAYLIST_URL.to_owned()),
            catalog_path: get("BIRTHDAY_PASS_CATALOG").map(PathBuf::from),
            letter_path: get("BIRTHDAY_PASS_LETTER").map(PathBuf::from),
        })
    }

    /// Apply command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<PathBuf>, catalog: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        self
    }

    /// The configured catalog, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the catalog file cannot be read or is invalid.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::default());
        };
        let json = read_file(path)?;
        let catalog = Catalog::from_json(&json)?;
        tracing::debug!(path = %path.display(), "Loaded custom catalog");
        Ok(catalog)
    }

    /// The configured letter, or the built-in one, with `{name}` replaced by
    /// the friend's name.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the letter file cannot be read.
    pub fn load_letter(&self) -> Result<String, ConfigError> {
        let text = match &self.letter_path {
            Some(path) => read_file(path)?,
            None => DEFAULT_LETTER.to_owned(),
        };
        Ok(text.replace("{name}", &self.friend_name))
    }
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
