use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context};

use crate::clipboard::DEFAULT_CLIPBOARD_TIMEOUT_SECS;
use crate::naming::NUM_RANDOM_WORDS;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 80;

/// Application configuration DTO.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Listen address
    pub host: IpAddr,

    /// Listen port
    pub port: u16,

    /// Inactivity window before a clipboard's content is cleared
    pub clipboard_timeout_secs: u64,

    /// Words per generated clipboard name
    pub num_random_words: usize,

    /// Word list file; the bundled list is used when absent
    pub wordlist_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create AppConfig from a TOML value.
    ///
    /// Keys that are missing keep their default value. Keys that are present
    /// with the wrong type or out of range are errors.
    ///
    /// ```toml
    /// [server]
    /// host = "127.0.0.1"
    /// port = 8080
    ///
    /// [clipboard]
    /// timeout_secs = 900
    ///
    /// [naming]
    /// num_random_words = 3
    /// wordlist_path = "/etc/clips/wordlist.txt"
    /// ```
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup(toml_value, "server", "host") {
            let host = host
                .as_str()
                .ok_or_else(|| anyhow!("server.host must be a string"))?;
            config.host = host
                .parse()
                .with_context(|| format!("server.host is not an IP address: {host}"))?;
        }

        if let Some(port) = lookup(toml_value, "server", "port") {
            let port = port
                .as_integer()
                .ok_or_else(|| anyhow!("server.port must be an integer"))?;
            config.port = u16::try_from(port)
                .with_context(|| format!("server.port out of range: {port}"))?;
        }

        if let Some(timeout) = lookup(toml_value, "clipboard", "timeout_secs") {
            let timeout = timeout
                .as_integer()
                .ok_or_else(|| anyhow!("clipboard.timeout_secs must be an integer"))?;
            config.clipboard_timeout_secs = u64::try_from(timeout)
                .with_context(|| format!("clipboard.timeout_secs must not be negative: {timeout}"))?;
        }

        if let Some(words) = lookup(toml_value, "naming", "num_random_words") {
            let words = words
                .as_integer()
                .ok_or_else(|| anyhow!("naming.num_random_words must be an integer"))?;
            config.num_random_words = usize::try_from(words)
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| anyhow!("naming.num_random_words must be positive: {words}"))?;
        }

        if let Some(path) = lookup(toml_value, "naming", "wordlist_path") {
            let path = path
                .as_str()
                .ok_or_else(|| anyhow!("naming.wordlist_path must be a string"))?;
            config.wordlist_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            clipboard_timeout_secs: DEFAULT_CLIPBOARD_TIMEOUT_SECS,
            num_random_words: NUM_RANDOM_WORDS,
            wordlist_path: None,
        }
    }
}

fn lookup<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}
