use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// `DATABASE_URL` wins when present; otherwise a PostgreSQL URL is
    /// assembled from `DB_USER`, `DB_PASS`, `DB_HOST`, `DB_PORT` and `DB_NAME`.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => postgres_url_from_parts(&lookup)
                .context("DATABASE_URL or DB_HOST/DB_NAME must be set")?,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => bail!("LOG_FORMAT must be 'pretty' or 'json', got '{}'", other),
        };

        Ok(Self {
            database_url,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            log_format,
        })
    }
}

fn postgres_url_from_parts<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = lookup("DB_HOST")?;
    let name = lookup("DB_NAME")?;
    let user = lookup("DB_USER").unwrap_or_default();
    let pass = lookup("DB_PASS").unwrap_or_default();

    let credentials = match (user.is_empty(), pass.is_empty()) {
        (true, _) => String::new(),
        (false, true) => format!("{}@", urlencoding::encode(&user)),
        (false, false) => format!(
            "{}:{}@",
            urlencoding::encode(&user),
            urlencoding::encode(&pass)
        ),
    };
    let port = lookup("DB_PORT")
        .filter(|p| !p.is_empty())
        .map(|p| format!(":{}", p))
        .unwrap_or_default();

    Some(format!("postgres://{}{}{}/{}", credentials, host, port, name))
}
