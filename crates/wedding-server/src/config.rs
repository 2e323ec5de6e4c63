use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Runtime settings, read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub assets_dir: PathBuf,
    pub seed: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = get("WEDDING_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = get("WEDDING_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse()
            .context("WEDDING_PORT must be a port number")?;
        let addr = format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", host, port))?;

        let assets_dir = get("WEDDING_ASSETS_DIR")
            .unwrap_or_else(|| "./attached_assets".into())
            .into();

        let seed = match get("WEDDING_SEED").as_deref().map(str::trim) {
            None | Some("") => true,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
            Some(v) => bail!("WEDDING_SEED must be true/false, got '{}'", v),
        };

        Ok(Self {
            addr,
            assets_dir,
            seed,
        })
    }
}
