use anyhow::Context;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind: String,
    pub cors_origin: String,
    /// prefix of logo urls, logos live outside of this service
    pub asset_base: String,
    pub log_level: tracing::Level,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".into(),
            cors_origin: "http://localhost:3000".into(),
            asset_base: "/assets".into(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl Settings {
    /// Read settings from the process environment. Call `dotenvy::dotenv()`
    /// first if a `.env` file should be honoured.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut settings = Self::default();

        if let Some(v) = lookup("DIRECTORY_BIND") {
            settings.bind = v;
        }
        if let Some(v) = lookup("DIRECTORY_CORS_ORIGIN") {
            settings.cors_origin = v;
        }
        if let Some(v) = lookup("DIRECTORY_ASSET_BASE") {
            settings.asset_base = v;
        }
        if let Some(v) = lookup("DIRECTORY_LOG") {
            settings.log_level = v
                .trim()
                .parse()
                .with_context(|| format!("invalid DIRECTORY_LOG value {v:?}"))?;
        }

        anyhow::ensure!(!settings.bind.trim().is_empty(), "DIRECTORY_BIND is empty");

        Ok(settings)
    }
}
