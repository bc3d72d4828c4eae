//! Layered configuration and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (`__` separates nested keys). Also resolves the content profile, which may
//! live inline under `[content]` or in a separate file named by `content_file`.

use figment::{
    providers::{Env, Format, Json, Toml},
    Figment,
};
use std::env;
use std::path::{Path, PathBuf};

use crate::content::ContentSource;
use crate::error::Error;

pub struct Config {
    figment: Figment,
    base: PathBuf,
    env_name: String,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_in(Path::new("."))
    }

    pub fn load_in(base: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        Ok(Self { figment, base: base.to_path_buf(), env_name })
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like [`Config::get`], but an absent key yields `T::default()`.
    /// A present key that fails to deserialize is still an error.
    pub fn get_or_default<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.figment.find_value(key).is_err() {
            return Ok(T::default());
        }
        self.get(key)
    }

    /// Resolves the profile: `content_file` first, then the inline `content`
    /// table, then the built-in sample. The result is always validated.
    pub fn content(&self) -> anyhow::Result<ContentSource> {
        let content = if self.figment.find_value("content_file").is_ok() {
            let file: String = self.get("content_file")?;
            load_content_file(&resolve_with_base(&self.base, file))?
        } else if self.figment.find_value("content").is_ok() {
            self.get::<ContentSource>("content")?
        } else {
            tracing::debug!("no content configured; using the sample profile");
            ContentSource::sample()
        };
        content.validate()?;
        Ok(content)
    }
}

fn load_content_file(path: &Path) -> anyhow::Result<ContentSource> {
    if !path.is_file() {
        return Err(Error::NotFound(format!("content file {}", path.display())).into());
    }
    let figment = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Figment::from(Json::file(path)),
        Some("toml") => Figment::from(Toml::file(path)),
        _ => {
            return Err(Error::InvalidConfig(format!(
                "content file {} must be .json or .toml",
                path.display()
            ))
            .into())
        }
    };
    figment
        .extract()
        .map_err(|e| anyhow::anyhow!("Failed to read content from {}: {}", path.display(), e))
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
