use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FAQ_PATH: &str = "faq.txt";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 进程启动时从环境变量加载的全部配置
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub port: u16,
    pub faq_path: PathBuf,
    pub groq_base_url: String,
    /// 未设置时出站调用不设超时
    pub completion_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        // 空字符串视同未设置
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get("GROQ_API_KEY").ok_or(ConfigError::Missing("GROQ_API_KEY"))?;

        let port = match get("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid { name: "PORT", value: v })?,
            None => DEFAULT_PORT,
        };

        let completion_timeout = match get("COMPLETION_TIMEOUT_SECS") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "COMPLETION_TIMEOUT_SECS",
                        value: v,
                    })
                }
            },
            None => None,
        };

        Ok(Self {
            api_key,
            port,
            faq_path: get("FAQ_PATH").map(PathBuf::from).unwrap_or_else(|| DEFAULT_FAQ_PATH.into()),
            groq_base_url: get("GROQ_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GROQ_BASE_URL.to_string()),
            completion_timeout,
        })
    }
}

// 密钥不进日志
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("port", &self.port)
            .field("faq_path", &self.faq_path)
            .field("groq_base_url", &self.groq_base_url)
            .field("completion_timeout", &self.completion_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[("GROQ_API_KEY", "gsk_test")]).unwrap();
        assert_eq!(cfg.api_key, "gsk_test");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.faq_path, PathBuf::from("faq.txt"));
        assert_eq!(cfg.groq_base_url, DEFAULT_GROQ_BASE_URL);
        assert_eq!(cfg.completion_timeout, None);
    }

    #[test]
    fn api_key_is_required() {
        let err = config(&[("PORT", "8080")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GROQ_API_KEY")));
        assert!(matches!(config(&[("GROQ_API_KEY", "  ")]), Err(ConfigError::Missing(_))));
    }

    #[test]
    fn overrides_are_read() {
        let cfg = config(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("PORT", "8080"),
            ("FAQ_PATH", "/srv/faq.txt"),
            ("GROQ_BASE_URL", "http://127.0.0.1:9000/v1/"),
            ("COMPLETION_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.faq_path, PathBuf::from("/srv/faq.txt"));
        assert_eq!(cfg.groq_base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(cfg.completion_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = config(&[("GROQ_API_KEY", "k"), ("PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "PORT is not valid: http");

        let err = config(&[("GROQ_API_KEY", "k"), ("COMPLETION_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "COMPLETION_TIMEOUT_SECS", .. }));
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = config(&[("GROQ_API_KEY", "gsk_secret")]).unwrap();
        let printed = format!("{:?}", cfg);
        assert!(!printed.contains("gsk_secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
