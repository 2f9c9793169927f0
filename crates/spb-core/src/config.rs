use std::{
    env, fmt, fs,
    net::SocketAddr,
    path::Path,
    time::Duration,
};

use crate::{errors::Error, Result};

/// Typed runtime configuration, loaded from the environment.
#[derive(Clone)]
pub struct Config {
    /// LINE channel access token, sent as a bearer token on replies.
    pub bot_token: String,
    /// LINE channel secret, the HMAC key for webhook signatures.
    pub bot_secret: String,
    /// Webhook listen port.
    pub port: u16,
    /// Base URL of the MLB Stats API.
    pub statsapi_base_url: String,
    /// Base URL of the LINE Messaging API.
    pub line_api_base_url: String,
    /// Timeout applied to every outbound HTTP request.
    pub http_timeout: Duration,
}

impl Config {
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));

        // Required env vars
        let bot_token = env_str("BOT_TOKEN").unwrap_or_default();
        let bot_secret = env_str("BOT_SECRET").unwrap_or_default();

        if bot_token.trim().is_empty() {
            return Err(Error::Config(
                "BOT_TOKEN environment variable is required".to_string(),
            ));
        }
        if bot_secret.trim().is_empty() {
            return Err(Error::Config(
                "BOT_SECRET environment variable is required".to_string(),
            ));
        }

        let port = env_u16("PORT").unwrap_or(5000);

        let statsapi_base_url = normalize_base_url(
            env_str("STATSAPI_BASE_URL").unwrap_or("https://statsapi.mlb.com".to_string()),
        );
        let line_api_base_url = normalize_base_url(
            env_str("LINE_API_BASE_URL").unwrap_or("https://api.line.me".to_string()),
        );

        let http_timeout = Duration::from_secs(env_u64("HTTP_TIMEOUT_SECS").unwrap_or(10));

        Ok(Self {
            bot_token,
            bot_secret,
            port,
            statsapi_base_url,
            line_api_base_url,
            http_timeout,
        })
    }

    /// Address the webhook server binds to.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

// Manual Debug so the channel credentials never reach logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("bot_secret", &"<redacted>")
            .field("port", &self.port)
            .field("statsapi_base_url", &self.statsapi_base_url)
            .field("line_api_base_url", &self.line_api_base_url)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

// Request paths start with '/', so a trailing slash here would double up.
fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        env::set_var(key, val);
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn env_u16(key: &str) -> Option<u16> {
    env_str(key).and_then(|s| s.trim().parse::<u16>().ok())
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|s| s.trim().parse::<u64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test owning the real env keys, so parallel test threads never
    // race on them.
    #[test]
    fn load_enforces_required_vars_and_applies_defaults() {
        for key in [
            "BOT_TOKEN",
            "BOT_SECRET",
            "PORT",
            "STATSAPI_BASE_URL",
            "LINE_API_BASE_URL",
            "HTTP_TIMEOUT_SECS",
        ] {
            env::remove_var(key);
        }

        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));

        env::set_var("BOT_TOKEN", "channel-access-token");
        let err = Config::load().unwrap_err();
        assert!(err.to_string().contains("BOT_SECRET"));

        env::set_var("BOT_SECRET", "channel-secret");
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.bot_token, "channel-access-token");
        assert_eq!(cfg.bot_secret, "channel-secret");
        assert_eq!(cfg.port, 5000);
        assert_eq!(cfg.statsapi_base_url, "https://statsapi.mlb.com");
        assert_eq!(cfg.line_api_base_url, "https://api.line.me");
        assert_eq!(cfg.http_timeout, Duration::from_secs(10));
        assert_eq!(cfg.listen_addr().to_string(), "0.0.0.0:5000");

        env::set_var("PORT", "8080");
        env::set_var("STATSAPI_BASE_URL", "http://127.0.0.1:9999/");
        env::set_var("HTTP_TIMEOUT_SECS", "3");
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.statsapi_base_url, "http://127.0.0.1:9999");
        assert_eq!(cfg.http_timeout, Duration::from_secs(3));

        for key in ["BOT_TOKEN", "BOT_SECRET", "PORT", "STATSAPI_BASE_URL", "HTTP_TIMEOUT_SECS"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn dotenv_file_fills_only_missing_vars() {
        let path = env::temp_dir().join(format!("spb-dotenv-test-{}", std::process::id()));
        fs::write(
            &path,
            "# comment\nSPB_TEST_PLAIN=alpha\nSPB_TEST_QUOTED=\"beta gamma\"\nSPB_TEST_KEPT=ignored\n",
        )
        .unwrap();

        env::remove_var("SPB_TEST_PLAIN");
        env::remove_var("SPB_TEST_QUOTED");
        env::set_var("SPB_TEST_KEPT", "original");

        load_dotenv_if_present(&path);

        assert_eq!(env::var("SPB_TEST_PLAIN").unwrap(), "alpha");
        assert_eq!(env::var("SPB_TEST_QUOTED").unwrap(), "beta gamma");
        assert_eq!(env::var("SPB_TEST_KEPT").unwrap(), "original");

        fs::remove_file(&path).unwrap();
        for key in ["SPB_TEST_PLAIN", "SPB_TEST_QUOTED", "SPB_TEST_KEPT"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let cfg = Config {
            bot_token: "tok-abc123".to_string(),
            bot_secret: "sec-def456".to_string(),
            port: 5000,
            statsapi_base_url: "https://statsapi.mlb.com".to_string(),
            line_api_base_url: "https://api.line.me".to_string(),
            http_timeout: Duration::from_secs(10),
        };

        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("tok-abc123"));
        assert!(!rendered.contains("sec-def456"));
        assert!(rendered.contains("<redacted>"));
    }
}
