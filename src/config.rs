use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;

/// Leaderboard endpoint baked into the binary. Overridable via
/// `config.toml` or `--endpoint`, which is also how tests point the
/// fetcher at a local mock.
pub const DEFAULT_ENDPOINT: &str = "https://downtime-leaderboard-api.fly.dev/api/leaderboard";

#[derive(Deserialize, Debug, Default)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ServerConfig {
    pub listen_ip: Option<String>,
    pub port: Option<u16>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OutputConfig {
    pub dir: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config_str = match fs::read_to_string("config.toml") {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.api.endpoint.is_none());
        assert!(config.server.listen_ip.is_none());
        assert!(config.server.port.is_none());
        assert!(config.output.dir.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [api]
            endpoint = "http://127.0.0.1:9090/leaderboard"

            [server]
            listen_ip = "0.0.0.0"
            port = 8080

            [output]
            dir = "public"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.api.endpoint.as_deref(),
            Some("http://127.0.0.1:9090/leaderboard")
        );
        assert_eq!(config.server.listen_ip.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.output.dir.as_deref(), Some("public"));
    }
}
