use log::Level;

pub struct Config;

impl Config {
    /// Base URL of the events API, baked in at build time.
    ///
    /// Empty means relative URLs, for deployments where the dev server or
    /// nginx proxies the API on the same origin.
    pub fn api_base_url() -> String {
        option_env!("SHOWTIME_API_URL")
            .unwrap_or("")
            .trim_end_matches('/')
            .to_string()
    }

    pub fn log_level() -> Level {
        Self::parse_log_level(option_env!("SHOWTIME_LOG_LEVEL")).unwrap_or(if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        })
    }

    fn parse_log_level(raw: Option<&str>) -> Option<Level> {
        raw.and_then(|value| value.trim().parse::<Level>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(Config::parse_log_level(Some("warn")), Some(Level::Warn));
        assert_eq!(Config::parse_log_level(Some(" TRACE ")), Some(Level::Trace));
        assert_eq!(Config::parse_log_level(Some("loud")), None);
        assert_eq!(Config::parse_log_level(None), None);
    }
}
