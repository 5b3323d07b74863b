use std::time::Duration;

/// Query-parameter keys that switch the trace UI into embedded mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedKeys {
    pub ui_embed: String,
    pub version: String,
    pub ui_search_hide_graph: String,
    pub ui_trace_hide_minimap: String,
    pub ui_trace_hide_summary: String,
}

impl Default for EmbedKeys {
    fn default() -> Self {
        Self {
            ui_embed: "uiEmbed".to_string(),
            version: "v0".to_string(),
            ui_search_hide_graph: "uiSearchHideGraph".to_string(),
            ui_trace_hide_minimap: "uiTimelineHideMinimap".to_string(),
            ui_trace_hide_summary: "uiTimelineCollapseTitle".to_string(),
        }
    }
}

/// Query-parameter keys of the trace search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptionKeys {
    pub start_time: String,
    pub end_time: String,
    pub limit_traces: String,
    pub lookback: String,
    pub max_duration: String,
    pub min_duration: String,
    pub service_selector: String,
    pub tags: String,
}

impl Default for SearchOptionKeys {
    fn default() -> Self {
        Self {
            start_time: "start".to_string(),
            end_time: "end".to_string(),
            limit_traces: "limit".to_string(),
            lookback: "lookback".to_string(),
            max_duration: "maxDuration".to_string(),
            min_duration: "minDuration".to_string(),
            service_selector: "service".to_string(),
            tags: "tags".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JaegerQueryConfig {
    /// Path of the search page, appended to the trace UI base URL
    pub path: String,
    pub embed: EmbedKeys,
    pub options: SearchOptionKeys,
}

impl Default for JaegerQueryConfig {
    fn default() -> Self {
        Self {
            path: "/search".to_string(),
            embed: EmbedKeys::default(),
            options: SearchOptionKeys::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend API serving namespace services
    pub api_base: String,
    /// Upper bound for a single backend request
    pub request_timeout: Duration,
    pub jaeger: JaegerQueryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:20001".to_string(),
            request_timeout: Duration::from_secs(10),
            jaeger: JaegerQueryConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = JaegerQueryConfig::default();
        let embed = EmbedKeys {
            version: env_str("JAEGER_UI_EMBED_VERSION", &defaults.embed.version),
            ..defaults.embed
        };

        let api_base = env_str("JAEGER_UI_API_BASE", "http://localhost:20001");

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(env_parse(
                "JAEGER_UI_REQUEST_TIMEOUT_SECS",
                10,
            )?),
            jaeger: JaegerQueryConfig {
                path: env_str("JAEGER_UI_QUERY_PATH", &defaults.path),
                embed,
                options: defaults.options,
            },
        })
    }
}

fn env_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse env var {key}={val}: {e}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keys_match_embedded_ui_contract() {
        let config = JaegerQueryConfig::default();
        assert_eq!(config.path, "/search");
        assert_eq!(config.embed.ui_embed, "uiEmbed");
        assert_eq!(config.embed.version, "v0");
        assert_eq!(config.options.service_selector, "service");
        assert_eq!(config.options.max_duration, "maxDuration");
    }

    #[test]
    fn from_env_keeps_fixed_parameter_keys() {
        let config = Config::from_env().unwrap();
        assert_eq!(config.jaeger.options, SearchOptionKeys::default());
        assert_eq!(config.jaeger.embed.ui_embed, "uiEmbed");
        assert!(!config.api_base.ends_with('/'));
    }

    #[test]
    fn env_parse_falls_back_to_default_when_unset() {
        let value: u64 = env_parse("JAEGER_UI_TEST_UNSET_VALUE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn env_parse_rejects_garbage() {
        std::env::set_var("JAEGER_UI_TEST_GARBAGE_TIMEOUT", "ten");
        let result: anyhow::Result<u64> = env_parse("JAEGER_UI_TEST_GARBAGE_TIMEOUT", 10);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("JAEGER_UI_TEST_GARBAGE_TIMEOUT=ten"));
        std::env::remove_var("JAEGER_UI_TEST_GARBAGE_TIMEOUT");
    }
}
