use std::fmt::Display;

use crate::config::JaegerQueryConfig;

/// Accumulates a search URL for the embedded trace UI.
///
/// Values are appended verbatim: no escaping and no deduplication. Callers
/// pass URL-safe values.
#[derive(Debug, Clone)]
pub struct JaegerUrlSearch {
    url: String,
}

impl JaegerUrlSearch {
    /// Start from `{base}{path}?{ui_embed}={version}`.
    pub fn new(base: &str, config: &JaegerQueryConfig) -> Self {
        Self {
            url: format!(
                "{base}{}?{}={}",
                config.path, config.embed.ui_embed, config.embed.version
            ),
        }
    }

    pub fn add_query_param(&mut self, param: &str, value: impl Display) {
        self.url.push_str(&format!("&{param}={value}"));
    }

    /// Append a flag with no value.
    pub fn add_param(&mut self, param: &str) {
        self.url.push('&');
        self.url.push_str(param);
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn into_url(self) -> String {
        self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_embed_marker() {
        let request = JaegerUrlSearch::new("http://x", &JaegerQueryConfig::default());
        assert_eq!(request.url(), "http://x/search?uiEmbed=v0");
    }

    #[test]
    fn params_keep_call_order_without_dedup() {
        let mut request = JaegerUrlSearch::new("http://x", &JaegerQueryConfig::default());
        request.add_query_param("limit", 20);
        request.add_param("raw");
        request.add_query_param("limit", "50");
        request.add_query_param("hide", true);

        assert_eq!(
            request.into_url(),
            "http://x/search?uiEmbed=v0&limit=20&raw&limit=50&hide=true"
        );
    }

    #[test]
    fn values_are_not_escaped() {
        let mut request = JaegerUrlSearch::new("", &JaegerQueryConfig::default());
        request.add_query_param("tags", r#"{"error":"true"}"#);
        assert_eq!(request.url(), r#"/search?uiEmbed=v0&tags={"error":"true"}"#);
    }

    #[test]
    fn uses_configured_path_and_version() {
        let mut config = JaegerQueryConfig::default();
        config.path = "/jaeger/search".to_string();
        config.embed.version = "v1".to_string();

        let request = JaegerUrlSearch::new("https://tracing.local", &config);
        assert_eq!(
            request.url(),
            "https://tracing.local/jaeger/search?uiEmbed=v1"
        );
    }
}
