//! Shared types for the embedded trace-search integration
//!
//! These types are used by both:
//! - the state container and its actions (native Rust)
//! - the web front end (exported to TypeScript)
//!
//! Serializable with serde for JSON over HTTP

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

// ============================================================================
// Backend Payloads
// ============================================================================

/// Namespace reference attached to a service listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct NamespaceRef {
    pub name: String,
}

/// One entry of the services endpoint. Only `name` is consumed here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct ServiceOverview {
    pub name: String,
    #[serde(default)]
    pub istio_sidecar: bool,
    #[serde(default)]
    pub app_label: bool,
}

/// Body of `GET /api/namespaces/{ns}/services`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct ServiceList {
    #[serde(default)]
    pub namespace: Option<NamespaceRef>,
    pub services: Vec<ServiceOverview>,
}

impl ServiceList {
    /// Service names in payload order.
    pub fn names(self) -> Vec<String> {
        self.services.into_iter().map(|s| s.name).collect()
    }
}

// ============================================================================
// Search State
// ============================================================================

/// Time window for a trace search.
///
/// `Custom` is the sentinel that enables explicit start/end bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub enum Lookback {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "2h")]
    TwoHours,
    #[serde(rename = "3h")]
    ThreeHours,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "12h")]
    TwelveHours,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "2d")]
    TwoDays,
    #[serde(rename = "custom")]
    Custom,
}

impl Lookback {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lookback::FiveMinutes => "5m",
            Lookback::FifteenMinutes => "15m",
            Lookback::ThirtyMinutes => "30m",
            Lookback::OneHour => "1h",
            Lookback::TwoHours => "2h",
            Lookback::ThreeHours => "3h",
            Lookback::SixHours => "6h",
            Lookback::TwelveHours => "12h",
            Lookback::OneDay => "24h",
            Lookback::TwoDays => "2d",
            Lookback::Custom => "custom",
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lookback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5m" => Ok(Lookback::FiveMinutes),
            "15m" => Ok(Lookback::FifteenMinutes),
            "30m" => Ok(Lookback::ThirtyMinutes),
            "1h" => Ok(Lookback::OneHour),
            "2h" => Ok(Lookback::TwoHours),
            "3h" => Ok(Lookback::ThreeHours),
            "6h" => Ok(Lookback::SixHours),
            "12h" => Ok(Lookback::TwelveHours),
            "24h" => Ok(Lookback::OneDay),
            "2d" => Ok(Lookback::TwoDays),
            "custom" => Ok(Lookback::Custom),
            other => Err(format!("Unknown lookback: {other}")),
        }
    }
}

/// Search form fields for the embedded trace UI
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct JaegerSearchOptions {
    /// Custom range start, epoch microseconds as text (empty when unset)
    pub start: String,
    /// Custom range end, epoch microseconds as text (empty when unset)
    pub end: String,
    pub limit: u32,
    pub lookback: Lookback,
    pub max_duration: String,
    pub min_duration: String,
    pub service_selected: String,
    pub namespace_selected: String,
    /// Free-text logfmt tag filter, e.g. `http.status_code=200 error=true`
    pub tags: String,
    pub hide_graph: bool,
}

impl Default for JaegerSearchOptions {
    fn default() -> Self {
        Self {
            start: String::new(),
            end: String::new(),
            limit: 20,
            lookback: Lookback::default(),
            max_duration: String::new(),
            min_duration: String::new(),
            service_selected: String::new(),
            namespace_selected: String::new(),
            tags: String::new(),
            hide_graph: false,
        }
    }
}

/// Display toggles for the embedded trace view
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct JaegerTraceOptions {
    pub hide_minimap: bool,
    pub hide_summary: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct JaegerState {
    /// Base URL of the trace UI the search URL is built on
    pub jaeger_url: String,
    pub services: Vec<String>,
    pub is_fetching_service: bool,
    pub search: JaegerSearchOptions,
    pub trace: JaegerTraceOptions,
    /// Last search URL produced for the embedded view
    pub search_url: Option<String>,
}

// ============================================================================
// Authentication
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub expires_on: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct AuthenticationState {
    pub session: Option<Session>,
}

impl AuthenticationState {
    /// Token of the current session, if any.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Slice of application state read by the trace-search actions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub struct AppState {
    pub authentication: AuthenticationState,
    pub jaeger_state: JaegerState,
}

// ============================================================================
// Actions
// ============================================================================

/// State-update messages produced by the trace-search actions
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "type")]
#[ts(export, export_to = "../../jaeger-ui/bindings/jaeger.ts")]
pub enum JaegerAction {
    /// Service list request went out
    RequestStarted,

    /// Service list arrived; replaces the previous list
    ReceiveList { services: Vec<String> },

    /// Service list request failed
    RequestFailed,

    /// Search URL for the embedded view
    SetSearchRequest { url: String },

    /// Custom lookback bounds, epoch microseconds as text
    SetCustomLookback { start: String, end: String },

    SetJaegerUrl { url: String },
    SetNamespace { namespace: String },
    SetService { service: String },
    SetLookback { lookback: Lookback },
    SetTags { tags: String },
    SetLimit { limit: u32 },
    SetDurations { min: String, max: String },
    HideSearchGraph { hide: bool },
    HideTraceMinimap { hide: bool },
    HideTraceSummary { hide: bool },
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_service_list_deserializes_backend_payload() {
        let json = r#"{
            "namespace": {"name": "bookinfo"},
            "services": [
                {"name": "details", "istioSidecar": true, "appLabel": true},
                {"name": "productpage"},
                {"name": "reviews", "health": {"requests": {}}}
            ]
        }"#;

        let list: ServiceList = serde_json::from_str(json).unwrap();
        assert_eq!(list.namespace.as_ref().unwrap().name, "bookinfo");
        assert!(list.services[0].istio_sidecar);
        assert!(!list.services[1].app_label);
        assert_eq!(list.names(), vec!["details", "productpage", "reviews"]);
    }

    #[test]
    fn test_service_list_requires_services() {
        let result = serde_json::from_str::<ServiceList>(r#"{"namespace": {"name": "x"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_lookback_text_forms() {
        assert_eq!(Lookback::default().to_string(), "1h");
        assert_eq!(Lookback::Custom.as_str(), "custom");
        assert_eq!(Lookback::from_str("2d").unwrap(), Lookback::TwoDays);
        assert!(Lookback::from_str("3d").is_err());

        for lookback in [Lookback::FiveMinutes, Lookback::OneDay, Lookback::Custom] {
            let json = serde_json::to_string(&lookback).unwrap();
            assert_eq!(json, format!("\"{}\"", lookback.as_str()));
        }

        let json = serde_json::to_string(&Lookback::FifteenMinutes).unwrap();
        assert_eq!(json, "\"15m\"");
    }

    #[test]
    fn test_search_options_defaults() {
        let options = JaegerSearchOptions::default();
        assert_eq!(options.limit, 20);
        assert_eq!(options.lookback, Lookback::OneHour);
        assert!(options.tags.is_empty());
        assert!(!options.hide_graph);
    }

    #[test]
    fn test_action_protocol_is_tagged() {
        let action = JaegerAction::ReceiveList {
            services: vec!["details".to_string()],
        };

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "ReceiveList");
        assert_eq!(json["services"][0], "details");

        let back: JaegerAction = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_authentication_token() {
        let mut auth = AuthenticationState::default();
        assert_eq!(auth.token(), None);

        auth.session = Some(Session {
            token: "abc".to_string(),
            expires_on: None,
        });
        assert_eq!(auth.token(), Some("abc"));
    }

    #[test]
    fn export_types() {
        // Export all types to TypeScript
        // The export_to attribute in each type's #[ts] macro specifies the output file
        let config = Config::default();
        NamespaceRef::export(&config).unwrap();
        ServiceOverview::export(&config).unwrap();
        ServiceList::export(&config).unwrap();
        Lookback::export(&config).unwrap();
        JaegerSearchOptions::export(&config).unwrap();
        JaegerTraceOptions::export(&config).unwrap();
        JaegerState::export(&config).unwrap();
        Session::export(&config).unwrap();
        AuthenticationState::export(&config).unwrap();
        AppState::export(&config).unwrap();
        JaegerAction::export(&config).unwrap();
    }
}
