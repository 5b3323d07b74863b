use jaeger_types::{JaegerAction, JaegerState};

pub fn apply_jaeger_action(state: &mut JaegerState, action: JaegerAction) {
    match action {
        JaegerAction::RequestStarted => {
            state.is_fetching_service = true;
        }
        JaegerAction::ReceiveList { services } => {
            state.services = services;
            state.is_fetching_service = false;
        }
        JaegerAction::RequestFailed => {
            state.is_fetching_service = false;
        }
        JaegerAction::SetSearchRequest { url } => {
            state.search_url = Some(url);
        }
        JaegerAction::SetCustomLookback { start, end } => {
            state.search.start = start;
            state.search.end = end;
        }
        JaegerAction::SetJaegerUrl { url } => {
            state.jaeger_url = url;
        }
        JaegerAction::SetNamespace { namespace } => {
            // A service belongs to one namespace.
            if state.search.namespace_selected != namespace {
                state.search.service_selected.clear();
            }
            state.search.namespace_selected = namespace;
        }
        JaegerAction::SetService { service } => {
            state.search.service_selected = service;
        }
        JaegerAction::SetLookback { lookback } => {
            state.search.lookback = lookback;
        }
        JaegerAction::SetTags { tags } => {
            state.search.tags = tags;
        }
        JaegerAction::SetLimit { limit } => {
            state.search.limit = limit;
        }
        JaegerAction::SetDurations { min, max } => {
            state.search.min_duration = min;
            state.search.max_duration = max;
        }
        JaegerAction::HideSearchGraph { hide } => {
            state.search.hide_graph = hide;
        }
        JaegerAction::HideTraceMinimap { hide } => {
            state.trace.hide_minimap = hide;
        }
        JaegerAction::HideTraceSummary { hide } => {
            state.trace.hide_summary = hide;
        }
    }
}
