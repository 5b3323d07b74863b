use chrono::{Local, TimeZone};
use jaeger_types::{AppState, JaegerAction, Lookback};
use tokio::sync::mpsc;

use crate::api::ServicesApi;
use crate::config::JaegerQueryConfig;
use crate::jaeger::lookback::unix_timestamps_in_ms_from_form;
use crate::jaeger::tags::conv_tags_logfmt;
use crate::jaeger::url::JaegerUrlSearch;

/// Sink for state-update messages.
pub trait Dispatch {
    fn dispatch(&self, action: JaegerAction);
}

impl Dispatch for mpsc::UnboundedSender<JaegerAction> {
    fn dispatch(&self, action: JaegerAction) {
        if self.send(action).is_err() {
            tracing::warn!("Action receiver dropped; update lost");
        }
    }
}

/// Fetch the service names of `namespace` into state.
///
/// Without a session token nothing is requested and nothing is dispatched.
/// Otherwise `RequestStarted` goes out first, followed by exactly one of
/// `ReceiveList` or `RequestFailed`. The failure carries no detail.
pub async fn async_fetch_services<A, D>(state: &AppState, api: &A, dispatch: &D, namespace: &str)
where
    A: ServicesApi + ?Sized,
    D: Dispatch + ?Sized,
{
    let Some(token) = state.authentication.token() else {
        tracing::debug!(namespace = %namespace, "No session token; skipping service fetch");
        return;
    };
    let auth = format!("Bearer {token}");

    dispatch.dispatch(JaegerAction::RequestStarted);

    match api.get_services(&auth, namespace).await {
        Ok(list) => {
            let services = list.names();
            tracing::debug!(
                namespace = %namespace,
                count = services.len(),
                "Fetched services"
            );
            dispatch.dispatch(JaegerAction::ReceiveList { services });
        }
        Err(e) => {
            tracing::warn!(namespace = %namespace, error = %e, "Failed to fetch services");
            dispatch.dispatch(JaegerAction::RequestFailed);
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Build the embedded search URL from the current form state and dispatch it.
pub fn get_search_url<D>(state: &AppState, config: &JaegerQueryConfig, dispatch: &D) -> String
where
    D: Dispatch + ?Sized,
{
    let jaeger_state = &state.jaeger_state;
    let search = &jaeger_state.search;
    let options = &config.options;
    let mut request = JaegerUrlSearch::new(&jaeger_state.jaeger_url, config);

    request.add_query_param(&options.start_time, &search.start);
    request.add_query_param(&options.end_time, &search.end);
    request.add_query_param(&options.limit_traces, search.limit);
    request.add_query_param(&options.lookback, search.lookback);
    request.add_query_param(&options.max_duration, &search.max_duration);
    request.add_query_param(&options.min_duration, &search.min_duration);
    request.add_query_param(
        &options.service_selector,
        format!("{}.{}", search.service_selected, search.namespace_selected),
    );
    if let Some(tags) = conv_tags_logfmt(&search.tags) {
        request.add_query_param(&options.tags, tags);
    }

    let trace = &jaeger_state.trace;
    request.add_query_param(&config.embed.ui_trace_hide_minimap, flag(trace.hide_minimap));
    request.add_query_param(&config.embed.ui_search_hide_graph, flag(search.hide_graph));
    request.add_query_param(&config.embed.ui_trace_hide_summary, flag(trace.hide_summary));

    let url = request.into_url();
    dispatch.dispatch(JaegerAction::SetSearchRequest { url: url.clone() });
    url
}

/// Set explicit range bounds from the date/time form fields, read in the
/// local time zone. Only applies while the lookback is `custom`.
pub fn set_custom_lookback<D>(
    state: &AppState,
    dispatch: &D,
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
) where
    D: Dispatch + ?Sized,
{
    set_custom_lookback_in(
        &Local,
        state,
        dispatch,
        start_date,
        start_time,
        end_date,
        end_time,
    );
}

pub fn set_custom_lookback_in<Tz, D>(
    tz: &Tz,
    state: &AppState,
    dispatch: &D,
    start_date: &str,
    start_time: &str,
    end_date: &str,
    end_time: &str,
) where
    Tz: TimeZone,
    D: Dispatch + ?Sized,
{
    if state.jaeger_state.search.lookback != Lookback::Custom {
        return;
    }

    match unix_timestamps_in_ms_from_form(tz, start_date, start_time, end_date, end_time) {
        Ok(range) => dispatch.dispatch(JaegerAction::SetCustomLookback {
            start: range.start,
            end: range.end,
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring custom lookback with unreadable bounds");
        }
    }
}
