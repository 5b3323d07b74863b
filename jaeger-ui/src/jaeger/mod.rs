//! Trace-search actions for the embedded Jaeger view
//!
//! - `tags`: logfmt tag filter to JSON
//! - `url`: search URL accumulator
//! - `lookback`: date/time form fields to range bounds
//! - `effects`: the actions, reading an explicit state snapshot
//! - `state`: how actions change state

pub mod effects;
pub mod lookback;
pub mod state;
pub mod tags;
pub mod url;

pub use effects::{
    async_fetch_services, get_search_url, set_custom_lookback, set_custom_lookback_in, Dispatch,
};
pub use lookback::{unix_timestamps_in_ms_from_form, CustomLookback, LookbackError};
pub use state::apply_jaeger_action;
pub use tags::conv_tags_logfmt;
pub use url::JaegerUrlSearch;
