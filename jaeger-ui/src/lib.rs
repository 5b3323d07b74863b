pub mod api;
pub mod config;
pub mod jaeger;
pub mod store;
pub mod telemetry;

pub use api::*;
pub use config::*;
pub use jaeger::*;
pub use store::*;
