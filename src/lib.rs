pub mod api;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod metrics;
pub mod optimizer;
pub mod rng;
pub mod simulator;
pub mod spec;
pub mod validator;
// cmd and reports are binary modules (declared in main.rs).

pub use self::error::{ReelTuneError, RtResult};
pub use self::spec::GameSpec;
