pub mod config;
pub mod metrics;
pub mod report;
pub mod sampler;
pub mod server;
pub mod target;
