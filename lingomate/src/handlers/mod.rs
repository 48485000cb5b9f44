pub mod agent;
pub mod app;
pub mod metrics;
