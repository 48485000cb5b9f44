pub mod agent;
pub mod metrics;
pub mod providers;

pub use agent::LingoAgent;
