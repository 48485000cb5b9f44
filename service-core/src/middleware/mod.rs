pub mod metrics;
pub mod rate_limit;
pub mod security_headers;
pub mod tracing;

pub use rate_limit::{UnkeyedRateLimiter, create_unkeyed_rate_limiter, rate_limit_middleware};
pub use self::tracing::{REQUEST_ID_HEADER, request_id_middleware};
