pub mod health;

pub use health::{health_routes, ComponentHealth, HealthResponse, HealthState, HealthStatus};
