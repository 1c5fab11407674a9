//! Dashboard load/refresh coordination.

pub mod coordinator;

pub use coordinator::{DEFAULT_REFRESH_INTERVAL, DashboardCoordinator};
