//! Backend health and statistics fetch state.

use inboxlens_api::HealthStatus;
use inboxlens_core::StatsView;

/// Last known backend health.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BackendHealth {
    #[default]
    Checking,
    Online,
    /// Reachable but not reporting healthy.
    Degraded(String),
    Offline(String),
}

impl BackendHealth {
    pub fn from_result(result: &Result<HealthStatus, String>) -> Self {
        match result {
            Ok(status) if status.is_healthy() => Self::Online,
            Ok(status) => Self::Degraded(
                status
                    .message
                    .clone()
                    .unwrap_or_else(|| status.status.clone()),
            ),
            Err(err) => Self::Offline(err.clone()),
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Checking => "Checking...",
            Self::Online => "Backend online",
            Self::Degraded(_) => "Backend degraded",
            Self::Offline(_) => "Backend offline",
        }
    }
}

/// Statistics fetch state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StatsState {
    #[default]
    Idle,
    Loading,
    Loaded(StatsView),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_from_result() {
        let healthy = HealthStatus {
            status: "healthy".into(),
            ..HealthStatus::default()
        };
        assert_eq!(BackendHealth::from_result(&Ok(healthy)), BackendHealth::Online);

        let degraded = HealthStatus {
            status: "degraded".into(),
            message: Some("Database unavailable".into()),
            ..HealthStatus::default()
        };
        assert_eq!(
            BackendHealth::from_result(&Ok(degraded)),
            BackendHealth::Degraded("Database unavailable".into())
        );

        let offline = BackendHealth::from_result(&Err("No response".into()));
        assert_eq!(offline.label(), "Backend offline");
    }
}
