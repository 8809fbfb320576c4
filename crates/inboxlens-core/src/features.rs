//! Optional actions advertised by the backend.

use inboxlens_api::HealthStatus;

/// An action the detail view offers only when the backend supports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Send the reply immediately.
    SendNow,
    /// Send the reply at a chosen time.
    ScheduleSend,
}

impl Feature {
    /// Key in the health response's `features` map.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::SendNow => "send_now",
            Self::ScheduleSend => "schedule_send",
        }
    }

    /// Button label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SendNow => "Send now",
            Self::ScheduleSend => "Schedule send",
        }
    }

    /// Notice shown when the action is unavailable.
    #[must_use]
    pub const fn unavailable_notice(&self) -> &'static str {
        match self {
            Self::SendNow => "Sending email is not available yet.",
            Self::ScheduleSend => "Scheduled sending is not available yet.",
        }
    }
}

/// Which optional features are enabled. Everything is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    send_now: bool,
    schedule_send: bool,
}

impl Capabilities {
    /// Reads the `features` map of a health response. Missing keys stay off.
    #[must_use]
    pub fn from_health(health: &HealthStatus) -> Self {
        let enabled = |feature: Feature| health.features.get(feature.key()).copied().unwrap_or(false);
        Self {
            send_now: enabled(Feature::SendNow),
            schedule_send: enabled(Feature::ScheduleSend),
        }
    }

    /// Returns true if `feature` may be used.
    #[must_use]
    pub const fn is_enabled(&self, feature: Feature) -> bool {
        match feature {
            Feature::SendNow => self.send_now,
            Feature::ScheduleSend => self.schedule_send,
        }
    }
}
