//! Dashboard records shared by both dashboard variants.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Profile of the signed-in user.
///
/// Always replaced wholesale; there is no per-field update path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Role label (e.g. "Admin").
    pub role: String,
    /// Contact email.
    pub email: String,
}

impl UserProfile {
    /// Creates a profile from its three fields.
    #[must_use]
    pub fn new(name: impl Into<String>, role: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            email: email.into(),
        }
    }

    /// Returns a copy of this profile with `!` appended to the name.
    #[must_use]
    pub fn emphasized(&self) -> Self {
        Self {
            name: format!("{}!", self.name),
            ..self.clone()
        }
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::new(
            constants::SEED_USER_NAME,
            constants::SEED_USER_ROLE,
            constants::SEED_USER_EMAIL,
        )
    }
}

/// Headline numbers displayed by the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Registered users.
    pub users: u64,
    /// Revenue in whole currency units.
    pub revenue: f64,
    /// Number of orders.
    pub orders: u64,
    /// Month-over-month growth, in percent.
    pub growth: f64,
}

impl StatsSummary {
    /// Returns a copy with `increment` users added.
    #[must_use]
    pub const fn with_more_users(self, increment: u64) -> Self {
        Self {
            users: self.users.saturating_add(increment),
            ..self
        }
    }
}

impl Default for StatsSummary {
    fn default() -> Self {
        Self {
            users: constants::SEED_USERS,
            revenue: constants::SEED_REVENUE,
            orders: constants::SEED_ORDERS,
            growth: constants::SEED_GROWTH,
        }
    }
}

/// One entry of the derived activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Position in the feed, starting at zero.
    pub id: u32,
    /// Human-readable description.
    pub text: String,
    /// Relative timestamp label, e.g. "3m ago".
    pub relative_time: String,
}

/// Color scheme of the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Which composition of the dashboard is mounted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Prop drilling, inline callbacks, no memoization.
    Before,
    /// Shared store, stable callbacks, memoized components.
    #[default]
    After,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasized_only_touches_name() {
        let user = UserProfile::default();
        let next = user.emphasized();
        assert_eq!(next.name, "John Doe!");
        assert_eq!(next.role, user.role);
        assert_eq!(next.email, user.email);
    }

    #[test]
    fn with_more_users_keeps_other_fields() {
        let stats = StatsSummary::default().with_more_users(10);
        assert_eq!(stats.users, 1244);
        assert_eq!(stats.orders, 890);
        assert!((stats.revenue - 56_780.0).abs() < f64::EPSILON);
        assert!((stats.growth - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn variant_serializes_lowercase() {
        let json = serde_json::to_string(&Variant::Before).unwrap_or_default();
        assert_eq!(json, "\"before\"");
    }
}
