//! Render count reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use memodash_common::types::Variant;
use serde::Serialize;

use crate::ui::dashboard::Dashboard;

/// Render counts of one dashboard after a sequence of steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    /// Dashboard variant.
    pub variant: Variant,
    /// When the counts were captured.
    pub generated_at: DateTime<Utc>,
    /// Steps applied after the first composition pass.
    pub steps: Vec<String>,
    /// Renders per component name.
    pub renders: BTreeMap<String, u64>,
    /// Sum of `renders`.
    pub total_renders: u64,
    /// Times the activity feed was derived.
    pub activity_computations: u64,
}

impl RenderReport {
    /// Captures the current counts of `dashboard`.
    #[must_use]
    pub fn capture(dashboard: &dyn Dashboard, steps: Vec<String>) -> Self {
        let log = dashboard.render_log();
        Self {
            variant: dashboard.variant(),
            generated_at: Utc::now(),
            steps,
            renders: log.snapshot(),
            total_renders: log.total(),
            activity_computations: dashboard.activity_computations(),
        }
    }

    /// Renders recorded for `component`.
    #[must_use]
    pub fn renders_of(&self, component: &str) -> u64 {
        self.renders.get(component).copied().unwrap_or(0)
    }
}
