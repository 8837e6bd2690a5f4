//! Recent activity panel.

use memodash_common::types::ActivityItem;
use memodash_core::feed;
use memodash_core::memo::MemoCell;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::component::{Component, Rendered};

/// Builds the panel for `items`.
#[must_use]
pub fn activity_feed_view(items: &[ActivityItem]) -> Rendered {
    let lines = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::raw(item.text.clone()),
                Span::raw("  "),
                Span::styled(item.relative_time.clone(), Style::new().fg(Color::DarkGray)),
            ])
        })
        .collect();
    Rendered::new("Recent Activity", lines)
}

/// Activity panel that derives its feed once and keeps it.
///
/// Takes no props; the feed depends on nothing the dashboard changes.
#[derive(Debug)]
pub struct ActivityFeed {
    len: usize,
    feed: MemoCell<(), Vec<ActivityItem>>,
}

impl ActivityFeed {
    /// Creates a panel showing `len` entries.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            len,
            feed: MemoCell::new(),
        }
    }

    /// Times the feed has been derived.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.feed.computations()
    }
}

impl Component for ActivityFeed {
    type Props = ();

    fn name(&self) -> String {
        "ActivityFeed".into()
    }

    fn render(&mut self, _: &()) -> Rendered {
        let len = self.len;
        let items = self.feed.compute_once((), || {
            tracing::debug!(len, "processing activities");
            feed::activity_feed(len)
        });
        activity_feed_view(&items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_is_derived_once_across_renders() {
        let mut panel = ActivityFeed::new(20);
        let first = panel.render(&());
        let second = panel.render(&());
        assert_eq!(first, second);
        assert_eq!(panel.computations(), 1);
        assert_eq!(first.lines.len(), 20);
    }
}
