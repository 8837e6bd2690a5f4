//! Headline number cards.

use memodash_common::constants::{ORDERS_CHANGE, REVENUE_CHANGE};
use memodash_common::types::StatsSummary;
use memodash_core::callback::Callback;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::component::{Component, Rendered};
use super::format::{format_count, format_currency, format_decimal, format_percent};

/// Which headline number a card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Registered users.
    Users,
    /// Revenue.
    Revenue,
    /// Orders.
    Orders,
    /// Month-over-month growth.
    Growth,
}

impl StatKind {
    /// All cards in grid order.
    pub const ALL: [Self; 4] = [Self::Users, Self::Revenue, Self::Orders, Self::Growth];

    /// Card title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Users => "Total Users",
            Self::Revenue => "Revenue",
            Self::Orders => "Orders",
            Self::Growth => "Growth",
        }
    }

    /// Card icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Users => "👥",
            Self::Revenue => "💰",
            Self::Orders => "📦",
            Self::Growth => "📈",
        }
    }

    /// Resolves this card's props from the stats record.
    #[must_use]
    pub fn props(self, stats: &StatsSummary, on_update: Callback<()>) -> StatCardProps {
        let (value, change) = match self {
            Self::Users => (format_count(stats.users), stats.growth),
            Self::Revenue => (format_currency(stats.revenue), REVENUE_CHANGE),
            Self::Orders => (format_count(stats.orders), ORDERS_CHANGE),
            Self::Growth => (format_percent(stats.growth), stats.growth),
        };
        StatCardProps {
            title: self.title(),
            value,
            change,
            icon: self.icon(),
            on_update,
        }
    }
}

/// Inputs of a [`StatCard`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatCardProps {
    /// Card title.
    pub title: &'static str,
    /// Formatted headline value.
    pub value: String,
    /// Month-over-month change, in percent.
    pub change: f64,
    /// Card icon.
    pub icon: &'static str,
    /// Handler of the card's refresh button.
    pub on_update: Callback<()>,
}

/// A single headline number with its trend.
#[derive(Debug, Clone, Copy)]
pub struct StatCard {
    kind: StatKind,
}

impl StatCard {
    /// Creates the card for `kind`.
    #[must_use]
    pub const fn new(kind: StatKind) -> Self {
        Self { kind }
    }

    /// Which number this card shows.
    #[must_use]
    pub const fn kind(&self) -> StatKind {
        self.kind
    }
}

impl Component for StatCard {
    type Props = StatCardProps;

    fn name(&self) -> String {
        format!("StatCard \"{}\"", self.kind.title())
    }

    fn render(&mut self, props: &StatCardProps) -> Rendered {
        let (arrow, color) = if props.change >= 0.0 {
            ("↑", Color::Green)
        } else {
            ("↓", Color::Red)
        };
        let lines = vec![
            Line::from(vec![
                Span::raw(props.icon),
                Span::raw("  "),
                Span::styled("[s] Refresh", Style::new().fg(Color::DarkGray)),
            ]),
            Line::from(Span::styled(
                props.value.clone(),
                Style::new().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{arrow} {}% from last month",
                    format_decimal(props.change.abs())
                ),
                Style::new().fg(color),
            )),
        ];
        Rendered::new(props.title, lines)
    }
}
