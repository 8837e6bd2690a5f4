//! Active users panel.

use memodash_common::constants::USER_LIST_LEN;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::component::{Component, Rendered};
use super::format::format_count;

/// Builds the panel; `total_users` adds a total line when known.
#[must_use]
pub fn user_list_view(total_users: Option<u64>) -> Rendered {
    let muted = Style::new().fg(Color::DarkGray);
    let mut lines = Vec::with_capacity(USER_LIST_LEN + 1);
    if let Some(total) = total_users {
        lines.push(Line::from(Span::styled(
            format!("Total: {}", format_count(total)),
            muted,
        )));
    }
    lines.extend((1..=USER_LIST_LEN).map(|i| {
        Line::from(vec![
            Span::raw("👤 "),
            Span::raw(format!("User {i}  ")),
            Span::styled(format!("user{i}@example.com"), muted),
        ])
    }));
    Rendered::new("Active Users", lines)
}

/// Inputs of a [`UserList`]: only the number it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserListProps {
    /// Registered users.
    pub total_users: u64,
}

/// Active users panel reading only the user total.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserList;

impl Component for UserList {
    type Props = UserListProps;

    fn name(&self) -> String {
        "UserList".into()
    }

    fn render(&mut self, props: &UserListProps) -> Rendered {
        user_list_view(Some(props.total_users))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_line_is_optional() {
        let with_total = user_list_view(Some(1234));
        assert!(with_total.plain_text().starts_with("Total: 1,234"));
        assert_eq!(with_total.lines.len(), USER_LIST_LEN + 1);

        let without = user_list_view(None);
        assert_eq!(without.lines.len(), USER_LIST_LEN);
        assert!(without.plain_text().contains("user5@example.com"));
    }
}
