//! Signed-in user card.

use memodash_common::types::UserProfile;
use memodash_core::callback::Callback;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use super::component::{Component, Rendered};

/// Inputs of a [`ProfileCard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileProps {
    /// The signed-in user.
    pub user: UserProfile,
    /// Handler of the rename button.
    pub on_rename: Callback<()>,
}

/// Card showing who is signed in. Reads the user record only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileCard;

impl Component for ProfileCard {
    type Props = ProfileProps;

    fn name(&self) -> String {
        "ProfileCard".into()
    }

    fn render(&mut self, props: &ProfileProps) -> Rendered {
        let muted = Style::new().fg(Color::DarkGray);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    props.user.name.clone(),
                    Style::new().add_modifier(Modifier::BOLD),
                ),
                Span::raw(" · "),
                Span::raw(props.user.role.clone()),
                Span::raw("  "),
                Span::styled(props.user.email.clone(), muted),
                Span::raw("  "),
                Span::styled("[u] Rename", muted),
            ]),
        ];
        Rendered::new("Signed In", lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_all_profile_fields() {
        let props = ProfileProps {
            user: UserProfile::default(),
            on_rename: Callback::new(|()| Ok(())),
        };
        let view = ProfileCard.render(&props);
        let text = view.plain_text();
        assert!(text.contains("John Doe"));
        assert!(text.contains("Admin"));
        assert!(text.contains("john@example.com"));
    }
}
