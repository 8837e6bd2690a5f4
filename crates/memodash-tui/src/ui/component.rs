//! Component model and render gating.
//!
//! A [`Component`] turns its props into a [`Rendered`] view. A [`Mounted`]
//! component remembers the props and view of its last render and, under
//! [`RenderPolicy::WhenChanged`], hands the old view back when the new props
//! compare equal. Painting a view onto the terminal is separate and cheap;
//! "rendering" here is the work the gate exists to skip.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

/// Output of one render: a panel title and its body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Panel title.
    pub title: String,
    /// Body lines.
    pub lines: Vec<Line<'static>>,
}

impl Rendered {
    /// Creates a view from a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, lines: Vec<Line<'static>>) -> Self {
        Self {
            title: title.into(),
            lines,
        }
    }

    /// Body text without styling, one line per row.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Widget for &Rendered {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines.clone())
            .block(Block::bordered().title(self.title.as_str()))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

/// When a mounted component re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPolicy {
    /// Render on every composition pass.
    Always,
    /// Render only when props differ from the previous render's props.
    WhenChanged,
}

impl RenderPolicy {
    /// Decides whether a component with previous props `prev` must render
    /// for `next`. A component that never rendered always renders.
    #[must_use]
    pub fn should_render<P: PartialEq>(self, prev: Option<&P>, next: &P) -> bool {
        match self {
            Self::Always => true,
            Self::WhenChanged => prev != Some(next),
        }
    }
}

/// A pure view of its props.
pub trait Component {
    /// Everything the component reads. Nothing else may influence `render`.
    type Props: PartialEq;

    /// Name used in render counts and logs.
    fn name(&self) -> String;

    /// Produces the view for `props`.
    fn render(&mut self, props: &Self::Props) -> Rendered;
}

/// Per-dashboard count of renders by component name.
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct RenderLog {
    counts: Rc<RefCell<BTreeMap<String, u64>>>,
}

impl RenderLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one render of `name`.
    pub fn record(&self, name: &str) {
        let mut counts = self.counts.borrow_mut();
        let count = counts.entry(name.to_string()).or_insert(0);
        *count += 1;
        tracing::debug!(component = name, renders = *count, "rendered");
    }

    /// Renders recorded for `name`.
    #[must_use]
    pub fn count(&self, name: &str) -> u64 {
        self.counts.borrow().get(name).copied().unwrap_or(0)
    }

    /// Renders recorded across all components.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.borrow().values().sum()
    }

    /// Copy of all counters, ordered by name.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts.borrow().clone()
    }

    /// Resets every counter.
    pub fn clear(&self) {
        self.counts.borrow_mut().clear();
    }
}

/// A component instance with its last props and view.
pub struct Mounted<C: Component> {
    component: C,
    name: String,
    policy: RenderPolicy,
    props: Option<C::Props>,
    output: Option<Rc<Rendered>>,
    log: RenderLog,
}

impl<C: Component> Mounted<C> {
    /// Mounts `component`, recording its renders in `log`.
    pub fn new(component: C, policy: RenderPolicy, log: &RenderLog) -> Self {
        let name = component.name();
        Self {
            component,
            name,
            policy,
            props: None,
            output: None,
            log: log.clone(),
        }
    }

    /// Renders for `props` if the policy requires it, otherwise returns the
    /// previous view.
    pub fn update(&mut self, props: C::Props) -> Rc<Rendered> {
        if let Some(output) = &self.output {
            if !self.policy.should_render(self.props.as_ref(), &props) {
                return Rc::clone(output);
            }
        }
        let output = Rc::new(self.component.render(&props));
        self.log.record(&self.name);
        self.props = Some(props);
        self.output = Some(Rc::clone(&output));
        output
    }

    /// Props of the last render.
    pub const fn props(&self) -> Option<&C::Props> {
        self.props.as_ref()
    }

    /// View of the last render.
    pub fn output(&self) -> Option<Rc<Rendered>> {
        self.output.clone()
    }

    /// The component itself.
    pub const fn component(&self) -> &C {
        &self.component
    }

    /// Name used in the render log.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders recorded for this component's name.
    pub fn renders(&self) -> u64 {
        self.log.count(&self.name)
    }
}
