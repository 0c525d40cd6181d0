//! Panel collections.
//!
//! [`PanelSet`] keeps panels in insertion order with unique titles, the
//! same contract as an insertion-ordered dictionary.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};

use crate::style::{plain_text, styled, Palette};

/// Ordered mapping of panel title to panel body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSet {
    entries: Vec<(String, Text<'static>)>,
}

impl PanelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a panel at the end.
    ///
    /// Re-inserting an existing title replaces its body but keeps its
    /// original position.
    pub fn insert(&mut self, title: impl Into<String>, body: impl Into<Text<'static>>) {
        let title = title.into();
        let body = body.into();
        match self.entries.iter_mut().find(|(t, _)| *t == title) {
            Some(entry) => entry.1 = body,
            None => self.entries.push((title, body)),
        }
    }

    /// Builder-style [`PanelSet::insert`] for plain text bodies.
    pub fn with(mut self, title: impl Into<String>, body: &str) -> Self {
        self.insert(title, plain_text(body));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Text<'static>> {
        self.entries
            .iter()
            .find(|(t, _)| t == title)
            .map(|(_, body)| body)
    }

    /// Panels in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Text<'static>)> {
        self.entries.iter().map(|(t, body)| (t.as_str(), body))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(t, _)| t.as_str())
    }
}

impl<T, B> FromIterator<(T, B)> for PanelSet
where
    T: Into<String>,
    B: Into<Text<'static>>,
{
    fn from_iter<I: IntoIterator<Item = (T, B)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (title, body) in iter {
            set.insert(title, body);
        }
        set
    }
}

/// The four profile panels shown by the binary.
///
/// The wording is reproduced as published, including its credits. Inline
/// highlights use the palette's secondary color.
pub fn profile_panels(palette: &Palette) -> PanelSet {
    let link = palette.secondary_style();
    let icon = |glyph: &str, color: Color| styled(glyph, Style::default().fg(color));

    let languages = Text::from(vec![
        Line::default(),
        Line::from(
            "I dabble in a lot of different languages both here and at work. \
             But my open source work is primary focused around:",
        ),
        Line::default(),
        Line::from(vec![
            Span::raw(" "),
            icon("\u{e73c}", Color::Blue),
            Span::raw(" Python"),
        ]),
        Line::from(vec![
            Span::raw(" "),
            icon("\u{f1c0}", Color::Yellow),
            Span::raw(" SQL"),
        ]),
        Line::from(vec![
            Span::raw(" "),
            icon("\u{f120}", Color::Magenta),
            Span::raw(" Shell"),
        ]),
        Line::default(),
    ]);

    let citations = Text::from(vec![
        Line::default(),
        Line::from(vec![
            Span::raw("The code used to create this animation may be found at "),
            styled("paw-lu/paw-lu", link),
            Span::raw(". It was made with the help of two great Python libraries:"),
        ]),
        Line::default(),
        Line::from(vec![Span::raw(" • "), styled("nbedos/termtosvg", link)]),
        Line::from(vec![Span::raw(" • "), styled("willmcgugan/rich", link)]),
        Line::default(),
    ]);

    let mut panels = PanelSet::new();
    panels.insert(
        "Me",
        plain_text("\nHello, I'm Paulo — a data scientist currently at Facebook.\n"),
    );
    panels.insert(
        "Projects",
        plain_text(
            "\nHere, I work mostly on Python libraries, command-line interfaces, \
             and tools for working with data.\n",
        ),
    );
    panels.insert("Languages", languages);
    panels.insert("How this was made", citations);
    panels
}
