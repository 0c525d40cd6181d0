//! Rounded-border panels.
//!
//! A panel is a titled box spanning the output width:
//!
//! ```text
//! ╭ Title ───────────────╮
//! │ body, word-wrapped   │
//! ╰──────────────────────╯
//! ```
//!
//! The box is a ratatui `Paragraph` inside a `Block`, rendered into an
//! off-screen `Buffer` and read back as styled [`Line`]s; turning those into
//! escape sequences is left to [`crate::style`].

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Width used when the output is not a terminal.
pub const FALLBACK_WIDTH: u16 = 80;

/// Narrowest panel that still fits a corner, a label and padding.
pub const MIN_WIDTH: u16 = 8;

/// Columns between tab stops when expanding `\t`.
pub const TAB_SIZE: usize = 8;

/// Width of the attached terminal, or [`FALLBACK_WIDTH`].
pub fn output_width() -> u16 {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w)
        .unwrap_or(FALLBACK_WIDTH)
}

/// A titled block of styled text inside a rounded border.
#[derive(Debug, Clone)]
pub struct Panel<'a> {
    title: &'a str,
    body: &'a Text<'a>,
    border_style: Style,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str, body: &'a Text<'a>) -> Self {
        Self {
            title,
            body,
            border_style: Style::default(),
        }
    }

    /// Style for the border and the title label.
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Lay the panel out at `width` cells.
    ///
    /// Every returned line is exactly `width` cells wide (widths below
    /// [`MIN_WIDTH`] are raised to it).
    pub fn layout(&self, width: u16) -> Vec<Line<'static>> {
        let width = width.max(MIN_WIDTH);
        let body = expand_tabs(self.body);

        // two border columns, one padding column per side
        let rows = Paragraph::new(body.clone())
            .wrap(Wrap { trim: false })
            .line_count(width - 4);
        let height = u16::try_from(rows + 2).unwrap_or(u16::MAX);

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .padding(Padding::horizontal(1));
        if !self.title.is_empty() {
            block = block
                .title(format!(" {} ", self.title))
                .title_alignment(Alignment::Left)
                .title_style(self.border_style);
        }

        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        Paragraph::new(body)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, &mut buf);

        (0..height).map(|y| buffer_row(&buf, y)).collect()
    }
}

/// Read one buffer row back as spans, merging cells that share a style.
///
/// Cells hidden behind a wide character are skipped, the same way a
/// terminal backend would.
fn buffer_row(buf: &Buffer, y: u16) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut content = String::new();
    let mut current: Option<Style> = None;
    let mut skip = 0;

    for x in 0..buf.area.width {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        let cell = &buf[(x, y)];
        let symbol = cell.symbol();
        skip = symbol.width().saturating_sub(1);

        let style = cell_style(cell);
        if current != Some(style) {
            if let Some(prev) = current {
                spans.push(Span::styled(std::mem::take(&mut content), prev));
            }
            current = Some(style);
        }
        content.push_str(symbol);
    }
    if let Some(style) = current {
        spans.push(Span::styled(content, style));
    }
    Line::from(spans)
}

/// Cell style with terminal-default colors left unset.
fn cell_style(cell: &Cell) -> Style {
    let mut style = Style::default().add_modifier(cell.modifier);
    if cell.fg != Color::Reset {
        style = style.fg(cell.fg);
    }
    if cell.bg != Color::Reset {
        style = style.bg(cell.bg);
    }
    style
}

/// Replace tabs with spaces up to the next tab stop and drop other control
/// characters, so every character written occupies the cells it is
/// measured at.
pub fn expand_tabs(text: &Text) -> Text<'static> {
    let lines = text
        .lines
        .iter()
        .map(|line| {
            let mut column = 0;
            let spans = line
                .spans
                .iter()
                .map(|span| {
                    let mut content = String::with_capacity(span.content.len());
                    for c in span.content.chars() {
                        if c == '\t' {
                            let fill = TAB_SIZE - column % TAB_SIZE;
                            content.extend(std::iter::repeat(' ').take(fill));
                            column += fill;
                        } else if !c.is_control() {
                            content.push(c);
                            column += c.width().unwrap_or(0);
                        }
                    }
                    Span::styled(content, span.style)
                })
                .collect::<Vec<_>>();
            let mut out = Line::from(spans).style(line.style);
            out.alignment = line.alignment;
            out
        })
        .collect::<Vec<_>>();

    let mut out = Text::from(lines).style(text.style);
    out.alignment = text.alignment;
    out
}
