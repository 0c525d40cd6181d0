//! Styled text and ANSI conversion.
//!
//! Text is carried around as ratatui `Text`/`Line`/`Span` values with a
//! `Style` attached, and only turned into escape sequences at the moment it
//! is written. This module owns that conversion plus the two-color palette
//! the animation is drawn with.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

use crate::error::{RenderError, RenderResult};

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Parse a color value.
///
/// Accepts named colors (`blue`, `light-magenta`, ...), a 256-palette index
/// (`208`) and 24-bit hex (`#BB86FC`).
pub fn parse_color(value: &str) -> RenderResult<Color> {
    value
        .trim()
        .parse::<Color>()
        .map_err(|_| RenderError::InvalidColor {
            value: value.to_string(),
        })
}

/// The two colors the animation is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Title, panel borders and the percentage readout
    pub primary: Color,
    /// Title underline, progress bar fill and inline highlights
    pub secondary: Color,
    /// Emit escape sequences; off for plain output
    pub color: bool,
}

impl Palette {
    pub fn new(primary: Color, secondary: Color) -> Self {
        Self {
            primary,
            secondary,
            color: true,
        }
    }

    /// Parse both colors, failing on the first invalid one.
    pub fn parse(primary: &str, secondary: &str) -> RenderResult<Self> {
        Ok(Self::new(parse_color(primary)?, parse_color(secondary)?))
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// [`paint`], or the bare text when color is off.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            paint(text, style)
        } else {
            text.to_string()
        }
    }

    /// [`line_to_ansi`], or [`line_to_plain`] when color is off.
    pub fn line(&self, line: &Line) -> String {
        if self.color {
            line_to_ansi(line)
        } else {
            line_to_plain(line)
        }
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn secondary_style(&self) -> Style {
        Style::default().fg(self.secondary)
    }

    /// Bold primary, used for the title banner.
    pub fn title_style(&self) -> Style {
        self.primary_style().add_modifier(Modifier::BOLD)
    }
}

/// Append the SGR sequence for a foreground color.
///
/// # Returns
/// `true` if a code was appended, `false` if the color is unset or `Reset`
pub fn push_fg(color: Option<Color>, buf: &mut String) -> bool {
    push_color(color, buf, 30, 90, 38)
}

/// Append the SGR sequence for a background color.
///
/// # Returns
/// `true` if a code was appended, `false` if the color is unset or `Reset`
pub fn push_bg(color: Option<Color>, buf: &mut String) -> bool {
    push_color(color, buf, 40, 100, 48)
}

fn push_color(color: Option<Color>, buf: &mut String, base: u8, bright: u8, extended: u8) -> bool {
    let code = match color {
        None | Some(Color::Reset) => return false,
        Some(Color::Black) => base,
        Some(Color::Red) => base + 1,
        Some(Color::Green) => base + 2,
        Some(Color::Yellow) => base + 3,
        Some(Color::Blue) => base + 4,
        Some(Color::Magenta) => base + 5,
        Some(Color::Cyan) => base + 6,
        Some(Color::Gray) => base + 7,
        Some(Color::DarkGray) => bright,
        Some(Color::LightRed) => bright + 1,
        Some(Color::LightGreen) => bright + 2,
        Some(Color::LightYellow) => bright + 3,
        Some(Color::LightBlue) => bright + 4,
        Some(Color::LightMagenta) => bright + 5,
        Some(Color::LightCyan) => bright + 6,
        Some(Color::White) => bright + 7,
        Some(Color::Indexed(n)) => {
            buf.push_str(&format!("\x1b[{};5;{}m", extended, n));
            return true;
        }
        Some(Color::Rgb(r, g, b)) => {
            buf.push_str(&format!("\x1b[{};2;{};{};{}m", extended, r, g, b));
            return true;
        }
    };
    buf.push_str(&format!("\x1b[{}m", code));
    true
}

/// Append SGR codes for text attributes (bold, dim, italic, underline, reverse).
///
/// # Returns
/// `true` if at least one code was appended
pub fn push_attrs(modifier: Modifier, buf: &mut String) -> bool {
    const ATTRS: [(Modifier, &str); 5] = [
        (Modifier::BOLD, "\x1b[1m"),
        (Modifier::DIM, "\x1b[2m"),
        (Modifier::ITALIC, "\x1b[3m"),
        (Modifier::UNDERLINED, "\x1b[4m"),
        (Modifier::REVERSED, "\x1b[7m"),
    ];

    let mut any = false;
    for (attr, code) in ATTRS {
        if modifier.contains(attr) {
            buf.push_str(code);
            any = true;
        }
    }
    any
}

/// Append `text` wrapped in the escape sequences for `style`.
///
/// Unstyled text is appended as-is, without a trailing reset.
pub fn push_styled(text: &str, style: Style, buf: &mut String) {
    let start = buf.len();
    let mut styled = push_attrs(style.add_modifier, buf);
    styled |= push_fg(style.fg, buf);
    styled |= push_bg(style.bg, buf);
    if styled && text.is_empty() {
        buf.truncate(start);
        return;
    }
    buf.push_str(text);
    if styled {
        buf.push_str(ANSI_RESET);
    }
}

/// Format text with a style (for direct CLI output).
pub fn paint(text: &str, style: Style) -> String {
    let mut buf = String::with_capacity(text.len() + 16);
    push_styled(text, style, &mut buf);
    buf
}

/// Convert a line to an escape-sequence string.
///
/// Span styles are patched over the line style, so a span only needs to
/// carry what differs from its line.
pub fn line_to_ansi(line: &Line) -> String {
    let mut buf = String::new();
    for span in &line.spans {
        push_styled(&span.content, line.style.patch(span.style), &mut buf);
    }
    buf
}

/// Concatenate the raw content of a line, dropping all styling.
pub fn line_to_plain(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

/// Display width of a line in terminal cells.
pub fn line_width(line: &Line) -> usize {
    line.spans
        .iter()
        .map(|span| UnicodeWidthStr::width(span.content.as_ref()))
        .sum()
}

/// Build unstyled text, splitting on every `\n`.
///
/// Unlike `Text::from(&str)` a leading or trailing newline produces an empty
/// line, so `"\nhello\n"` is three lines.
pub fn plain_text(content: &str) -> Text<'static> {
    Text::from(
        content
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect::<Vec<_>>(),
    )
}

/// Single styled span, owned.
pub fn styled(content: impl Into<String>, style: Style) -> Span<'static> {
    Span::styled(content.into(), style)
}
