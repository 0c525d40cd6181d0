//! Render configuration.

use std::time::Duration;

use crate::error::RenderResult;
use crate::style::Palette;

/// Primary color: title, panel borders, percentage.
pub const PRIMARY_COLOR: &str = "#BB86FC";

/// Secondary color: underline, bar fill, inline highlights.
pub const SECONDARY_COLOR: &str = "#03DAC5";

/// Title shown in the banner.
pub const DEFAULT_NAME: &str = "Paulo S. Costa";

/// Pause between rendering steps.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(1);

/// Inputs for a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Title shown in the banner
    pub name: String,
    /// Primary color, as text (`#RRGGBB`, a name or a palette index)
    pub primary_color: String,
    /// Secondary color, same formats as `primary_color`
    pub secondary_color: String,
    /// Pause between rendering steps
    pub step_delay: Duration,
    /// Panel width in cells; `None` follows the terminal
    pub width: Option<u16>,
    /// Output is an interactive terminal: colors and a live progress line.
    /// Otherwise text is plain and only the final progress line is written.
    pub terminal: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_NAME,
            PRIMARY_COLOR,
            SECONDARY_COLOR,
            DEFAULT_STEP_DELAY,
        )
    }
}

impl RenderConfig {
    pub fn new(
        name: impl Into<String>,
        primary_color: impl Into<String>,
        secondary_color: impl Into<String>,
        step_delay: Duration,
    ) -> Self {
        Self {
            name: name.into(),
            primary_color: primary_color.into(),
            secondary_color: secondary_color.into(),
            step_delay,
            width: None,
            terminal: true,
        }
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Pin the panel width instead of reading the terminal size.
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Parse both colors. Color output is off when not writing to a terminal.
    pub fn palette(&self) -> RenderResult<Palette> {
        let palette = Palette::parse(&self.primary_color, &self.secondary_color)?;
        Ok(palette.with_color(self.terminal))
    }
}
