//! The animation sequence.
//!
//! Title banner first, then one panel per entry, with the progress line
//! advancing one step after each and a pause between steps.

use std::io::Write;

use ratatui::text::Text;
use tracing::{debug, trace};

use crate::clock::Clock;
use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::panel::{output_width, Panel};
use crate::panels::PanelSet;
use crate::progress::{ProgressDisplay, TOTAL};
use crate::style::Palette;

/// Label in the progress line.
pub const PROGRESS_DESCRIPTION: &str = "Animation";

/// Character repeated under the title.
pub const UNDERLINE_CHAR: char = '—';

/// Progress added per step for `panel_count` panels.
///
/// Floor division, so the final value can fall short of 100, and is 0
/// once there are 100 panels or more.
pub fn step_size(panel_count: usize) -> u32 {
    let steps = panel_count.saturating_add(1);
    (TOTAL as usize / steps) as u32
}

/// Title banner: blank lines, bold title, underline of matching length.
///
/// The underline has one [`UNDERLINE_CHAR`] per character of `name`.
pub fn title_frame(name: &str, palette: &Palette) -> String {
    let underline: String = std::iter::repeat(UNDERLINE_CHAR)
        .take(name.chars().count())
        .collect();
    format!(
        "\n\n{}\n{}\n\n\n",
        palette.paint(name, palette.title_style()),
        palette.paint(&underline, palette.secondary_style())
    )
}

/// A panel rendered to text, one `\n`-terminated line per row.
///
/// Escape sequences are only emitted when the palette has color on.
pub fn panel_frame(title: &str, body: &Text, width: u16, palette: &Palette) -> String {
    let mut frame = String::new();
    for line in Panel::new(title, body)
        .border_style(palette.primary_style())
        .layout(width)
    {
        frame.push_str(&palette.line(&line));
        frame.push('\n');
    }
    frame
}

/// Render the animation to `out`.
///
/// Colors are parsed before anything is written. The progress display is
/// finalized on every path out of here, including errors. When
/// `config.terminal` is off the output is plain text and the progress line
/// appears once, at the end.
///
/// # Arguments
/// * `out` - Output for both content and the progress line
/// * `clock` - Source of the pauses and of the elapsed time
/// * `config` - Title, colors, step delay and optional width
/// * `panels` - Panels in render order
pub fn render<W: Write, C: Clock>(
    out: &mut W,
    clock: &mut C,
    config: &RenderConfig,
    panels: &PanelSet,
) -> RenderResult<()> {
    let palette = config.palette()?;
    let width = config.width.unwrap_or_else(output_width);
    let step = step_size(panels.len());
    debug!(
        panels = panels.len(),
        step_size = step,
        width,
        terminal = config.terminal,
        "starting render"
    );

    let mut progress = ProgressDisplay::start(
        out,
        PROGRESS_DESCRIPTION,
        palette,
        width,
        config.terminal,
        clock.elapsed(),
    )?;
    clock.sleep(config.step_delay);

    progress.print(&title_frame(&config.name, &palette))?;
    progress.advance(step, clock.elapsed())?;
    clock.sleep(config.step_delay);

    for (title, body) in panels.iter() {
        trace!(panel = title, "rendering panel");
        progress.print(&panel_frame(title, body, width, &palette))?;
        progress.advance(step, clock.elapsed())?;
        clock.sleep(config.step_delay);
    }

    debug!(percent = progress.completed(), "render complete");
    progress.finish()
}
