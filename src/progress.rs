//! Progress display.
//!
//! A single line at the bottom of the output showing a description, a bar,
//! the percentage and an estimate of the time remaining. Content printed
//! through the display lands above that line, which is redrawn underneath.
//!
//! On a terminal the display is a guard: it hides the cursor when started
//! and always puts the final line and the cursor back, either through
//! [`ProgressDisplay::finish`] or when dropped on an error path. Anywhere else
//! content is passed straight through and only the final line is written.

use std::io::Write;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveToColumn, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use ratatui::style::{Color, Style};
use unicode_width::UnicodeWidthStr;

use crate::error::RenderResult;
use crate::style::Palette;

/// Value the progress counts up to.
pub const TOTAL: u32 = 100;

/// Widest the bar column gets, in cells.
pub const BAR_WIDTH: usize = 40;

/// Bar glyph, used for both the filled and the remaining part.
const BAR_CHAR: char = '━';

/// Shown while no estimate is possible yet.
const UNKNOWN_REMAINING: &str = "-:--:--";

/// Format a duration in whole seconds as H:MM:SS.
///
/// # Arguments
/// * `remaining` - Estimated time left, or `None` when unknown
pub fn format_remaining(remaining: Option<Duration>) -> String {
    match remaining {
        None => UNKNOWN_REMAINING.to_string(),
        Some(remaining) => {
            let total_secs = remaining.as_secs();
            let hours = total_secs / 3600;
            let mins = (total_secs % 3600) / 60;
            let secs = total_secs % 60;
            format!("{}:{:02}:{:02}", hours, mins, secs)
        }
    }
}

/// Estimate the time left from the average speed so far.
///
/// # Returns
/// `None` until some progress has been made over a non-zero interval,
/// `Some(ZERO)` once `completed` reaches `total`.
pub fn estimate_remaining(completed: u32, total: u32, elapsed: Duration) -> Option<Duration> {
    if completed >= total {
        return Some(Duration::ZERO);
    }
    if completed == 0 || elapsed.is_zero() {
        return None;
    }
    let left = f64::from(total - completed);
    Some(Duration::from_secs_f64(
        left * elapsed.as_secs_f64() / f64::from(completed),
    ))
}

/// Number of filled bar cells for a given completion.
pub fn filled_cells(completed: u32, total: u32, bar_width: usize) -> usize {
    if total == 0 {
        return bar_width;
    }
    let completed = completed.min(total) as usize;
    completed * bar_width / total as usize
}

/// Cells left for the bar once the other columns of a `width`-cell line
/// are placed, capped at [`BAR_WIDTH`].
///
/// The bar and its separating space are the first thing dropped; 0 means
/// no bar at all.
pub fn bar_width(description: &str, remaining: &str, width: u16) -> usize {
    // "{description} {bar} {percent:>3}% {remaining}"
    let fixed = description.width() + 1 + 4 + 1 + remaining.width();
    let room = usize::from(width).saturating_sub(fixed);
    room.saturating_sub(1).min(BAR_WIDTH)
}

/// Build the styled progress line.
///
/// # Arguments
/// * `description` - Label in the first column
/// * `completed` - Progress so far, out of [`TOTAL`]
/// * `remaining` - Output of [`estimate_remaining`]
/// * `width` - Output width the line has to fit in
/// * `palette` - Bar fill uses the secondary color, percentage the primary
pub fn format_progress_line(
    description: &str,
    completed: u32,
    remaining: Option<Duration>,
    width: u16,
    palette: &Palette,
) -> String {
    let remaining = format_remaining(remaining);
    let bar = bar_width(description, &remaining, width);
    let filled = filled_cells(completed, TOTAL, bar);
    let done: String = std::iter::repeat(BAR_CHAR).take(filled).collect();
    let todo: String = std::iter::repeat(BAR_CHAR).take(bar - filled).collect();
    let percent = completed.min(TOTAL) * 100 / TOTAL;

    let mut line = String::with_capacity(bar * 4 + 64);
    line.push_str(description);
    line.push(' ');
    if bar > 0 {
        line.push_str(&palette.paint(&done, palette.secondary_style()));
        line.push_str(&palette.paint(&todo, Style::default().fg(Color::DarkGray)));
        line.push(' ');
    }
    line.push_str(&palette.paint(&format!("{:>3}%", percent), palette.primary_style()));
    line.push(' ');
    line.push_str(&palette.paint(&remaining, Style::default().fg(Color::Cyan)));
    line
}

/// Guard over the progress line.
///
/// Holds the output for its whole lifetime; everything written while the
/// display is active goes through [`ProgressDisplay::print`].
pub struct ProgressDisplay<'w, W: Write> {
    out: &'w mut W,
    description: String,
    palette: Palette,
    width: u16,
    live: bool,
    completed: u32,
    started_at: Duration,
    last_elapsed: Duration,
    finished: bool,
}

impl<'w, W: Write> ProgressDisplay<'w, W> {
    /// Start the display at 0%.
    ///
    /// A live display hides the cursor and draws the line straight away.
    ///
    /// # Arguments
    /// * `out` - Output the display and all printed content go to
    /// * `description` - Label in the first column
    /// * `palette` - Colors for the bar and percentage
    /// * `width` - Output width the line is fitted to
    /// * `live` - Redraw in place after every change; otherwise only the
    ///   final line is written
    /// * `now` - Current clock reading; the estimate measures from here
    pub fn start(
        out: &'w mut W,
        description: impl Into<String>,
        palette: Palette,
        width: u16,
        live: bool,
        now: Duration,
    ) -> RenderResult<Self> {
        let mut display = Self {
            out,
            description: description.into(),
            palette,
            width,
            live,
            completed: 0,
            started_at: now,
            last_elapsed: Duration::ZERO,
            finished: false,
        };
        if live {
            queue!(display.out, Hide)?;
            display.redraw()?;
        }
        Ok(display)
    }

    /// Progress so far, out of [`TOTAL`].
    pub fn completed(&self) -> u32 {
        self.completed
    }

    /// Write `content` above the progress line.
    pub fn print(&mut self, content: &str) -> RenderResult<()> {
        if !self.live {
            self.out.write_all(content.as_bytes())?;
            return Ok(());
        }
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(content)
        )?;
        self.redraw()
    }

    /// Advance by `amount`, saturating at [`TOTAL`], and redraw.
    ///
    /// # Arguments
    /// * `amount` - Step to add
    /// * `now` - Current clock reading, for the remaining-time estimate
    pub fn advance(&mut self, amount: u32, now: Duration) -> RenderResult<()> {
        self.completed = self.completed.saturating_add(amount).min(TOTAL);
        self.last_elapsed = now.saturating_sub(self.started_at);
        tracing::trace!(completed = self.completed, "progress advanced");
        if self.live {
            self.redraw()?;
        }
        Ok(())
    }

    /// Draw the final line, end it and restore the cursor.
    pub fn finish(mut self) -> RenderResult<()> {
        self.finalize()
    }

    fn line(&self) -> String {
        format_progress_line(
            &self.description,
            self.completed,
            estimate_remaining(self.completed, TOTAL, self.last_elapsed),
            self.width,
            &self.palette,
        )
    }

    fn redraw(&mut self) -> RenderResult<()> {
        let line = self.line();
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()?;
        Ok(())
    }

    fn finalize(&mut self) -> RenderResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if self.live {
            self.redraw()?;
            queue!(self.out, Print("\n"), Show)?;
        } else {
            let line = self.line();
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for ProgressDisplay<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.finalize() {
            tracing::warn!("failed to finalize progress display: {}", e);
        }
    }
}
