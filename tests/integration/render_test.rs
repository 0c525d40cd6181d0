//! Integration tests for the render sequence

use std::io::{self, Write};
use std::time::Duration;

use profile_reel::{
    profile_panels, render, ManualClock, PanelSet, RenderConfig, RenderError,
};
use unicode_width::UnicodeWidthStr;

use crate::helpers::{percent_sequence, render_to_string, strip_ansi, test_config};

// ============================================================================
// Progress Steps
// ============================================================================

#[test]
fn two_panels_advance_by_33_and_stop_at_99() {
    let panels = PanelSet::new().with("A", "x").with("B", "y");
    let (output, _) = render_to_string(&test_config(), &panels);

    assert_eq!(percent_sequence(&output), vec![0, 33, 66, 99]);
    assert!(!strip_ansi(&output).contains("100%"));
}

#[test]
fn empty_panels_jump_straight_to_100() {
    let (output, clock) = render_to_string(&test_config(), &PanelSet::new());

    assert_eq!(percent_sequence(&output), vec![0, 100]);
    assert!(!output.contains('╭'));
    assert_eq!(clock.sleeps().len(), 2);
}

#[test]
fn four_panels_reach_exactly_100() {
    let panels: PanelSet = [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]
        .into_iter()
        .collect();
    let (output, _) = render_to_string(&test_config(), &panels);

    assert_eq!(percent_sequence(&output), vec![0, 20, 40, 60, 80, 100]);
}

#[test]
fn hundred_panels_never_advance() {
    let panels: PanelSet = (0..100).map(|i| (format!("p{}", i), "x")).collect();
    let (output, _) = render_to_string(&test_config(), &panels);

    assert_eq!(percent_sequence(&output), vec![0]);
    assert_eq!(output.matches('╭').count(), 100);
}

// ============================================================================
// Ordering and Pacing
// ============================================================================

#[test]
fn panels_render_in_insertion_order() {
    let panels = PanelSet::new()
        .with("Zulu", "last letter")
        .with("Alpha", "first letter")
        .with("Mike", "middle letter");
    let (output, _) = render_to_string(&test_config(), &panels);
    let plain = strip_ansi(&output);

    let title = plain.find("Paulo S. Costa").unwrap();
    let zulu = plain.find("╭ Zulu ").unwrap();
    let alpha = plain.find("╭ Alpha ").unwrap();
    let mike = plain.find("╭ Mike ").unwrap();
    assert!(title < zulu && zulu < alpha && alpha < mike);
}

#[test]
fn sleeps_once_before_title_and_after_every_step() {
    let config = test_config().with_step_delay(Duration::from_millis(250));
    let panels = PanelSet::new().with("A", "x").with("B", "y");
    let (_, clock) = render_to_string(&config, &panels);

    assert_eq!(clock.sleeps(), &[Duration::from_millis(250); 4]);
}

#[test]
fn remaining_time_follows_elapsed_steps() {
    let config = test_config().with_step_delay(Duration::from_secs(1));
    let panels: PanelSet = [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]
        .into_iter()
        .collect();
    let (output, _) = render_to_string(&config, &panels);
    let plain = strip_ansi(&output);

    // nothing known at the start
    assert!(plain.contains("  0% -:--:--"));
    // 20% after 1s: 4s to go
    assert!(plain.contains(" 20% 0:00:04"));
    assert!(plain.contains("100% 0:00:00"));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn title_is_underlined_to_its_length() {
    let config = test_config();
    let (output, _) = render_to_string(&config, &PanelSet::new());
    let plain = strip_ansi(&output);

    let underline = "—".repeat(config.name.chars().count());
    assert!(plain.contains(&format!("{}\n{}\n", config.name, underline)));
    assert!(!plain.contains(&format!("{}—", underline)));
}

#[test]
fn title_is_bold_primary() {
    let (output, _) = render_to_string(&test_config(), &PanelSet::new());
    assert!(output.contains("\x1b[1m\x1b[38;2;187;134;252mPaulo S. Costa\x1b[0m"));
}

#[test]
fn panel_border_uses_primary_color() {
    let panels = PanelSet::new().with("A", "x");
    let (output, _) = render_to_string(&test_config(), &panels);
    assert!(output.contains("\x1b[38;2;187;134;252m╭ A "));
}

#[test]
fn profile_renders_all_four_panels() {
    let config = test_config().with_width(72);
    let panels = profile_panels(&config.palette().unwrap());
    let (output, clock) = render_to_string(&config, &panels);
    let plain = strip_ansi(&output);

    for title in ["Me", "Projects", "Languages", "How this was made"] {
        assert!(plain.contains(&format!("╭ {} ", title)), "missing {}", title);
    }
    assert!(plain.contains("paw-lu/paw-lu"));
    assert_eq!(percent_sequence(&output).last(), Some(&100));
    assert_eq!(clock.sleeps().len(), 6);
}

#[test]
fn rendering_is_deterministic() {
    let config = test_config().with_step_delay(Duration::from_millis(10));
    let panels = profile_panels(&config.palette().unwrap());

    let (first, _) = render_to_string(&config, &panels);
    let (second, _) = render_to_string(&config, &panels);
    assert_eq!(first, second);
}

#[test]
fn progress_lines_fit_the_output_width() {
    let panels = PanelSet::new().with("A", "x").with("B", "y");
    let (output, _) = render_to_string(&test_config(), &panels);

    // every redraw starts after a line clear
    let lines: Vec<String> = output
        .split("\x1b[2K")
        .map(|chunk| strip_ansi(chunk).trim_end_matches('\n').to_string())
        .filter(|chunk| chunk.starts_with("Animation "))
        .collect();
    // start, two per step, final
    assert_eq!(lines.len(), 8);
    for line in &lines {
        assert!(line.width() <= 40, "{} cells: {:?}", line.width(), line);
    }
    assert!(lines.iter().any(|line| line.contains('━')));
}

#[test]
fn output_restores_cursor() {
    let (output, _) = render_to_string(&test_config(), &PanelSet::new());
    assert!(output.starts_with("\x1b[?25l"));
    assert!(output.ends_with("\n\x1b[?25h"));
}

// ============================================================================
// Plain Output
// ============================================================================

#[test]
fn non_terminal_output_has_no_escapes() {
    let config = test_config().with_terminal(false);
    let panels = profile_panels(&config.palette().unwrap());
    let (output, clock) = render_to_string(&config, &panels);

    assert!(!output.contains('\x1b'));
    assert!(output.contains("Paulo S. Costa\n"));
    assert!(output.contains("╭ Languages "));
    assert_eq!(clock.sleeps().len(), 6);
}

#[test]
fn non_terminal_output_ends_with_single_progress_line() {
    let config = test_config().with_terminal(false);
    let panels = PanelSet::new().with("A", "x").with("B", "y");
    let (output, _) = render_to_string(&config, &panels);

    assert_eq!(output.matches("Animation ").count(), 1);
    let last = output.trim_end_matches('\n').lines().last().unwrap();
    assert!(last.starts_with("Animation "));
    assert!(last.contains(" 99% "));
    assert!(output.ends_with('\n'));
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn invalid_color_fails_before_writing() {
    let config = RenderConfig::new("x", "#BB86FC", "chartreuse-ish", Duration::ZERO);
    let mut out = Vec::new();
    let mut clock = ManualClock::new();

    let err = render(&mut out, &mut clock, &config, &PanelSet::new()).unwrap_err();

    assert!(matches!(err, RenderError::InvalidColor { ref value } if value == "chartreuse-ish"));
    assert!(out.is_empty());
    assert!(clock.sleeps().is_empty());
}

/// Writer that fails the first write containing a panel border.
#[derive(Default)]
struct FailOnPanel {
    buf: Vec<u8>,
    failed: bool,
}

impl Write for FailOnPanel {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let has_border = String::from_utf8_lossy(data).contains('╭');
        if has_border && !self.failed {
            self.failed = true;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream closed"));
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_propagates_and_still_restores_cursor() {
    let mut out = FailOnPanel::default();
    let mut clock = ManualClock::new();
    let panels = PanelSet::new().with("A", "x").with("B", "y");

    let err = render(&mut out, &mut clock, &test_config(), &panels).unwrap_err();

    assert!(matches!(err, RenderError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    let written = String::from_utf8(out.buf).unwrap();
    assert!(written.contains("Paulo S. Costa"));
    assert!(!written.contains("╭ B "));
    assert!(written.ends_with("\n\x1b[?25h"));
    // lead-in and title pauses only
    assert_eq!(clock.sleeps().len(), 2);
}
