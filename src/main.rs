use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use profile_reel::{profile_panels, render, RenderConfig, SystemClock};

/// Version string with build metadata.
#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    " ",
    env!("PROFILE_REEL_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PROFILE_REEL_BUILD_DATE"),
    ")"
);

/// Play the animated profile README in the terminal.
///
/// Prints a title banner and one panel per step while a progress bar
/// advances underneath. Record the output with a terminal recorder to
/// embed it in a profile page. When stdout is not a terminal the panels
/// are written as plain text followed by the final progress line.
#[derive(Parser, Debug)]
#[command(name = "profile-reel", version, long_version = LONG_VERSION)]
struct Cli {}

/// Log to stderr so stdout carries only the animation.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let config = RenderConfig::default().with_terminal(atty::is(atty::Stream::Stdout));
    let palette = config.palette()?;
    let panels = profile_panels(&palette);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut clock = SystemClock::new();
    render(&mut out, &mut clock, &config, &panels).context("Failed to render animation")?;

    Ok(())
}
