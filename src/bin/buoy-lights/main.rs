mod host;
mod interrupt;
mod terminal;

use std::io;
use std::process;

use anyhow::{Context, Result};
use buoy_lights::{CatalogEntry, NoTrace, PollingDriver, Preset, Simulation, TraceSink, UniformOffset};
use clap::{Parser, ValueEnum};

use host::{HostClock, HostInstant, ThreadDelay};
use interrupt::StopFlag;
use terminal::{TerminalGuard, TerminalPanel, TerminalTrace};

/// Maximum number of phases in any light's sequence
const MAX_PHASES: usize = 16;

/// Maximum number of lights, and so of pending events
const MAX_LIGHTS: usize = 10;

/// Exit status conventionally used after SIGINT
const INTERRUPTED: i32 = 130;

type HostSimulation = Simulation<HostInstant, MAX_PHASES, MAX_LIGHTS>;

/// Simulates blinking marine navigation lights in the terminal
#[derive(Parser)]
#[command(name = "buoy-lights", version, long_about = None)]
struct Cli {
    /// Show debug output
    #[arg(short, long)]
    debug: bool,

    /// Show lights description and exit
    #[arg(short, long)]
    show: bool,

    /// Light catalog to simulate
    #[arg(short, long, value_enum, default_value_t = CatalogArg::Harbour)]
    catalog: CatalogArg,

    /// Polling tick in milliseconds [default: the catalog's tick]
    #[arg(short, long)]
    tick_ms: Option<u32>,

    /// Seed the initial phase offsets for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn preset(&self) -> Preset {
        Preset::from(self.catalog)
    }

    fn tick_ms(&self) -> u32 {
        self.tick_ms.unwrap_or(self.preset().tick_ms())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CatalogArg {
    /// Two pairs of channel markers
    Channel,
    /// Channel markers, pier heads and a cardinal
    Harbour,
}

impl From<CatalogArg> for Preset {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Channel => Preset::Channel,
            CatalogArg::Harbour => Preset::Harbour,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let preset = cli.preset();

    if cli.show {
        print!("{}", catalog_listing(preset.entries()));
        return Ok(());
    }

    let stop = StopFlag::new();
    stop.install_sigint_handler().context("failed to install SIGINT handler")?;

    let mut simulation = HostSimulation::from_preset(preset).context("failed to load light catalog")?;
    let mut offsets = match cli.seed {
        Some(seed) => UniformOffset::from_seed(seed),
        None => UniformOffset::from_entropy(),
    };

    let clock = HostClock::new();
    let mut driver = PollingDriver::new(&clock, ThreadDelay, cli.tick_ms());
    let mut panel = TerminalPanel::new();
    let mut no_trace = NoTrace;
    let mut terminal_trace = TerminalTrace::new();
    let trace: &mut dyn TraceSink<HostInstant> = if cli.debug {
        &mut terminal_trace
    } else {
        &mut no_trace
    };

    println!("Press <Ctrl-C> to exit:\n");
    let guard = TerminalGuard::enter(io::stdout()).context("failed to configure terminal")?;

    let outcome = driver
        .seed(&mut simulation, &mut offsets, trace)
        .and_then(|()| driver.run(&mut simulation, &mut panel, trace, || stop.keep_running()));

    drop(guard);
    outcome.context("light simulation failed")?;
    if let Some(err) = panel.take_error() {
        return Err(err).context("failed to draw lights");
    }
    if let Some(err) = terminal_trace.take_error() {
        return Err(err).context("failed to print debug output");
    }

    process::exit(INTERRUPTED);
}

/// Formats the `--show` description of every catalog entry.
fn catalog_listing(entries: &[CatalogEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "Name: {}\nColour: {}\nSequence: {:?}\n\n",
                entry.name, entry.color, entry.sequence
            )
        })
        .collect()
}
