use std::io::{self, Stdout, Write};

use buoy_lights::{LampView, LightPanel, TraceEvent, TraceSink};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, execute, queue};
use palette::Srgb;

use crate::host::HostInstant;

/// Full block glyph used for every lamp
const LAMP_GLYPH: char = '\u{2588}';
const LEFT_MARGIN: &str = "            ";
const LAMP_GAP: &str = "              ";

/// Hides the cursor and restores colours and cursor on drop.
///
/// The terminal stays in its normal line mode, so the binary also runs with
/// output redirected to a file or pipe.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    pub fn enter(mut out: W) -> io::Result<Self> {
        execute!(out, cursor::Hide)?;
        Ok(Self { out })
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, cursor::Show, Print("\r\n"));
    }
}

fn lamp_color(color: Srgb) -> Color {
    let rgb: Srgb<u8> = color.into_format();
    Color::Rgb {
        r: rgb.red,
        g: rgb.green,
        b: rgb.blue,
    }
}

/// Draws every lamp as a coloured block on one line, redrawn in place.
pub struct TerminalPanel<W: Write = Stdout> {
    out: W,
    error: Option<io::Error>,
}

impl TerminalPanel<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalPanel<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error seen while drawing, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn draw<'a>(&mut self, lamps: impl Iterator<Item = LampView<'a>>) -> io::Result<()> {
        queue!(self.out, Print('\r'), SetBackgroundColor(Color::Black), Print(LEFT_MARGIN))?;
        for lamp in lamps {
            queue!(
                self.out,
                SetForegroundColor(lamp_color(lamp.srgb())),
                Print(LAMP_GLYPH),
                SetForegroundColor(Color::Black),
                Print(LAMP_GAP)
            )?;
        }
        self.out.flush()
    }
}

impl<W: Write> LightPanel for TerminalPanel<W> {
    fn refresh<'a, L>(&mut self, lamps: L)
    where
        L: Iterator<Item = LampView<'a>>,
    {
        if let Err(err) = self.draw(lamps) {
            self.error.get_or_insert(err);
        }
    }
}

/// Prints scheduling decisions below the lamp line.
pub struct TerminalTrace<W: Write = Stdout> {
    out: W,
    error: Option<io::Error>,
}

impl TerminalTrace<Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl<W: Write> TerminalTrace<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, error: None }
    }

    /// Returns the first write error seen while tracing, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn line(&mut self, message: std::fmt::Arguments<'_>) {
        if let Err(err) = self.write_line(message) {
            self.error.get_or_insert(err);
        }
    }

    fn write_line(&mut self, message: std::fmt::Arguments<'_>) -> io::Result<()> {
        // The lamp line is redrawn in place and never ends itself.
        queue!(self.out, ResetColor, Print("\r\n"), Print(message), Print("\r\n"))?;
        self.out.flush()
    }
}

impl<W: Write> TraceSink<HostInstant> for TerminalTrace<W> {
    fn trace(&mut self, event: TraceEvent<'_, HostInstant>) {
        match event {
            TraceEvent::Scheduled { light, due } => {
                self.line(format_args!("Scheduling light {light} at {due}."));
            }
            TraceEvent::Seeded { now, pending } => {
                self.line(format_args!("Event queue:"));
                for event in pending {
                    self.line(format_args!("  light {} at {}", event.light, event.due));
                }
                self.line(format_args!("Time is {now}"));
            }
            TraceEvent::PhaseChanged { light, phase } => {
                self.line(format_args!("Light {light} entered phase {phase}"));
            }
            TraceEvent::LightChanged { light, lit } => {
                let state = if lit { "on" } else { "off" };
                self.line(format_args!("Changing light {light} to {state}."));
            }
        }
    }
}
