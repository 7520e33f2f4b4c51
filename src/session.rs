use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::{convert, convert_selector, ConversionError, ConversionMode, Temperature};

const MENU: &str = "\n=== Conversor de Temperaturas ===";

/// Conversions run once at startup, as (input, menu selector).
pub const SELF_CHECK: [(&str, u32); 3] = [("-273.16", 1), ("-273.15", 1), ("-1", 2)];

/// Formatted outcomes of every conversion attempted in a session, oldest first.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Convert(ConversionMode),
    ShowHistory,
    Exit,
    Invalid,
}

impl MenuAction {
    pub fn parse(line: &str) -> MenuAction {
        match line.trim().parse::<u32>() {
            Ok(4) => MenuAction::ShowHistory,
            Ok(0) => MenuAction::Exit,
            Ok(n) => match ConversionMode::from_selector(n) {
                Ok(mode) => MenuAction::Convert(mode),
                Err(_) => MenuAction::Invalid,
            },
            Err(_) => MenuAction::Invalid,
        }
    }
}

/// Line recorded (and printed) for one conversion attempt.
pub fn format_outcome(raw_input: &str, result: &Result<Temperature, ConversionError>) -> String {
    match result {
        Ok(t) => format!("OK: {raw_input} → {t}"),
        Err(err) => format!("FALLO: {err}"),
    }
}

/// Print the startup conversions, prefixed with "PRUEBA".
pub fn run_self_check<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "--- Pruebas Iniciales ---")?;
    for (raw_input, selector) in SELF_CHECK {
        match convert_selector(raw_input, selector) {
            Ok(t) => writeln!(output, "PRUEBA ÉXITO: {t}")?,
            Err(err) => writeln!(output, "PRUEBA FALLO: {err}")?,
        }
    }
    Ok(())
}

/// Interactive converter loop. Owns the history for its whole lifetime.
#[derive(Debug)]
pub struct Session {
    history: History,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            history: History::new(),
            state: SessionState::Running,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Loop until the user exits or `input` runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        while self.step(input, output)? == SessionState::Running {}
        info!("session ended after {} conversion(s)", self.history.len());
        Ok(())
    }

    /// Show the menu once and carry out the chosen action.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<SessionState> {
        if self.state == SessionState::Stopped {
            return Ok(self.state);
        }

        writeln!(output, "{MENU}")?;
        for mode in [
            ConversionMode::CelsiusToFahrenheit,
            ConversionMode::KelvinToCelsius,
            ConversionMode::FahrenheitToCelsius,
        ] {
            writeln!(output, "{}. {}", mode.selector(), mode.title())?;
        }
        writeln!(output, "4. Ver historial")?;
        writeln!(output, "0. Salir")?;
        write!(output, "Opción: ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("end of input at the menu prompt");
            self.state = SessionState::Stopped;
            return Ok(self.state);
        };

        match MenuAction::parse(&line) {
            MenuAction::Convert(mode) => {
                write!(output, "Introduce la temperatura: ")?;
                output.flush()?;
                // A missing value goes through validation like any other bad input
                let raw_input = read_line(input)?.unwrap_or_default();
                let outcome = format_outcome(&raw_input, &convert(&raw_input, mode));
                writeln!(output, "{outcome}")?;
                self.history.push(outcome);
            }
            MenuAction::ShowHistory => {
                writeln!(output, "\n=== Historial ===")?;
                if self.history.is_empty() {
                    writeln!(output, "Vacío.")?;
                } else {
                    for (i, entry) in self.history.entries().iter().enumerate() {
                        writeln!(output, "{}. {entry}", i + 1)?;
                    }
                }
            }
            MenuAction::Exit => {
                writeln!(output, "Adiós!")?;
                self.state = SessionState::Stopped;
            }
            MenuAction::Invalid => {
                debug!("invalid menu option {line:?}");
                writeln!(output, "Opción inválida.")?;
            }
        }
        Ok(self.state)
    }
}

/// Read one line without its terminator. `None` once the input is exhausted.
///
/// Invalid UTF-8 is replaced rather than reported, so a garbled line is just
/// another malformed input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let mut line = String::from_utf8_lossy(&buf).into_owned();
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}
