use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::settings::Settings;

/// Symbols per group in formatted output
pub const GROUP_SIZE: usize = 5;

/// Drop spaces and split into groups of `size` separated by single spaces
pub fn group(text: &str, size: usize) -> String {
    let symbols: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    symbols
        .chunks(size.max(1))
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs a whole input through a machine
///
/// Lines starting with `*` reconfigure the machine; blank lines are kept
/// as blank lines; every other line is a message.
pub struct Transcript<'a> {
    machine: &'a mut Machine,
    /// Keep spaces where they were instead of regrouping
    raw: bool,
    configured: bool,
}

impl<'a> Transcript<'a> {
    pub fn new(machine: &'a mut Machine, raw: bool) -> Self {
        Self {
            machine,
            raw,
            configured: false,
        }
    }

    /// Process one input line, returning the output line if there is one
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        let trimmed = line.trim();
        if trimmed.starts_with('*') {
            let settings = Settings::parse(trimmed, self.machine.num_rotors())?;
            settings.apply(self.machine)?;
            log::debug!("Configured: {}", settings);
            self.configured = true;
            return Ok(None);
        }
        if trimmed.is_empty() {
            return Ok(Some(String::new()));
        }
        if !self.configured {
            return Err(EnigmaError::InvalidSettingsLine(
                "no settings before message".into(),
            ));
        }

        if self.raw {
            Ok(Some(self.machine.convert(trimmed)?))
        } else {
            let compact: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
            let converted = self.machine.convert(&compact)?;
            Ok(Some(group(&converted, GROUP_SIZE)))
        }
    }

    /// Process every line of `input`
    pub fn process(&mut self, input: &str) -> Result<Vec<String>> {
        let mut output = Vec::new();
        for line in input.lines() {
            if let Some(out) = self.process_line(line)? {
                output.push(out);
            }
        }
        Ok(output)
    }
}
