use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use std::fmt;

/// One session configuration, written as
/// `* B Beta III IV I AXLE [RING] (YF) (ZH)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Rotor names, reflector first
    pub rotors: Vec<String>,
    /// Window positions of the non-reflector slots
    pub positions: String,
    /// Ring setting; `None` means every ring at its first symbol
    pub ring: Option<String>,
    /// Plugboard in cycle notation, possibly empty
    pub plugboard: String,
}

impl Settings {
    /// Parse a settings line for a machine with `num_rotors` slots
    pub fn parse(line: &str, num_rotors: usize) -> Result<Self> {
        let body = line.trim_start().strip_prefix('*').ok_or_else(|| {
            EnigmaError::InvalidSettingsLine("settings must start with '*'".into())
        })?;
        let mut tokens = body.split_whitespace();

        let rotors: Vec<String> = tokens.by_ref().take(num_rotors).map(String::from).collect();
        if rotors.len() != num_rotors {
            return Err(EnigmaError::InvalidSettingsLine(format!(
                "expected {} rotor names, found {}",
                num_rotors,
                rotors.len()
            )));
        }

        let positions = tokens
            .next()
            .ok_or_else(|| EnigmaError::InvalidSettingsLine("missing rotor positions".into()))?
            .to_string();

        let mut ring = None;
        let mut plugboard = Vec::new();
        for token in tokens {
            if token.starts_with('(') {
                plugboard.push(token);
            } else if !plugboard.is_empty() {
                return Err(EnigmaError::InvalidSettingsLine(format!(
                    "unexpected {:?} among plugboard cycles",
                    token
                )));
            } else if ring.is_none() {
                ring = Some(token.to_string());
            } else {
                return Err(EnigmaError::InvalidSettingsLine(format!(
                    "unexpected {:?} after ring setting",
                    token
                )));
            }
        }

        Ok(Self {
            rotors,
            positions,
            ring,
            plugboard: plugboard.join(" "),
        })
    }

    /// Configure `machine`: rotors, positions, ring, then plugboard
    pub fn apply(&self, machine: &mut Machine) -> Result<()> {
        machine.insert_rotors(&self.rotors[..])?;
        machine.set_rotors(&self.positions)?;
        match &self.ring {
            Some(ring) => machine.set_ring_setting(ring)?,
            None => {
                let zero = machine.alphabet().to_symbol(0);
                let ring: String = std::iter::repeat(zero)
                    .take(machine.num_rotors() - 1)
                    .collect();
                machine.set_ring_setting(&ring)?;
            }
        }
        machine.set_plugboard_cycles(&self.plugboard)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {} {}", self.rotors.join(" "), self.positions)?;
        if let Some(ring) = &self.ring {
            write!(f, " {}", ring)?;
        }
        if !self.plugboard.is_empty() {
            write!(f, " {}", self.plugboard)?;
        }
        Ok(())
    }
}
