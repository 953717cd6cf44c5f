//! The machine: an ordered stack of rotor slots behind an optional plugboard.
//!
//! Slot 0 always holds the reflector. The rightmost `num_pawls` slots hold
//! the moving rotors, and everything in between is fixed. Each keypress first
//! steps the moving rotors, then sends the signal through the plugboard,
//! right to left through the rotors, back from the reflector, left to right,
//! and through the plugboard again.

use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;
use crate::rotor::Rotor;
use log::{debug, trace};

#[derive(Debug, Clone)]
pub struct Machine {
    alphabet: Alphabet,
    num_rotors: usize,
    num_pawls: usize,
    /// Every rotor available for selection, in catalog order
    catalog: Vec<Rotor>,
    /// Active slots, reflector first. Empty until `insert_rotors` succeeds.
    slots: Vec<Rotor>,
    plugboard: Option<Permutation>,
}

impl Machine {
    /// A machine with `num_rotors` slots, `num_pawls` of them driven
    pub fn new(
        alphabet: Alphabet,
        num_rotors: usize,
        num_pawls: usize,
        catalog: Vec<Rotor>,
    ) -> Result<Self> {
        if num_rotors <= 1 || num_pawls >= num_rotors {
            return Err(EnigmaError::InvalidRotorCount {
                rotors: num_rotors,
                pawls: num_pawls,
            });
        }

        for (i, rotor) in catalog.iter().enumerate() {
            if catalog[..i].iter().any(|r| r.name() == rotor.name()) {
                return Err(EnigmaError::DuplicateCatalogEntry(rotor.name().to_string()));
            }
            if rotor.alphabet() != &alphabet {
                return Err(EnigmaError::InvalidAlphabet(format!(
                    "rotor {} uses a different alphabet",
                    rotor.name()
                )));
            }
        }

        Ok(Self {
            alphabet,
            num_rotors,
            num_pawls,
            catalog,
            slots: Vec::new(),
            plugboard: None,
        })
    }

    pub fn num_rotors(&self) -> usize {
        self.num_rotors
    }

    pub fn num_pawls(&self) -> usize {
        self.num_pawls
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn catalog(&self) -> &[Rotor] {
        &self.catalog
    }

    /// Rotors currently in the slots, reflector first
    pub fn rotors(&self) -> &[Rotor] {
        &self.slots
    }

    pub fn rotor_names(&self) -> Vec<&str> {
        self.slots.iter().map(|r| r.name()).collect()
    }

    pub fn plugboard(&self) -> Option<&Permutation> {
        self.plugboard.as_ref()
    }

    /// Window letters of the non-reflector slots, leftmost first
    pub fn positions(&self) -> String {
        self.slots
            .iter()
            .skip(1)
            .map(|r| self.alphabet.to_symbol(r.position()))
            .collect()
    }

    /// Fill the slots with copies of the catalog rotors named in `names`,
    /// reflector first. The current slots are kept if any check fails.
    pub fn insert_rotors<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        if names.len() != self.num_rotors {
            return Err(EnigmaError::WrongRotorCount {
                expected: self.num_rotors,
                found: names.len(),
            });
        }

        let mut selected: Vec<Rotor> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let rotor = self
                .catalog
                .iter()
                .find(|r| r.name() == name)
                .ok_or_else(|| EnigmaError::UnknownRotor(name.to_string()))?;
            if selected.iter().any(|r| r.name() == name) {
                return Err(EnigmaError::DuplicateRotor(name.to_string()));
            }
            selected.push(rotor.clone());
        }

        let moving = selected.iter().filter(|r| r.rotates()).count();
        if moving != self.num_pawls {
            return Err(EnigmaError::PawlCountMismatch {
                expected: self.num_pawls,
                found: moving,
            });
        }

        for (i, rotor) in selected.iter().enumerate() {
            if i == 0 && !rotor.reflects() {
                return Err(EnigmaError::ReflectorPosition(format!(
                    "{} in slot 0 is not a reflector",
                    rotor.name()
                )));
            }
            if i != 0 && rotor.reflects() {
                return Err(EnigmaError::ReflectorPosition(format!(
                    "{} in slot {} is a reflector",
                    rotor.name(),
                    i
                )));
            }
        }

        let first_moving = self.num_rotors - self.num_pawls;
        if let Some(misplaced) = selected[..first_moving].iter().find(|r| r.rotates()) {
            return Err(EnigmaError::PawlPosition(misplaced.name().to_string()));
        }

        debug!("Inserted rotors {:?}", names.iter().map(|n| n.as_ref()).collect::<Vec<_>>());
        self.slots = selected;
        Ok(())
    }

    /// Parse a setting string into one index per non-reflector slot
    fn parse_setting(&self, setting: &str, what: &str) -> Result<Vec<usize>> {
        if self.slots.is_empty() {
            return Err(EnigmaError::NoRotorsInserted);
        }
        let symbols: Vec<char> = setting.chars().collect();
        if symbols.len() != self.num_rotors - 1 {
            return Err(EnigmaError::InvalidSetting(format!(
                "{} {:?} needs {} symbols",
                what,
                setting,
                self.num_rotors - 1
            )));
        }
        symbols
            .into_iter()
            .map(|c| {
                self.alphabet.to_index(c).map_err(|_| {
                    EnigmaError::InvalidSetting(format!("{} {:?} contains {:?}", what, setting, c))
                })
            })
            .collect()
    }

    /// Set the window positions of the non-reflector slots, leftmost first
    pub fn set_rotors(&mut self, setting: &str) -> Result<()> {
        let positions = self.parse_setting(setting, "setting")?;
        for (rotor, position) in self.slots.iter_mut().skip(1).zip(positions) {
            rotor.set(position);
        }
        debug!("Rotor positions set to {}", setting);
        Ok(())
    }

    /// Set the ring offsets of the non-reflector slots, leftmost first
    pub fn set_ring_setting(&mut self, ring: &str) -> Result<()> {
        let offsets = self.parse_setting(ring, "ring setting")?;
        for (rotor, offset) in self.slots.iter_mut().skip(1).zip(offsets) {
            rotor.set_ring_offset(offset);
        }
        debug!("Ring setting set to {}", ring);
        Ok(())
    }

    /// Install a plugboard; `None` wires every symbol straight through
    pub fn set_plugboard(&mut self, plugboard: Option<Permutation>) -> Result<()> {
        if let Some(perm) = &plugboard {
            if perm.alphabet() != &self.alphabet {
                return Err(EnigmaError::InvalidAlphabet(
                    "plugboard uses a different alphabet".into(),
                ));
            }
        }
        self.plugboard = plugboard;
        Ok(())
    }

    /// Install a plugboard written in cycle notation; empty means none
    pub fn set_plugboard_cycles(&mut self, cycles: &str) -> Result<()> {
        if cycles.trim().is_empty() {
            return self.set_plugboard(None);
        }
        let perm = Permutation::new(cycles, &self.alphabet)?;
        debug!("Plugboard set to {}", cycles.trim());
        self.set_plugboard(Some(perm))
    }

    /// Step the moving rotors for one keypress
    ///
    /// Notch states are sampled before anything moves. Then, over the
    /// moving slots, the rightmost one always steps, a slot steps when its
    /// right neighbour was at a notch, and a slot at its own notch steps
    /// again when the slot to its left is driven too (the double step).
    pub fn advance_rotors(&mut self) {
        if self.num_pawls == 0 || self.slots.is_empty() {
            return;
        }

        let last = self.slots.len() - 1;
        let first_moving = self.slots.len() - self.num_pawls;
        let at_notch: Vec<bool> = self.slots.iter().map(Rotor::at_notch).collect();

        for i in (first_moving..=last).rev() {
            let steps = i == last
                || at_notch[i + 1]
                || (at_notch[i] && i > first_moving);
            if steps {
                self.slots[i].advance();
            }
        }
        trace!("Stepped to {}", self.positions());
    }

    /// Step, then encipher the symbol at index `p`
    ///
    /// # Panics
    /// If no rotors are inserted or `p` is outside the alphabet.
    pub fn convert_index(&mut self, p: usize) -> usize {
        self.advance_rotors();

        let mut signal = match &self.plugboard {
            Some(plug) => plug.permute(p),
            None => p,
        };
        for rotor in self.slots[1..].iter().rev() {
            signal = rotor.convert_forward(signal);
        }
        for rotor in &self.slots {
            signal = rotor.convert_backward(signal);
        }
        match &self.plugboard {
            Some(plug) => plug.invert(signal),
            None => signal,
        }
    }

    /// Encipher (or decipher) `message`, stepping once per non-space symbol
    ///
    /// Spaces pass through and do not step the rotors. The whole message is
    /// checked against the alphabet first; on failure nothing moves.
    pub fn convert(&mut self, message: &str) -> Result<String> {
        if self.slots.is_empty() {
            return Err(EnigmaError::NoRotorsInserted);
        }

        let mut indices = Vec::with_capacity(message.len());
        for c in message.chars() {
            if c == ' ' {
                indices.push(None);
            } else {
                indices.push(Some(self.alphabet.to_index(c)?));
            }
        }

        let mut result = String::with_capacity(message.len());
        for index in indices {
            match index {
                Some(p) => {
                    let out = self.convert_index(p);
                    result.push(self.alphabet.to_symbol(out));
                }
                None => result.push(' '),
            }
        }
        Ok(result)
    }
}
