use crate::alphabet::Alphabet;
use crate::config::RotorSpec;
use crate::error::{EnigmaError, Result};
use crate::permutation::Permutation;
use serde::{Deserialize, Serialize};

/// Rotor variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotorKind {
    /// Stationary, leftmost slot only, sends the signal back
    Reflector,
    /// Stationary, never driven by a pawl
    Fixed,
    /// Stepped by a pawl, may carry notches
    Moving,
}

impl std::str::FromStr for RotorKind {
    type Err = EnigmaError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "reflector" | "r" => Ok(Self::Reflector),
            "fixed" | "n" => Ok(Self::Fixed),
            "moving" | "m" => Ok(Self::Moving),
            _ => Err(EnigmaError::UnsupportedRotorKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for RotorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Reflector => "reflector",
            Self::Fixed => "fixed",
            Self::Moving => "moving",
        };
        f.write_str(name)
    }
}

/// A substitution wheel: fixed wiring plus rotational state
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    kind: RotorKind,
    permutation: Permutation,
    /// Window position, 0..size
    position: usize,
    /// Ring setting, 0..size
    ring_offset: usize,
    /// Window positions at which this rotor lets its left neighbour step.
    /// Always empty unless `kind` is `Moving`.
    notches: Vec<usize>,
}

impl Rotor {
    /// A reflector. Its wiring must have no fixed points.
    pub fn reflector(name: &str, permutation: Permutation) -> Result<Self> {
        if !permutation.derangement() {
            return Err(EnigmaError::NotDerangement(name.to_string()));
        }
        Ok(Self::with_kind(name, RotorKind::Reflector, permutation, Vec::new()))
    }

    pub fn fixed(name: &str, permutation: Permutation) -> Self {
        Self::with_kind(name, RotorKind::Fixed, permutation, Vec::new())
    }

    /// A rotating rotor with notches at the symbols of `notches`
    pub fn moving(name: &str, permutation: Permutation, notches: &str) -> Result<Self> {
        let alphabet = permutation.alphabet();
        let mut positions = Vec::new();
        for c in notches.chars().filter(|c| !c.is_whitespace()) {
            let index = alphabet.to_index(c).map_err(|_| EnigmaError::InvalidNotch {
                rotor: name.to_string(),
                notch: c,
            })?;
            if !positions.contains(&index) {
                positions.push(index);
            }
        }
        Ok(Self::with_kind(name, RotorKind::Moving, permutation, positions))
    }

    /// Build a rotor from a catalog entry
    pub fn from_spec(spec: &RotorSpec, alphabet: &Alphabet) -> Result<Self> {
        let permutation = Permutation::new(&spec.wiring, alphabet)?;
        match spec.kind {
            RotorKind::Reflector => Self::reflector(&spec.name, permutation),
            RotorKind::Fixed => Ok(Self::fixed(&spec.name, permutation)),
            RotorKind::Moving => Self::moving(&spec.name, permutation, &spec.notches),
        }
    }

    fn with_kind(name: &str, kind: RotorKind, permutation: Permutation, notches: Vec<usize>) -> Self {
        Self {
            name: name.to_string(),
            kind,
            permutation,
            position: 0,
            ring_offset: 0,
            notches,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RotorKind {
        self.kind
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    pub fn alphabet(&self) -> &Alphabet {
        self.permutation.alphabet()
    }

    pub fn size(&self) -> usize {
        self.permutation.size()
    }

    pub fn rotates(&self) -> bool {
        self.kind == RotorKind::Moving
    }

    pub fn reflects(&self) -> bool {
        self.kind == RotorKind::Reflector
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn ring_offset(&self) -> usize {
        self.ring_offset
    }

    pub fn notches(&self) -> &[usize] {
        &self.notches
    }

    /// True iff the window shows one of the notch positions. The notch is
    /// cut into the ring, so the ring offset does not move it.
    pub fn at_notch(&self) -> bool {
        match self.kind {
            RotorKind::Moving => self.notches.contains(&self.position),
            RotorKind::Reflector | RotorKind::Fixed => false,
        }
    }

    /// Step one position; stationary kinds ignore this
    pub fn advance(&mut self) {
        if let RotorKind::Moving = self.kind {
            self.position = (self.position + 1) % self.size();
        }
    }

    pub fn set(&mut self, position: usize) {
        self.position = position % self.size();
    }

    pub fn set_ring_offset(&mut self, offset: usize) {
        self.ring_offset = offset % self.size();
    }

    /// Contact offset between the wiring and the fixed entry plate
    fn shift(&self) -> isize {
        self.position as isize - self.ring_offset as isize
    }

    /// Signal travelling toward the reflector
    pub fn convert_forward(&self, p: usize) -> usize {
        let shift = self.shift();
        let contact = self.permutation.wrap(p as isize + shift);
        let out = self.permutation.permute(contact);
        self.permutation.wrap(out as isize - shift)
    }

    /// Signal returning from the reflector
    pub fn convert_backward(&self, e: usize) -> usize {
        let shift = self.shift();
        let contact = self.permutation.wrap(e as isize + shift);
        let out = self.permutation.invert(contact);
        self.permutation.wrap(out as isize - shift)
    }
}
