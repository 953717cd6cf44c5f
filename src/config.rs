use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::machine::Machine;
use crate::rotor::{Rotor, RotorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Historical catalog: rotors I-VIII, Beta, Gamma, thin reflectors B and C
const BUILTIN: &str = include_str!("../assets/rotors.json");

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    pub name: String,
    pub kind: RotorKind,
    /// Wiring in cycle notation
    pub wiring: String,
    /// Notch symbols, only meaningful for moving rotors
    #[serde(default)]
    pub notches: String,
}

impl RotorSpec {
    pub fn new(name: &str, kind: RotorKind, wiring: &str, notches: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            wiring: wiring.to_string(),
            notches: notches.to_string(),
        }
    }
}

/// Machine description: alphabet, slot and pawl counts, rotor catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineConfig {
    pub alphabet: String,
    pub slots: usize,
    pub pawls: usize,
    pub rotors: Vec<RotorSpec>,
}

impl MachineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!(
            "Loaded {} rotors from {}",
            config.rotors.len(),
            path.display()
        );
        Ok(config)
    }

    /// Load from `path` if given, otherwise the built-in catalog
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// The embedded historical catalog
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn alphabet(&self) -> Result<Alphabet> {
        Alphabet::new(&self.alphabet)
    }

    /// Parse every catalog entry into a rotor
    pub fn catalog(&self) -> Result<Vec<Rotor>> {
        let alphabet = self.alphabet()?;
        self.rotors
            .iter()
            .map(|spec| Rotor::from_spec(spec, &alphabet))
            .collect()
    }

    pub fn build_machine(&self) -> Result<Machine> {
        let alphabet = self.alphabet()?;
        Machine::new(alphabet, self.slots, self.pawls, self.catalog()?)
    }
}
