use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnigmaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Malformed cycle notation: {0}")]
    MalformedCycle(String),

    #[error("Invalid rotor count: {rotors} slots with {pawls} pawls. Need slots > 1 and pawls < slots")]
    InvalidRotorCount { rotors: usize, pawls: usize },

    #[error("Rotor {0} is defined more than once in the catalog")]
    DuplicateCatalogEntry(String),

    #[error("Unknown rotor: {0}")]
    UnknownRotor(String),

    #[error("Wrong number of rotors: expected {expected}, got {found}")]
    WrongRotorCount { expected: usize, found: usize },

    #[error("Wrong number of moving rotors: machine has {expected} pawls, selection has {found}")]
    PawlCountMismatch { expected: usize, found: usize },

    #[error("Moving rotor {0} must sit in one of the rightmost pawl slots")]
    PawlPosition(String),

    #[error("Reflector misplaced: {0}")]
    ReflectorPosition(String),

    #[error("Rotor {0} selected more than once")]
    DuplicateRotor(String),

    #[error("Reflector {0} has a fixed point")]
    NotDerangement(String),

    #[error("Invalid notch {notch:?} on rotor {rotor}")]
    InvalidNotch { rotor: String, notch: char },

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("No rotors inserted")]
    NoRotorsInserted,

    #[error("Character {0:?} is not in the alphabet")]
    AlphabetMismatch(char),

    #[error("Invalid settings line: {0}")]
    InvalidSettingsLine(String),

    #[error("Unsupported rotor kind: {0}")]
    UnsupportedRotorKind(String),
}

impl EnigmaError {
    /// True for errors raised while configuring a machine, as opposed to
    /// I/O, parsing of cycles, or conversion-time failures.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRotorCount { .. }
                | Self::DuplicateCatalogEntry(_)
                | Self::UnknownRotor(_)
                | Self::WrongRotorCount { .. }
                | Self::PawlCountMismatch { .. }
                | Self::PawlPosition(_)
                | Self::ReflectorPosition(_)
                | Self::DuplicateRotor(_)
                | Self::NotDerangement(_)
                | Self::InvalidNotch { .. }
                | Self::InvalidSetting(_)
                | Self::NoRotorsInserted
        )
    }
}

pub type Result<T> = std::result::Result<T, EnigmaError>;
