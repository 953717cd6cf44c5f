//! Enigma - a generalized rotor cipher machine
//!
//! A machine is a reflector, a row of rotors and an optional plugboard.
//! The rightmost `pawls` rotors step on every keypress, odometer style with
//! the historical double step; the rest stay put. Running the output back
//! through an identically configured machine restores the input.
//!
//! ## Signal path
//!
//! ```text
//! Key → Plugboard → Rotors (right to left) → Reflector → Rotors (left to right) → Plugboard → Lamp
//! ```
//!
//! - **Permutation**: cycle-notation wiring, `(AELTPHQXRU) (BKNW) ...`
//! - **Rotor**: reflector, fixed or moving; position and ring setting
//! - **Machine**: slot validation, stepping, conversion
//!
//! ## Example
//!
//! ```
//! use enigma::{MachineConfig, Settings};
//!
//! let config = MachineConfig::builtin().unwrap();
//! let mut machine = config.build_machine().unwrap();
//! let settings = Settings::parse("* B Beta III IV I AXLE (HQ) (EX) (IP) (TR) (BY)", 5).unwrap();
//!
//! settings.apply(&mut machine).unwrap();
//! let cipher = machine.convert("FROM HIS SHOULDER").unwrap();
//!
//! settings.apply(&mut machine).unwrap();
//! assert_eq!(machine.convert(&cipher).unwrap(), "FROM HIS SHOULDER");
//! ```

pub mod alphabet;
pub mod cli;
pub mod config;
pub mod error;
pub mod machine;
pub mod permutation;
pub mod rotor;
pub mod settings;
pub mod transcript;

pub use alphabet::Alphabet;
pub use config::{MachineConfig, RotorSpec};
pub use error::{EnigmaError, Result};
pub use machine::Machine;
pub use permutation::Permutation;
pub use rotor::{Rotor, RotorKind};
pub use settings::Settings;
