use crate::config::MachineConfig;
use crate::error::Result;
use crate::rotor::RotorKind;
use std::path::Path;

/// Describe a machine configuration and its rotor catalog
pub fn show_info(config_path: Option<&Path>) -> Result<String> {
    let config = MachineConfig::load_or_builtin(config_path)?;
    let machine = config.build_machine()?;
    let alphabet = machine.alphabet();

    let mut output = String::new();

    output.push_str("Enigma Machine Configuration\n");
    output.push_str("============================\n\n");

    match config_path {
        Some(path) => output.push_str(&format!("Catalog: {}\n", path.display())),
        None => output.push_str("Catalog: built-in\n"),
    }
    output.push_str(&format!("Alphabet: {} ({} symbols)\n", alphabet, alphabet.size()));
    output.push_str(&format!("Rotor slots: {}\n", machine.num_rotors()));
    output.push_str(&format!("Pawls: {}\n", machine.num_pawls()));
    output.push('\n');

    output.push_str("Rotors:\n");
    for rotor in machine.catalog() {
        let mut line = format!("  {:<8} {:<9}", rotor.name(), rotor.kind().to_string());
        match rotor.kind() {
            RotorKind::Moving => {
                let notches: String = rotor
                    .notches()
                    .iter()
                    .map(|&i| alphabet.to_symbol(i))
                    .collect();
                if notches.is_empty() {
                    line.push_str(" no notches");
                } else {
                    line.push_str(&format!(" notches {}", notches));
                }
            }
            RotorKind::Reflector => line.push_str(" derangement"),
            RotorKind::Fixed => {}
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    Ok(output)
}
