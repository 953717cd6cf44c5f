use crate::config::MachineConfig;
use crate::error::{EnigmaError, Result};
use crate::rotor::Rotor;
use crate::settings::Settings;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Options for the keysheet command
#[derive(Debug, Clone)]
pub struct KeysheetOptions {
    pub config: Option<PathBuf>,
    /// Number of settings lines to generate
    pub days: usize,
    /// Number of plugboard cables (swapped pairs)
    pub plugs: usize,
    /// Fixed seed for a reproducible sheet; entropy when `None`
    pub seed: Option<u64>,
}

impl Default for KeysheetOptions {
    fn default() -> Self {
        Self {
            config: None,
            days: 1,
            plugs: 10,
            seed: None,
        }
    }
}

/// Generate `days` random, valid settings for the configured machine
pub fn generate_keysheet(options: &KeysheetOptions) -> Result<Vec<Settings>> {
    let config = MachineConfig::load_or_builtin(options.config.as_deref())?;
    let mut machine = config.build_machine()?;
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let symbols = machine.alphabet().symbols().to_vec();
    if options.plugs * 2 > symbols.len() {
        return Err(EnigmaError::InvalidSetting(format!(
            "{} plugs need {} symbols, alphabet has {}",
            options.plugs,
            options.plugs * 2,
            symbols.len()
        )));
    }

    let catalog = machine.catalog();
    let reflectors: Vec<&Rotor> = catalog.iter().filter(|r| r.reflects()).collect();
    let fixed: Vec<&Rotor> = catalog
        .iter()
        .filter(|r| !r.reflects() && !r.rotates())
        .collect();
    let moving: Vec<&Rotor> = catalog.iter().filter(|r| r.rotates()).collect();

    let num_moving = machine.num_pawls();
    let num_fixed = machine.num_rotors() - 1 - num_moving;
    check_available("reflector", reflectors.len(), 1)?;
    check_available("fixed", fixed.len(), num_fixed)?;
    check_available("moving", moving.len(), num_moving)?;

    let mut sheet = Vec::with_capacity(options.days);
    for _ in 0..options.days {
        let mut rotors = Vec::with_capacity(machine.num_rotors());
        if let Some(reflector) = reflectors.choose(&mut rng) {
            rotors.push(reflector.name().to_string());
        }
        rotors.extend(fixed.choose_multiple(&mut rng, num_fixed).map(|r| r.name().to_string()));
        rotors.extend(moving.choose_multiple(&mut rng, num_moving).map(|r| r.name().to_string()));

        let positions = random_symbols(&symbols, machine.num_rotors() - 1, &mut rng);
        let ring = random_symbols(&symbols, machine.num_rotors() - 1, &mut rng);
        let plugboard = random_plugboard(&symbols, options.plugs, &mut rng);

        sheet.push(Settings {
            rotors,
            positions,
            ring: Some(ring),
            plugboard,
        });
    }

    // Every line must configure the machine cleanly
    for settings in &sheet {
        settings.apply(&mut machine)?;
    }
    log::debug!("Generated {} settings lines", sheet.len());

    Ok(sheet)
}

fn check_available(kind: &str, available: usize, needed: usize) -> Result<()> {
    if available < needed {
        return Err(EnigmaError::InvalidSetting(format!(
            "catalog has {} {} rotors, {} needed",
            available, kind, needed
        )));
    }
    Ok(())
}

fn random_symbols(symbols: &[char], count: usize, rng: &mut StdRng) -> String {
    (0..count)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

/// `plugs` disjoint swaps written as `(AB) (CD) ...`
fn random_plugboard(symbols: &[char], plugs: usize, rng: &mut StdRng) -> String {
    let chosen: Vec<char> = symbols.choose_multiple(rng, plugs * 2).copied().collect();
    chosen
        .chunks(2)
        .map(|pair| format!("({}{})", pair[0], pair[1]))
        .collect::<Vec<_>>()
        .join(" ")
}
