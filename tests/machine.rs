use enigma::{Alphabet, EnigmaError, Machine, MachineConfig, RotorKind, RotorSpec};
use proptest::prelude::*;
use std::error::Error;

/// Enigma I: wide reflector B and rotors I, II, III
fn enigma_i() -> Result<Machine, Box<dyn Error>> {
    let config = MachineConfig {
        alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".into(),
        slots: 4,
        pawls: 3,
        rotors: vec![
            RotorSpec::new(
                "UKW-B",
                RotorKind::Reflector,
                "(AY) (BR) (CU) (DH) (EQ) (FS) (GL) (IP) (JX) (KN) (MO) (TZ) (VW)",
                "",
            ),
            RotorSpec::new(
                "I",
                RotorKind::Moving,
                "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)",
                "Q",
            ),
            RotorSpec::new(
                "II",
                RotorKind::Moving,
                "(FIXVYOMW) (CDKLHUP) (ESZ) (BJ) (GR) (NT) (A) (Q)",
                "E",
            ),
            RotorSpec::new(
                "III",
                RotorKind::Moving,
                "(ABDHPEJT) (CFLVMZOYQIRWUKXSG) (N)",
                "V",
            ),
        ],
    };
    let mut machine = config.build_machine()?;
    machine.insert_rotors(&["UKW-B", "I", "II", "III"])?;
    machine.set_rotors("AAA")?;
    machine.set_ring_setting("AAA")?;
    Ok(machine)
}

#[test]
fn historical_vector_at_aaa() -> Result<(), Box<dyn Error>> {
    let mut machine = enigma_i()?;
    assert_eq!(machine.convert("AAAAA")?, "BDZGO");
    assert_eq!(machine.positions(), "AAF");
    Ok(())
}

#[test]
fn historical_vector_with_ring_setting() -> Result<(), Box<dyn Error>> {
    let mut machine = enigma_i()?;
    machine.set_ring_setting("BBB")?;
    assert_eq!(machine.convert("AAAAA")?, "EWTYX");
    Ok(())
}

#[test]
fn middle_rotor_double_steps() -> Result<(), Box<dyn Error>> {
    let mut machine = enigma_i()?;
    machine.set_rotors("ADU")?;

    let mut windows = Vec::new();
    for _ in 0..4 {
        machine.convert("A")?;
        windows.push(machine.positions());
    }
    // II sits on its notch E for a single keypress, then steps with I
    assert_eq!(windows, vec!["ADV", "AEW", "BFX", "BFY"]);
    Ok(())
}

#[test]
fn full_revolution_double_step_on_small_alphabet() -> Result<(), Box<dyn Error>> {
    // right rotor carries once per revolution (notch at D), middle rotor's
    // notch is the position right after its start
    let alpha = Alphabet::new("ABCD")?;
    let config = MachineConfig {
        alphabet: alpha.to_string(),
        slots: 4,
        pawls: 3,
        rotors: vec![
            RotorSpec::new("R", RotorKind::Reflector, "(AB) (CD)", ""),
            RotorSpec::new("L", RotorKind::Moving, "(AC)", "A"),
            RotorSpec::new("M", RotorKind::Moving, "(BD)", "B"),
            RotorSpec::new("F", RotorKind::Moving, "(ABCD)", "D"),
        ],
    };
    let mut machine = config.build_machine()?;
    machine.insert_rotors(&["R", "L", "M", "F"])?;
    machine.set_rotors("AAA")?;

    let mut windows = Vec::new();
    for _ in 0..alpha.size() + 1 {
        machine.convert("A")?;
        windows.push(machine.positions());
    }
    // M reaches B on the 4th press and steps again on the 5th
    assert_eq!(windows, vec!["AAB", "AAC", "AAD", "ABA", "BCB"]);
    Ok(())
}

#[test]
fn identical_machines_agree() -> Result<(), Box<dyn Error>> {
    let build = || -> Result<Machine, Box<dyn Error>> {
        let mut m = MachineConfig::builtin()?.build_machine()?;
        m.insert_rotors(&["C", "Gamma", "VI", "VII", "VIII"])?;
        m.set_rotors("ZMZM")?;
        m.set_ring_setting("CDEF")?;
        m.set_plugboard_cycles("(AQ) (WS) (ED) (RF) (TG)")?;
        Ok(m)
    };
    let message = "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";
    let a = build()?.convert(message)?;
    let b = build()?.convert(message)?;
    assert_eq!(a, b);
    assert_ne!(a, message);

    let mut decoder = build()?;
    assert_eq!(decoder.convert(&a)?, message);
    Ok(())
}

#[test]
fn no_letter_encrypts_to_itself() -> Result<(), Box<dyn Error>> {
    let mut machine = enigma_i()?;
    let message = "A".repeat(200);
    let cipher = machine.convert(&message)?;
    assert!(!cipher.contains('A'));
    Ok(())
}

#[test]
fn configuration_errors_are_grouped() -> Result<(), Box<dyn Error>> {
    let mut machine = enigma_i()?;
    let err = machine.insert_rotors(&["UKW-B", "I", "II", "II"]).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(machine.rotor_names(), vec!["UKW-B", "I", "II", "III"]);

    let err = machine.convert("HELLO, WORLD").unwrap_err();
    assert!(matches!(err, EnigmaError::AlphabetMismatch(',')));
    assert!(!err.is_configuration());
    assert_eq!(machine.positions(), "AAA");
    Ok(())
}

proptest! {
    #[test]
    fn reciprocity_under_any_setting(
        positions in "[A-Z]{4}",
        ring in "[A-Z]{4}",
        message in "[A-Z ]{0,60}",
    ) {
        let mut machine = MachineConfig::builtin().unwrap().build_machine().unwrap();
        machine.insert_rotors(&["B", "Beta", "III", "IV", "I"]).unwrap();
        machine.set_rotors(&positions).unwrap();
        machine.set_ring_setting(&ring).unwrap();
        machine.set_plugboard_cycles("(HQ) (EX) (IP) (TR) (BY)").unwrap();
        let mut decoder = machine.clone();

        let cipher = machine.convert(&message).unwrap();
        prop_assert_eq!(cipher.len(), message.len());
        for (c, m) in cipher.chars().zip(message.chars()) {
            prop_assert_eq!(c == ' ', m == ' ');
        }
        prop_assert_eq!(decoder.convert(&cipher).unwrap(), message);
    }
}
