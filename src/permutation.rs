use crate::alphabet::Alphabet;
use crate::error::{EnigmaError, Result};

/// A bijection over the indices of an alphabet, written in cycle notation
///
/// `"(AELTPHQXRU) (BKNW)"` maps A→E, E→L, …, U→A and B→K, …, W→B. Symbols
/// that appear in no cycle map to themselves.
#[derive(Debug, Clone)]
pub struct Permutation {
    alphabet: Alphabet,
    forward: Vec<usize>,
    inverse: Vec<usize>,
    /// Indices already placed in some cycle
    claimed: Vec<bool>,
}

impl Permutation {
    /// Parse `cycles` over `alphabet`. Whitespace is ignored.
    pub fn new(cycles: &str, alphabet: &Alphabet) -> Result<Self> {
        let mut perm = Self::identity(alphabet);
        for group in parse_groups(cycles)? {
            perm.add_symbols(&group)?;
        }
        Ok(perm)
    }

    pub fn identity(alphabet: &Alphabet) -> Self {
        let size = alphabet.size();
        Self {
            alphabet: alphabet.clone(),
            forward: (0..size).collect(),
            inverse: (0..size).collect(),
            claimed: vec![false; size],
        }
    }

    /// Add the cycle c0→c1→…→cm→c0, where `cycle` is c0c1…cm written
    /// without parentheses. Every symbol must still be unclaimed.
    pub fn add_cycle(&mut self, cycle: &str) -> Result<()> {
        let symbols: Vec<char> = cycle.chars().filter(|c| !c.is_whitespace()).collect();
        self.add_symbols(&symbols)
    }

    fn add_symbols(&mut self, symbols: &[char]) -> Result<()> {
        let mut indices = Vec::with_capacity(symbols.len());
        for &c in symbols {
            let index = self.alphabet.to_index(c).map_err(|_| {
                EnigmaError::MalformedCycle(format!("{:?} is not in the alphabet", c))
            })?;
            if self.claimed[index] || indices.contains(&index) {
                return Err(EnigmaError::MalformedCycle(format!(
                    "{:?} appears in more than one place",
                    c
                )));
            }
            indices.push(index);
        }

        for (pos, &from) in indices.iter().enumerate() {
            let to = indices[(pos + 1) % indices.len()];
            self.forward[from] = to;
            self.inverse[to] = from;
            self.claimed[from] = true;
        }
        Ok(())
    }

    /// Reduce `p` into `[0, size)`
    pub fn wrap(&self, p: isize) -> usize {
        p.rem_euclid(self.size() as isize) as usize
    }

    pub fn size(&self) -> usize {
        self.forward.len()
    }

    /// # Panics
    /// If `p` is outside `[0, size)`.
    pub fn permute(&self, p: usize) -> usize {
        self.forward[p]
    }

    /// # Panics
    /// If `c` is outside `[0, size)`.
    pub fn invert(&self, c: usize) -> usize {
        self.inverse[c]
    }

    pub fn permute_symbol(&self, p: char) -> Result<char> {
        let index = self.alphabet.to_index(p)?;
        Ok(self.alphabet.to_symbol(self.permute(index)))
    }

    pub fn invert_symbol(&self, c: char) -> Result<char> {
        let index = self.alphabet.to_index(c)?;
        Ok(self.alphabet.to_symbol(self.invert(index)))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// True iff no symbol maps to itself
    pub fn derangement(&self) -> bool {
        self.forward.iter().enumerate().all(|(i, &j)| i != j)
    }
}

/// Split cycle notation into its parenthesised groups
fn parse_groups(cycles: &str) -> Result<Vec<Vec<char>>> {
    let mut groups = Vec::new();
    let mut current: Option<Vec<char>> = None;

    for c in cycles.chars().filter(|c| !c.is_whitespace()) {
        match c {
            '(' => {
                if current.is_some() {
                    return Err(EnigmaError::MalformedCycle("nested '('".into()));
                }
                current = Some(Vec::new());
            }
            ')' => match current.take() {
                Some(group) => groups.push(group),
                None => return Err(EnigmaError::MalformedCycle("unmatched ')'".into())),
            },
            _ => match current.as_mut() {
                Some(group) => group.push(c),
                None => {
                    return Err(EnigmaError::MalformedCycle(format!(
                        "{:?} outside of a cycle",
                        c
                    )))
                }
            },
        }
    }

    if current.is_some() {
        return Err(EnigmaError::MalformedCycle("unclosed '('".into()));
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ROTOR_I: &str = "(AELTPHQXRU) (BKNW) (CMOY) (DFG) (IV) (JZ) (S)";
    const REFLECTOR_B: &str =
        "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (TV)";

    fn check_perm(cycles: &str, from: &str, to: &str) {
        let alpha = Alphabet::latin();
        let perm = Permutation::new(cycles, &alpha).unwrap();
        for (c, e) in from.chars().zip(to.chars()) {
            assert_eq!(perm.permute_symbol(c).unwrap(), e, "wrong permute of {}", c);
            assert_eq!(perm.invert_symbol(e).unwrap(), c, "wrong invert of {}", e);
        }
    }

    #[test]
    fn test_identity_on_empty_cycles() {
        let alpha = Alphabet::latin();
        let perm = Permutation::new("", &alpha).unwrap();
        for i in 0..alpha.size() {
            assert_eq!(perm.permute(i), i);
            assert_eq!(perm.invert(i), i);
        }
        assert_eq!(perm.size(), 26);
        assert!(!perm.derangement());
    }

    #[test]
    fn test_rotor_i_mapping() {
        check_perm(
            ROTOR_I,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        );
    }

    #[test]
    fn test_whitespace_insensitive() {
        check_perm("( A B C )\n\t(D E)", "ABCDEF", "BCAEDF");
    }

    #[test]
    fn test_singleton_is_fixed_point() {
        let alpha = Alphabet::latin();
        let perm = Permutation::new(ROTOR_I, &alpha).unwrap();
        let s = alpha.to_index('S').unwrap();
        assert_eq!(perm.permute(s), s);
        assert!(!perm.derangement());
    }

    #[test]
    fn test_reflector_is_derangement() {
        let alpha = Alphabet::latin();
        assert!(Permutation::new(REFLECTOR_B, &alpha).unwrap().derangement());
        let partial = "(AE) (BN) (CK) (DQ) (FU) (GY) (HW) (IJ) (LO) (MP) (RX) (SZ) (T)(V)";
        assert!(!Permutation::new(partial, &alpha).unwrap().derangement());
    }

    #[test]
    fn test_small_alphabet() {
        let alpha = Alphabet::new("abcd").unwrap();
        let perm = Permutation::new("(bacd)", &alpha).unwrap();
        assert_eq!(perm.permute(0), 2);
        assert_eq!(perm.permute(1), 0);
        assert_eq!(perm.invert(3), 2);
        assert_eq!(perm.permute_symbol('d').unwrap(), 'b');
        assert!(perm.derangement());
    }

    #[test]
    fn test_add_cycle() {
        let alpha = Alphabet::latin();
        let mut perm = Permutation::new("(AB)", &alpha).unwrap();
        perm.add_cycle("CDE").unwrap();
        assert_eq!(perm.permute_symbol('E').unwrap(), 'C');
        assert_eq!(perm.invert_symbol('C').unwrap(), 'E');
        assert!(perm.add_cycle("AZ").is_err());
        // failed append leaves the table alone
        assert_eq!(perm.permute_symbol('Z').unwrap(), 'Z');
    }

    #[test]
    fn test_wrap() {
        let perm = Permutation::identity(&Alphabet::latin());
        assert_eq!(perm.wrap(-1), 25);
        assert_eq!(perm.wrap(26), 0);
        assert_eq!(perm.wrap(-53), 25);
        assert_eq!(perm.wrap(3), 3);
    }

    #[test]
    fn test_malformed_cycles() {
        let alpha = Alphabet::latin();
        for bad in ["(AB", "AB)", "(A(B))", "(AB) C", "(Ab)", "(AB)(BC)", "(ABA)"] {
            assert!(
                matches!(
                    Permutation::new(bad, &alpha),
                    Err(EnigmaError::MalformedCycle(_))
                ),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_symbol_outside_alphabet() {
        let perm = Permutation::identity(&Alphabet::latin());
        assert!(matches!(
            perm.permute_symbol('1'),
            Err(EnigmaError::AlphabetMismatch('1'))
        ));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_index_panics() {
        let perm = Permutation::identity(&Alphabet::latin());
        perm.permute(26);
    }

    proptest! {
        #[test]
        fn prop_forward_and_inverse_are_mutual(order in Just((0..26usize).collect::<Vec<_>>()).prop_shuffle(), split in 1usize..26) {
            let alpha = Alphabet::latin();
            let letters: String = order.iter().map(|&i| alpha.to_symbol(i)).collect();
            let cycles = format!("({}) ({})", &letters[..split], &letters[split..]);
            let perm = Permutation::new(&cycles, &alpha).unwrap();
            for i in 0..alpha.size() {
                prop_assert_eq!(perm.invert(perm.permute(i)), i);
                prop_assert_eq!(perm.permute(perm.invert(i)), i);
            }
        }
    }
}
