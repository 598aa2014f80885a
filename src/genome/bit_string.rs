//! Bit string genome
//!
//! This module provides the fixed-length bit string that every individual in
//! a run carries. All producing operations allocate a fresh string; nothing
//! hands out a view into another individual's storage.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::OperatorError;

/// Fixed-length bit string genome
///
/// Genes are stored as booleans (`true` = 1, `false` = 0). Cloning performs a
/// deep copy, so two bit strings never share storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    /// The bits of this genome
    bits: Vec<bool>,
}

impl BitString {
    /// Create a new bit string with the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Generate a bit string of `length` independently drawn uniform bits
    ///
    /// A length of zero yields an empty bit string.
    pub fn generate<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.gen()).collect();
        Self { bits }
    }

    /// Create an all-zeros bit string of the given length
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones bit string of the given length
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Get the length of the bit string
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the bit string is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the bits
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Set a specific bit
    pub fn set(&mut self, index: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = value;
        }
    }

    /// Flip a specific bit
    pub fn flip(&mut self, index: usize) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = !*bit;
        }
    }

    /// Get the complement (all bits flipped)
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }

    /// Count the number of ones
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Count the number of zeros
    pub fn count_zeros(&self) -> usize {
        self.bits.len() - self.count_ones()
    }

    /// Hamming distance to another bit string
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Concatenate `self[..point]` with `other[point..]` into a new bit string
    ///
    /// Both strings must have the same length and `point <= len`.
    pub(crate) fn splice(&self, other: &Self, point: usize) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len());
        bits.extend_from_slice(&self.bits[..point]);
        bits.extend_from_slice(&other.bits[point..]);
        Self { bits }
    }

    /// Genes as 0/1 integers
    pub fn genes(&self) -> impl Iterator<Item = u8> + '_ {
        self.bits.iter().map(|&b| u8::from(b))
    }
}

impl std::ops::Index<usize> for BitString {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl<const N: usize> From<[bool; N]> for BitString {
    fn from(arr: [bool; N]) -> Self {
        Self { bits: arr.to_vec() }
    }
}

impl<'a> IntoIterator for &'a BitString {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = OperatorError;

    /// Parse a string of `0`/`1` characters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(OperatorError::InvalidConfiguration(format!(
                    "'{}' is not a binary gene",
                    other
                ))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bit_string_new() {
        let bs = BitString::new(vec![true, false, true]);
        assert_eq!(bs.len(), 3);
        assert_eq!(bs.bits(), &[true, false, true]);
    }

    #[test]
    fn test_bit_string_zeros_and_ones() {
        let zeros = BitString::zeros(5);
        assert_eq!(zeros.count_ones(), 0);
        assert_eq!(zeros.count_zeros(), 5);

        let ones = BitString::ones(5);
        assert_eq!(ones.count_ones(), 5);
        assert_eq!(ones.count_zeros(), 0);
    }

    #[test]
    fn test_bit_string_generate() {
        let mut rng = StdRng::seed_from_u64(7);
        let bs = BitString::generate(64, &mut rng);
        assert_eq!(bs.len(), 64);
        assert!(bs.genes().all(|g| g == 0 || g == 1));
    }

    #[test]
    fn test_bit_string_generate_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        let bs = BitString::generate(0, &mut rng);
        assert!(bs.is_empty());
    }

    #[test]
    fn test_bit_string_generate_is_seeded() {
        let a = BitString::generate(32, &mut StdRng::seed_from_u64(99));
        let b = BitString::generate(32, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bit_string_get_set_flip() {
        let mut bs = BitString::zeros(3);
        assert_eq!(bs.get(0), Some(false));
        assert_eq!(bs.get(3), None);

        bs.set(1, true);
        assert_eq!(bs.get(1), Some(true));

        bs.flip(1);
        bs.flip(2);
        assert_eq!(bs.bits(), &[false, false, true]);
    }

    #[test]
    fn test_bit_string_conversions() {
        let from_vec = BitString::from(vec![true, false, true]);
        let from_array = BitString::from([true, false, true]);
        assert_eq!(from_vec, from_array);
        assert!(from_vec[0]);
        assert!(!from_vec[1]);
        assert_eq!((&from_array).into_iter().filter(|&&b| b).count(), 2);
    }

    #[test]
    fn test_bit_string_complement() {
        let bs = BitString::new(vec![true, false, true]);
        assert_eq!(bs.complement().bits(), &[false, true, false]);
    }

    #[test]
    fn test_bit_string_hamming_distance() {
        let bs1 = BitString::new(vec![true, false, true, false]);
        let bs2 = BitString::new(vec![true, true, false, false]);
        assert_eq!(bs1.hamming_distance(&bs2), 2);
    }

    #[test]
    fn test_bit_string_splice() {
        let a: BitString = "0000".parse().unwrap();
        let b: BitString = "1111".parse().unwrap();
        assert_eq!(a.splice(&b, 1).to_string(), "0111");
        assert_eq!(b.splice(&a, 3).to_string(), "1110");
    }

    #[test]
    fn test_bit_string_display_and_parse() {
        let bs = BitString::new(vec![true, false, true, true]);
        assert_eq!(format!("{}", bs), "1011");
        assert_eq!("1011".parse::<BitString>().unwrap(), bs);
        assert!("10x1".parse::<BitString>().is_err());
    }

    #[test]
    fn test_bit_string_clone_does_not_alias() {
        let original = BitString::zeros(4);
        let mut copy = original.clone();
        copy.flip(0);
        assert_eq!(original, BitString::zeros(4));
    }
}
