//! DNA alphabet primitives: validation, complement, reverse complement
//!
//! The engine works on the strict uppercase A/C/G/T alphabet. Inputs are
//! normalized once at the boundary (parser or pipeline entry); everything
//! downstream can assume the alphabet holds.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Watson-Crick complement mapping
pub static COMPLEMENT: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert('A', 'T');
    map.insert('T', 'A');
    map.insert('C', 'G');
    map.insert('G', 'C');
    map
});

/// Check if a character is a standard DNA base
pub fn is_standard_base(c: char) -> bool {
    matches!(c, 'A' | 'C' | 'G' | 'T')
}

/// Check that a string is a non-empty run of standard bases.
/// Lowercase input is accepted; it is folded before the check.
pub fn is_valid_sequence(seq: &str) -> bool {
    !seq.is_empty() && seq.chars().all(|c| is_standard_base(c.to_ascii_uppercase()))
}

/// Byte-level complement for allocation-free window scans.
/// Bytes outside the strict alphabet map to 0 and never compare equal.
#[inline]
pub fn complement_base(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        _ => 0,
    }
}

/// Compute the reverse complement of a DNA sequence
pub fn reverse_complement(seq: &str) -> String {
    seq.chars()
        .rev()
        .map(|c| *COMPLEMENT.get(&c).unwrap_or(&c))
        .collect()
}

/// Check whether `a` equals the reverse complement of `b`.
/// Allocation-free; the motif scanners call this once per window pair.
#[inline]
pub fn is_reverse_complement_of(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let n = b.len();
    (0..n).all(|k| a[k] == complement_base(b[n - 1 - k]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complement_pairs() {
        assert_eq!(COMPLEMENT[&'A'], 'T');
        assert_eq!(COMPLEMENT[&'T'], 'A');
        assert_eq!(COMPLEMENT[&'C'], 'G');
        assert_eq!(COMPLEMENT[&'G'], 'C');
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(reverse_complement("ATCG"), "CGAT");
        assert_eq!(reverse_complement("AAAA"), "TTTT");
        assert_eq!(reverse_complement(""), "");
    }

    #[test]
    fn test_reverse_complement_involution() {
        let seq = "ATGCTAGCTAGGCTACGTAG";
        assert_eq!(reverse_complement(&reverse_complement(seq)), seq);
    }

    #[test]
    fn test_is_valid_sequence() {
        assert!(is_valid_sequence("ACGT"));
        assert!(is_valid_sequence("acgt"));
        assert!(!is_valid_sequence(""));
        assert!(!is_valid_sequence("ACGN"));
        assert!(!is_valid_sequence("ACG T"));
    }

    #[test]
    fn test_is_reverse_complement_of() {
        assert!(is_reverse_complement_of(b"AAAA", b"TTTT"));
        // ACGT is its own reverse complement
        assert!(is_reverse_complement_of(b"ACGT", b"ACGT"));
        assert!(!is_reverse_complement_of(b"AAAA", b"AAAA"));
        assert!(!is_reverse_complement_of(b"AC", b"ACG"));
        assert!(!is_reverse_complement_of(b"NN", b"NN"));
    }
}
