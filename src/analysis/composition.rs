//! Composition metrics: GC/AT content and melting temperature

/// GC content as a percentage of sequence length.
/// Defined as 0.0 for the empty sequence.
pub fn gc_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.bytes().filter(|b| matches!(b, b'G' | b'C')).count();
    gc as f64 / seq.len() as f64 * 100.0
}

/// AT content as a percentage of sequence length.
/// Defined as 0.0 for the empty sequence.
pub fn at_content(seq: &str) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let at = seq.bytes().filter(|b| matches!(b, b'A' | b'T')).count();
    at as f64 / seq.len() as f64 * 100.0
}

/// Estimated melting temperature in degrees Celsius.
///
/// Sequences shorter than `length_cutoff` use the Wallace rule
/// `2*(A+T) + 4*(G+C)`; longer sequences use a simplified nearest-neighbor
/// approximation. The switch is strictly `<`: a sequence of exactly
/// `length_cutoff` bases takes the approximation branch.
pub fn melting_temperature(seq: &str, length_cutoff: usize) -> f64 {
    let gc = seq.bytes().filter(|b| matches!(b, b'G' | b'C')).count();
    let at = seq.bytes().filter(|b| matches!(b, b'A' | b'T')).count();
    if seq.len() < length_cutoff {
        (2 * at + 4 * gc) as f64
    } else {
        64.9 + 41.0 * (gc as f64 - 16.4) / seq.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content("GGCC"), 100.0);
        assert_eq!(gc_content("ATAT"), 0.0);
        assert_eq!(gc_content("ATGC"), 50.0);
        assert_eq!(gc_content(""), 0.0);
    }

    #[test]
    fn test_gc_at_contents_sum_to_hundred() {
        for seq in ["ATGC", "AAAAG", "ATGCTAGCTAGGCTACGTAG"] {
            let total = gc_content(seq) + at_content(seq);
            assert!((total - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wallace_rule_below_cutoff() {
        // 2*(A+T) + 4*(G+C)
        assert_eq!(melting_temperature("ATGC", 50), 12.0);
        assert_eq!(melting_temperature(&"A".repeat(49), 50), 98.0);
    }

    #[test]
    fn test_approximation_at_cutoff() {
        // Exactly at the cutoff the nearest-neighbor branch applies
        let seq = "A".repeat(50);
        let expected = 64.9 + 41.0 * (0.0 - 16.4) / 50.0;
        assert_eq!(melting_temperature(&seq, 50), expected);
        assert!(melting_temperature(&seq, 50) < melting_temperature(&"A".repeat(49), 50));
    }

    #[test]
    fn test_cutoff_is_configurable() {
        // Same sequence, different cutoff, different branch
        assert_eq!(melting_temperature("ATGC", 5), 12.0);
        let expected = 64.9 + 41.0 * (2.0 - 16.4) / 4.0;
        assert_eq!(melting_temperature("ATGC", 4), expected);
    }
}
