//! Motif detectors: repetition, palindromes, dinucleotide bias, hairpins
//!
//! Each detector is an independent pure scan over an uppercase A/C/G/T
//! sequence. The hairpin scan is the only super-linear one here (worst case
//! quadratic in sequence length); the repeat scan is quadratic in window
//! count but cheap for the short sequences this tool targets.

use super::sequence::is_reverse_complement_of;

/// Count every placement of `needle` in `haystack`, overlapping included.
fn count_overlapping(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || haystack.len() < needle.len() {
        return 0;
    }
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

/// Count left-to-right non-overlapping placements of `needle`: after a
/// match the scan resumes past it.
fn count_non_overlapping(haystack: &[u8], needle: &[u8]) -> usize {
    if needle.is_empty() || haystack.len() < needle.len() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if &haystack[i..i + needle.len()] == needle {
            count += 1;
            i += needle.len();
        } else {
            i += 1;
        }
    }
    count
}

/// Accumulated repeat score: for every window of `min_repeat_length`, the
/// number of additional placements of that window elsewhere in the sequence,
/// overlapping placements included. Repeated windows contribute from each of
/// their positions, so heavy repeats are deliberately counted more than once.
pub fn repeat_score(seq: &str, min_repeat_length: usize) -> usize {
    let bytes = seq.as_bytes();
    if min_repeat_length == 0 || bytes.len() < min_repeat_length {
        return 0;
    }
    let mut score = 0;
    for window in bytes.windows(min_repeat_length) {
        let occurrences = count_overlapping(bytes, window);
        if occurrences > 1 {
            score += occurrences - 1;
        }
    }
    score
}

/// True when the accumulated repeat score exceeds `score_threshold`.
pub fn is_repetitive(seq: &str, min_repeat_length: usize, score_threshold: usize) -> bool {
    repeat_score(seq, min_repeat_length) > score_threshold
}

/// True when any window of `min_length` bases equals its own reverse
/// complement. Such windows can extrude cruciform structures. Sequences
/// shorter than the window never match.
pub fn has_palindrome(seq: &str, min_length: usize) -> bool {
    let bytes = seq.as_bytes();
    if min_length == 0 || bytes.len() < min_length {
        return false;
    }
    bytes.windows(min_length).any(|w| is_reverse_complement_of(w, w))
}

/// Fraction of adjacent positions occupied by a CG dinucleotide,
/// non-overlapping placements over `len - 1` slots. 0.0 below two bases.
pub fn cpg_ratio(seq: &str) -> f64 {
    if seq.len() <= 1 {
        return 0.0;
    }
    count_non_overlapping(seq.as_bytes(), b"CG") as f64 / (seq.len() - 1) as f64
}

/// Combined AT + TA dinucleotide fraction, same slot convention as
/// [`cpg_ratio`].
pub fn at_ratio(seq: &str) -> f64 {
    if seq.len() <= 1 {
        return 0.0;
    }
    let bytes = seq.as_bytes();
    let hits = count_non_overlapping(bytes, b"AT") + count_non_overlapping(bytes, b"TA");
    hits as f64 / (seq.len() - 1) as f64
}

/// True when either dinucleotide ratio strictly exceeds its threshold.
pub fn has_dinucleotide_bias(seq: &str, cpg_threshold: f64, at_threshold: f64) -> bool {
    cpg_ratio(seq) > cpg_threshold || at_ratio(seq) > at_threshold
}

/// True when two non-overlapping `stem_length` windows are reverse
/// complements of each other, allowing a fold-back pairing. The downstream
/// stem must start at least one base past the upstream stem; first match
/// wins.
pub fn has_hairpin_potential(seq: &str, stem_length: usize) -> bool {
    let bytes = seq.as_bytes();
    if stem_length == 0 {
        return false;
    }
    // Upstream stem index runs to len - 2*stem - 2; anything shorter than
    // 2*stem + 2 bases has no room for a pair.
    let outer_end = match bytes.len().checked_sub(2 * stem_length + 1) {
        Some(end) => end,
        None => return false,
    };
    for i in 0..outer_end {
        let stem1 = &bytes[i..i + stem_length];
        for j in (i + stem_length + 1)..=(bytes.len() - stem_length) {
            let stem2 = &bytes[j..j + stem_length];
            if is_reverse_complement_of(stem2, stem1) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_conventions() {
        // The repeat scan counts overlapping placements, the dinucleotide
        // ratios do not.
        assert_eq!(count_overlapping(b"AAAA", b"AA"), 3);
        assert_eq!(count_non_overlapping(b"AAAA", b"AA"), 2);
        assert_eq!(count_overlapping(b"ACGT", b"GG"), 0);
        assert_eq!(count_non_overlapping(b"AT", b"ATAT"), 0);
    }

    #[test]
    fn test_repeat_score_homopolymer() {
        // 5 windows of AAAAAA, each placed 5 times: 5 * (5 - 1)
        assert_eq!(repeat_score("AAAAAAAAAA", 6), 20);
        assert!(is_repetitive("AAAAAAAAAA", 6, 5));
    }

    #[test]
    fn test_repeat_score_counts_each_position() {
        // ATGCAT appears at 0 and 4; both windows contribute 1
        assert_eq!(repeat_score("ATGCATGCAT", 6), 2);
        assert!(!is_repetitive("ATGCATGCAT", 6, 5));
    }

    #[test]
    fn test_repeat_score_unique_windows() {
        assert_eq!(repeat_score("ATGCTAGCTA", 6), 0);
    }

    #[test]
    fn test_repeat_score_short_sequence() {
        assert_eq!(repeat_score("AAAA", 6), 0);
        assert!(!is_repetitive("", 6, 5));
    }

    #[test]
    fn test_palindrome_detection() {
        // ATCGCGAT reverse-complements to itself
        assert!(has_palindrome("ATCGCGAT", 8));
        assert!(has_palindrome("TTTTATCGCGATTTTT", 8));
        // EcoRI site with a shorter window
        assert!(has_palindrome("AAGAATTCAA", 6));
        assert!(!has_palindrome("AAAAAAAA", 8));
        // Window longer than sequence
        assert!(!has_palindrome("ATCGCGAT", 9));
    }

    #[test]
    fn test_dinucleotide_ratios() {
        // CGCGCGCG: 4 non-overlapping CG over 7 slots
        assert!((cpg_ratio("CGCGCGCG") - 4.0 / 7.0).abs() < 1e-9);
        // ATATATAT: 4 AT + 3 TA over 7 slots
        assert!((at_ratio("ATATATAT") - 1.0).abs() < 1e-9);
        assert_eq!(cpg_ratio("A"), 0.0);
        assert_eq!(at_ratio(""), 0.0);
    }

    #[test]
    fn test_dinucleotide_bias_thresholds_are_strict() {
        assert!(has_dinucleotide_bias("CGCGCGCG", 0.2, 0.4));
        assert!(has_dinucleotide_bias("ATATATAT", 0.2, 0.4));
        // Exactly 2 CG over 10 slots: ratio 0.2, not above it
        let seq = "CGAAAAACGAA";
        assert!((cpg_ratio(seq) - 0.2).abs() < 1e-9);
        assert!(!has_dinucleotide_bias(seq, 0.2, 0.4));
        assert!(!has_dinucleotide_bias("GGGGCCCC", 0.2, 0.4));
    }

    #[test]
    fn test_hairpin_detection() {
        // AAAA at 0 pairs with TTTT at 5
        assert!(has_hairpin_potential("AAAAGTTTTT", 4));
        assert!(!has_hairpin_potential("ACGTACGTAC", 4));
        assert!(!has_hairpin_potential("AAAAAAAAAA", 4));
    }

    #[test]
    fn test_hairpin_needs_room_for_both_stems() {
        // 9 bases cannot host two 4-base stems with a gap
        assert!(!has_hairpin_potential("AAAAGTTTT", 4));
        assert!(!has_hairpin_potential("AAAA", 4));
        assert!(!has_hairpin_potential("", 4));
    }
}
