//! CRISPR-Cas9 editing simulation: PAM location, cleavage, HDR correction
//!
//! Cas9 requires an NGG protospacer-adjacent motif and cuts three bases
//! upstream (5') of it. The simulation diffs a mutated sequence against the
//! intended original, locates the first PAM on the mutated strand, and when
//! one exists applies a full homology-directed repair of every mismatch.

use super::mutation::{correct_sequence, find_mutations};
use super::sequence::is_valid_sequence;
use super::types::EditingReport;

/// Cut site offset relative to the PAM
pub const CAS9_CUT_OFFSET: isize = -3;

/// Find the first NGG motif, scanning left to right.
/// Returns the zero-based index of the N position.
pub fn find_pam_site(seq: &str) -> Option<usize> {
    seq.as_bytes()
        .windows(3)
        .position(|w| w[1] == b'G' && w[2] == b'G')
}

/// Predicted cleavage position for a PAM at `pam_position`.
///
/// Negative when the PAM sits within the first three bases. A negative
/// result means the blunt cut falls outside the modeled sequence; it is
/// reported as-is, never clamped.
pub fn cleavage_site(pam_position: usize) -> isize {
    pam_position as isize + CAS9_CUT_OFFSET
}

/// Percentage of positions at which the two sequences agree, rounded to
/// two decimal places. Requires equal non-empty lengths.
pub fn similarity_percentage(a: &str, b: &str) -> Result<f64, String> {
    if a.is_empty() || b.is_empty() {
        return Err("Cannot compute similarity of an empty sequence".to_string());
    }
    if a.len() != b.len() {
        return Err(format!(
            "Sequence lengths differ: {} vs {} bases",
            a.len(),
            b.len()
        ));
    }
    let matches = a.chars().zip(b.chars()).filter(|(x, y)| x == y).count();
    let pct = matches as f64 / a.len() as f64 * 100.0;
    Ok((pct * 100.0).round() / 100.0)
}

/// Simulate a full Cas9 + HDR editing round.
///
/// Both inputs are uppercased once at entry and must be non-empty,
/// A/C/G/T only, and of equal length. Correction is gated on PAM presence
/// only: the cleavage position is reported together with its range
/// validity, but an out-of-range cut site does not block the simulated
/// repair.
pub fn simulate_editing(original: &str, mutated: &str) -> Result<EditingReport, String> {
    let original = original.to_ascii_uppercase();
    let mutated = mutated.to_ascii_uppercase();

    if original.is_empty() || mutated.is_empty() {
        return Err("Cannot simulate editing of an empty sequence".to_string());
    }
    if !is_valid_sequence(&original) || !is_valid_sequence(&mutated) {
        return Err("Invalid sequence: Only A, T, C, G are allowed.".to_string());
    }

    let mutations = find_mutations(&original, &mutated)?;
    let baseline_similarity = similarity_percentage(&original, &mutated)?;

    let pam_position = find_pam_site(&mutated);
    let pam_motif = pam_position.map(|p| mutated[p..p + 3].to_string());
    let cleavage_position = pam_position.map(cleavage_site);
    let cleavage_in_range = cleavage_position
        .map(|pos| pos >= 0 && (pos as usize) < mutated.len())
        .unwrap_or(false);

    let (edited_sequence, similarity) = match pam_position {
        Some(_) => {
            let edited = correct_sequence(&original, &mutated)?;
            let similarity = similarity_percentage(&original, &edited)?;
            (Some(edited), Some(similarity))
        }
        None => (None, None),
    };

    Ok(EditingReport {
        original_sequence: original,
        mutated_sequence: mutated,
        mutations,
        pam_position,
        pam_motif,
        cleavage_position,
        cleavage_in_range,
        baseline_similarity,
        edited_sequence,
        similarity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = "ATGCTAGCTAGGCTACGTAGCTAGGATCGTAGGCTAACGTAGCTAGCTAG";
    const MUTATED: &str = "ATGCTAGTTAGGCTTCGTAGTTAGGATGGTACGCTAGCCTAGATAGTTAG";

    #[test]
    fn test_find_pam_site() {
        // First window whose 2nd and 3rd bases are GG
        assert_eq!(find_pam_site("AAAGGCCC"), Some(2));
        assert_eq!(find_pam_site("AGG"), Some(0));
        assert_eq!(find_pam_site("GGG"), Some(0));
        assert_eq!(find_pam_site("AAAAAA"), None);
        assert_eq!(find_pam_site("GG"), None);
        assert_eq!(find_pam_site(""), None);
    }

    #[test]
    fn test_cleavage_site_is_never_clamped() {
        assert_eq!(cleavage_site(9), 6);
        assert_eq!(cleavage_site(2), -1);
        assert_eq!(cleavage_site(0), -3);
    }

    #[test]
    fn test_similarity_percentage() {
        assert_eq!(similarity_percentage("AAAA", "AAAA").unwrap(), 100.0);
        assert_eq!(similarity_percentage("AAAA", "AAAT").unwrap(), 75.0);
        // 2 of 3 positions agree, rounded to two decimals
        assert_eq!(similarity_percentage("ATG", "ATC").unwrap(), 66.67);
        assert!(similarity_percentage("", "").is_err());
        assert!(similarity_percentage("AAA", "AAAA").is_err());
    }

    #[test]
    fn test_full_editing_round() {
        let report = simulate_editing(ORIGINAL, MUTATED).unwrap();
        assert_eq!(report.mutations.len(), 9);
        assert_eq!(report.mutations[0].position, 7);
        assert_eq!(report.baseline_similarity, 82.0);
        assert_eq!(report.pam_position, Some(9));
        assert_eq!(report.pam_motif.as_deref(), Some("AGG"));
        assert_eq!(report.cleavage_position, Some(6));
        assert!(report.cleavage_in_range);
        assert_eq!(report.edited_sequence.as_deref(), Some(ORIGINAL));
        assert_eq!(report.similarity, Some(100.0));
        assert!(report.editable());
        assert!(report.fully_restored());
    }

    #[test]
    fn test_no_pam_blocks_correction() {
        let report = simulate_editing("AAAA", "AAAT").unwrap();
        assert_eq!(report.mutations.len(), 1);
        assert_eq!(report.baseline_similarity, 75.0);
        assert_eq!(report.pam_position, None);
        assert_eq!(report.cleavage_position, None);
        assert!(!report.cleavage_in_range);
        assert_eq!(report.edited_sequence, None);
        assert_eq!(report.similarity, None);
        assert!(!report.editable());
        assert!(!report.fully_restored());
    }

    #[test]
    fn test_early_pam_reports_out_of_range_cleavage() {
        // PAM at 0 puts the cut at -3; correction still proceeds
        let report = simulate_editing("GGGG", "GGGG").unwrap();
        assert_eq!(report.pam_position, Some(0));
        assert_eq!(report.cleavage_position, Some(-3));
        assert!(!report.cleavage_in_range);
        assert_eq!(report.edited_sequence.as_deref(), Some("GGGG"));
        assert_eq!(report.similarity, Some(100.0));
    }

    #[test]
    fn test_inputs_are_normalized_to_uppercase() {
        let report = simulate_editing(&ORIGINAL.to_lowercase(), MUTATED).unwrap();
        assert_eq!(report.original_sequence, ORIGINAL);
        assert_eq!(report.mutations.len(), 9);
    }

    #[test]
    fn test_unequal_lengths_are_rejected() {
        assert!(simulate_editing("AAAA", "AAAAA").is_err());
        assert!(simulate_editing("", "AAAA").is_err());
    }

    #[test]
    fn test_invalid_alphabet_is_rejected() {
        let err = simulate_editing("ACGN", "ACGT").unwrap_err();
        assert_eq!(err, "Invalid sequence: Only A, T, C, G are allowed.");
    }
}
