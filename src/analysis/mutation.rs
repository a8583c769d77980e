//! Positional mutation detection and correction
//!
//! Both operations pair the two sequences position by position and require
//! equal lengths. A length mismatch is a caller error and is rejected;
//! silently truncating to the shorter sequence would hide mutations.

use super::types::MutationRecord;

fn check_equal_lengths(original: &str, mutated: &str) -> Result<(), String> {
    if original.len() != mutated.len() {
        return Err(format!(
            "Sequence lengths differ: original is {} bases, mutated is {} bases",
            original.len(),
            mutated.len()
        ));
    }
    Ok(())
}

/// Find every position where the two sequences disagree, in ascending order.
pub fn find_mutations(original: &str, mutated: &str) -> Result<Vec<MutationRecord>, String> {
    check_equal_lengths(original, mutated)?;
    Ok(original
        .chars()
        .zip(mutated.chars())
        .enumerate()
        .filter(|(_, (o, m))| o != m)
        .map(|(position, (original, mutated))| MutationRecord {
            position,
            original,
            mutated,
        })
        .collect())
}

/// Overwrite every mismatched base of `mutated` with the base from
/// `original`, replaying the diff as a patch.
pub fn correct_sequence(original: &str, mutated: &str) -> Result<String, String> {
    check_equal_lengths(original, mutated)?;
    let mut corrected: Vec<char> = mutated.chars().collect();
    for (i, o) in original.chars().enumerate() {
        if corrected[i] != o {
            corrected[i] = o;
        }
    }
    Ok(corrected.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGINAL: &str = "ATGCTAGCTAGGCTACGTAGCTAGGATCGTAGGCTAACGTAGCTAGCTAG";
    const MUTATED: &str = "ATGCTAGTTAGGCTTCGTAGTTAGGATGGTACGCTAGCCTAGATAGTTAG";

    #[test]
    fn test_identical_sequences_have_no_mutations() {
        assert!(find_mutations("AAAA", "AAAA").unwrap().is_empty());
    }

    #[test]
    fn test_single_mutation() {
        let mutations = find_mutations("AATT", "AACT").unwrap();
        assert_eq!(mutations.len(), 1);
        assert_eq!(
            mutations[0],
            MutationRecord {
                position: 2,
                original: 'T',
                mutated: 'C'
            }
        );
    }

    #[test]
    fn test_mutations_are_ordered_and_complete() {
        let mutations = find_mutations(ORIGINAL, MUTATED).unwrap();
        let positions: Vec<usize> = mutations.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![7, 14, 20, 27, 31, 36, 38, 42, 46]);
        assert_eq!(mutations[0].original, 'C');
        assert_eq!(mutations[0].mutated, 'T');
    }

    #[test]
    fn test_unequal_lengths_are_rejected() {
        let err = find_mutations("AAAA", "AAAAA").unwrap_err();
        assert!(err.contains("lengths differ"));
        assert!(correct_sequence("AAAAA", "AAAA").is_err());
    }

    #[test]
    fn test_correction_restores_original() {
        assert_eq!(correct_sequence(ORIGINAL, MUTATED).unwrap(), ORIGINAL);
        assert!(find_mutations(ORIGINAL, &correct_sequence(ORIGINAL, MUTATED).unwrap())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_correction_of_identical_input_is_identity() {
        assert_eq!(correct_sequence("ACGT", "ACGT").unwrap(), "ACGT");
    }
}
