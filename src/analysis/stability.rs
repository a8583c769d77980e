//! Rule-based structural stability prediction
//!
//! Runs the composition metrics and every motif detector over one sequence,
//! tallies instability factors, and produces a verdict with one
//! justification line per rule, in rule order. Rules are independent; no
//! early exit once validation has passed.

use super::composition::{at_content, gc_content, melting_temperature};
use super::motifs::{has_dinucleotide_bias, has_hairpin_potential, has_palindrome, is_repetitive};
use super::sequence::is_valid_sequence;
use super::types::{StabilityParams, StabilityReport, StabilityVerdict};

/// Predict whether a DNA sequence is structurally stable.
///
/// The input is uppercased once here; the detectors assume the normalized
/// alphabet. Invalid or empty input is rejected before any rule runs.
pub fn predict_stability(
    sequence: &str,
    params: &StabilityParams,
) -> Result<StabilityReport, String> {
    let seq = sequence.to_ascii_uppercase();
    if !is_valid_sequence(&seq) {
        return Err("Invalid sequence: Only A, T, C, G are allowed.".to_string());
    }

    let length = seq.len();
    let gc = gc_content(&seq);
    let at = at_content(&seq);
    let tm = melting_temperature(&seq, params.tm_length_cutoff);
    let repetitive = is_repetitive(&seq, params.min_repeat_length, params.repeat_score_threshold);
    let palindromic = has_palindrome(&seq, params.palindrome_min_length);
    let biased = has_dinucleotide_bias(&seq, params.cpg_ratio_threshold, params.at_ratio_threshold);
    let hairpin = has_hairpin_potential(&seq, params.hairpin_stem_length);

    let mut reasons = Vec::new();
    let mut instability_factors = 0;

    if gc >= params.gc_stable_min && gc <= params.gc_stable_max {
        reasons.push(format!(
            "GC content ({:.1}%) is in stable range ({}-{}%).",
            gc, params.gc_stable_min, params.gc_stable_max
        ));
    } else {
        reasons.push(format!(
            "GC content ({:.1}%) is outside stable range ({}-{}%).",
            gc, params.gc_stable_min, params.gc_stable_max
        ));
        instability_factors += 1;
    }

    if tm >= params.tm_stable_min && tm <= params.tm_stable_max {
        reasons.push(format!(
            "Melting temperature ({:.1}°C) is in stable range ({}-{}°C).",
            tm, params.tm_stable_min, params.tm_stable_max
        ));
    } else {
        reasons.push(format!(
            "Melting temperature ({:.1}°C) is outside stable range ({}-{}°C).",
            tm, params.tm_stable_min, params.tm_stable_max
        ));
        instability_factors += 1;
    }

    if repetitive {
        reasons.push("High repetition detected, indicating potential instability.".to_string());
        instability_factors += 1;
    } else {
        reasons.push("No significant repetition detected.".to_string());
    }

    if palindromic {
        reasons
            .push("Palindromic sequence detected, may form cruciforms (instability).".to_string());
        instability_factors += 1;
    } else {
        reasons.push("No significant palindromes detected.".to_string());
    }

    if biased {
        reasons.push("Extreme CpG or AT bias detected, suggesting instability.".to_string());
        instability_factors += 1;
    } else {
        reasons.push("No extreme dinucleotide bias detected.".to_string());
    }

    if hairpin {
        reasons.push("Hairpin-forming potential detected, indicating instability.".to_string());
        instability_factors += 1;
    } else {
        reasons.push("No hairpin-forming potential detected.".to_string());
    }

    if length < params.min_stable_length {
        reasons.push(format!(
            "Sequence is very short (<{} bases), may be less stable.",
            params.min_stable_length
        ));
        instability_factors += 1;
    } else {
        reasons.push(format!("Sequence length ({} bases) is sufficient.", length));
    }

    Ok(StabilityReport {
        verdict: StabilityVerdict::from_factor_count(instability_factors),
        instability_factors,
        reasons,
        sequence_length: length,
        gc_content: gc,
        at_content: at,
        melting_temperature: tm,
        is_repetitive: repetitive,
        has_palindrome: palindromic,
        has_dinucleotide_bias: biased,
        has_hairpin_potential: hairpin,
    })
}
