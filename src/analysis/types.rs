//! Data types for sequence analysis

use serde::{Deserialize, Serialize};

/// Thresholds and window sizes for the stability prediction rules.
///
/// Every numeric constant the rules depend on lives here so a run can be
/// reproduced from a saved report. Defaults match the published heuristic
/// values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityParams {
    /// Window size for the repeat scan
    pub min_repeat_length: usize,
    /// Accumulated repeat score above which a sequence counts as repetitive
    pub repeat_score_threshold: usize,
    /// Window size for the reverse-complement palindrome scan
    pub palindrome_min_length: usize,
    /// Stem size for the hairpin fold-back scan
    pub hairpin_stem_length: usize,
    /// CpG dinucleotide fraction above which bias is flagged
    pub cpg_ratio_threshold: f64,
    /// Combined AT/TA dinucleotide fraction above which bias is flagged
    pub at_ratio_threshold: f64,
    /// Sequences shorter than this use the Wallace melting temperature rule
    pub tm_length_cutoff: usize,
    /// Stable GC content band, in percent
    pub gc_stable_min: f64,
    pub gc_stable_max: f64,
    /// Stable melting temperature band, in degrees Celsius
    pub tm_stable_min: f64,
    pub tm_stable_max: f64,
    /// Sequences shorter than this are penalized as a stability factor
    pub min_stable_length: usize,
}

impl Default for StabilityParams {
    fn default() -> Self {
        Self {
            min_repeat_length: 6,
            repeat_score_threshold: 5,
            palindrome_min_length: 8,
            hairpin_stem_length: 4,
            cpg_ratio_threshold: 0.2,
            at_ratio_threshold: 0.4,
            tm_length_cutoff: 50,
            gc_stable_min: 40.0,
            gc_stable_max: 60.0,
            tm_stable_min: 50.0,
            tm_stable_max: 80.0,
            min_stable_length: 20,
        }
    }
}

/// Overall stability classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StabilityVerdict {
    Stable,
    ModeratelyStable,
    Unstable,
}

impl StabilityVerdict {
    /// Map an instability factor tally to a verdict
    pub fn from_factor_count(count: usize) -> Self {
        match count {
            0 => Self::Stable,
            1 | 2 => Self::ModeratelyStable,
            _ => Self::Unstable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::ModeratelyStable => "Moderately Stable",
            Self::Unstable => "Unstable",
        }
    }
}

/// Result of the stability prediction rules for one sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StabilityReport {
    pub verdict: StabilityVerdict,
    pub instability_factors: usize,
    /// One justification line per rule, in rule order
    pub reasons: Vec<String>,
    pub sequence_length: usize,
    pub gc_content: f64,
    pub at_content: f64,
    pub melting_temperature: f64,
    pub is_repetitive: bool,
    pub has_palindrome: bool,
    pub has_dinucleotide_bias: bool,
    pub has_hairpin_potential: bool,
}

/// A single point mutation between two equal-length sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationRecord {
    /// Zero-based position in both sequences
    pub position: usize,
    /// Base in the original (intended) sequence
    pub original: char,
    /// Base observed in the mutated sequence
    pub mutated: char,
}

/// Result of one simulated Cas9 editing round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditingReport {
    pub original_sequence: String,
    pub mutated_sequence: String,
    pub mutations: Vec<MutationRecord>,
    /// Zero-based index of the first NGG motif on the mutated sequence
    pub pam_position: Option<usize>,
    pub pam_motif: Option<String>,
    /// Predicted cut position; negative when the PAM sits near the 5' end
    pub cleavage_position: Option<isize>,
    pub cleavage_in_range: bool,
    pub baseline_similarity: f64,
    pub edited_sequence: Option<String>,
    pub similarity: Option<f64>,
}

impl EditingReport {
    /// True when a PAM site exists and editing could be simulated
    pub fn editable(&self) -> bool {
        self.pam_position.is_some()
    }

    /// True when the repaired sequence matches the original at every position
    pub fn fully_restored(&self) -> bool {
        self.similarity == Some(100.0)
    }
}

/// Complete outcome of one analysis run, as rendered and saved by the UI.
///
/// The stability and editing pipelines are independent; each carries its own
/// error slot so a failure in one never hides the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub params: StabilityParams,
    pub sequence_name: String,
    pub sequence_length: usize,
    pub stability: Option<StabilityReport>,
    pub stability_error: Option<String>,
    pub editing: Option<EditingReport>,
    pub editing_error: Option<String>,
}

/// Progress update during analysis
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub step: usize,
    pub total_steps: usize,
    pub message: String,
}
