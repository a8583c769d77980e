//! One-shot analysis orchestration
//!
//! Runs the stability rules over the candidate sequence and, when a
//! reference is loaded, the editing simulation against it. The two pipelines
//! are independent; a failure in one lands in its error slot and never hides
//! the other. Progress messages are sent best-effort: a missing or
//! disconnected receiver never fails the run.

use std::sync::mpsc::Sender;

use super::crispr::simulate_editing;
use super::fasta::SequenceRecord;
use super::stability::predict_stability;
use super::types::{AnalysisReport, ProgressUpdate, StabilityParams};

fn send_progress(
    tx: &Option<Sender<ProgressUpdate>>,
    step: usize,
    total_steps: usize,
    message: &str,
) {
    if let Some(tx) = tx {
        let _ = tx.send(ProgressUpdate {
            step,
            total_steps,
            message: message.to_string(),
        });
    }
}

/// Run every applicable pipeline over the loaded inputs.
pub fn run_analysis(
    candidate: &SequenceRecord,
    reference: Option<&SequenceRecord>,
    params: &StabilityParams,
    progress_tx: Option<Sender<ProgressUpdate>>,
) -> AnalysisReport {
    let total_steps = if reference.is_some() { 3 } else { 2 };

    let mut report = AnalysisReport {
        params: params.clone(),
        sequence_name: candidate.name.clone(),
        sequence_length: candidate.sequence.len(),
        stability: None,
        stability_error: None,
        editing: None,
        editing_error: None,
    };

    send_progress(&progress_tx, 1, total_steps, "Predicting structural stability...");
    match predict_stability(&candidate.sequence, params) {
        Ok(stability) => report.stability = Some(stability),
        Err(e) => report.stability_error = Some(e),
    }

    if let Some(reference) = reference {
        send_progress(&progress_tx, 2, total_steps, "Simulating Cas9 editing...");
        match simulate_editing(&reference.sequence, &candidate.sequence) {
            Ok(editing) => report.editing = Some(editing),
            Err(e) => report.editing_error = Some(e),
        }
    }

    send_progress(&progress_tx, total_steps, total_steps, "Analysis complete");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn record(name: &str, seq: &str) -> SequenceRecord {
        SequenceRecord {
            name: name.to_string(),
            sequence: seq.to_string(),
        }
    }

    #[test]
    fn test_stability_only_run() {
        let candidate = record("Candidate", "AAGAGGAAGGGAGAAAGGAG");
        let report = run_analysis(&candidate, None, &StabilityParams::default(), None);
        assert_eq!(report.sequence_name, "Candidate");
        assert_eq!(report.sequence_length, 20);
        assert!(report.stability.is_some());
        assert!(report.stability_error.is_none());
        assert!(report.editing.is_none());
        assert!(report.editing_error.is_none());
    }

    #[test]
    fn test_run_with_reference() {
        let original = "ATGCTAGCTAGGCTACGTAGCTAGGATCGTAGGCTAACGTAGCTAGCTAG";
        let mutated = "ATGCTAGTTAGGCTTCGTAGTTAGGATGGTACGCTAGCCTAGATAGTTAG";
        let report = run_analysis(
            &record("Mutant", mutated),
            Some(&record("Wildtype", original)),
            &StabilityParams::default(),
            None,
        );
        let editing = report.editing.unwrap();
        assert_eq!(editing.mutations.len(), 9);
        assert_eq!(editing.similarity, Some(100.0));
        assert!(report.stability.is_some());
    }

    #[test]
    fn test_invalid_candidate_fails_both_pipelines() {
        let report = run_analysis(
            &record("Bad", "ACGTN"),
            Some(&record("Ref", "ACGTA")),
            &StabilityParams::default(),
            None,
        );
        assert!(report.stability.is_none());
        assert_eq!(
            report.stability_error.as_deref(),
            Some("Invalid sequence: Only A, T, C, G are allowed.")
        );
        assert!(report.editing.is_none());
        assert!(report.editing_error.unwrap().contains("Invalid sequence"));
    }

    #[test]
    fn test_length_mismatch_fails_only_editing() {
        let report = run_analysis(
            &record("Candidate", "ACGTACGTACGT"),
            Some(&record("Ref", "ACGTACGT")),
            &StabilityParams::default(),
            None,
        );
        assert!(report.stability.is_some());
        assert!(report.stability_error.is_none());
        assert!(report.editing.is_none());
        assert!(report.editing_error.unwrap().contains("lengths differ"));
    }

    #[test]
    fn test_progress_messages_arrive_in_order() {
        let (tx, rx) = channel();
        let candidate = record("Candidate", "ACGTACGTACGT");
        run_analysis(
            &candidate,
            Some(&record("Ref", "ACGTACGTACGT")),
            &StabilityParams::default(),
            Some(tx),
        );
        let updates: Vec<ProgressUpdate> = rx.iter().collect();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].step, 1);
        assert_eq!(updates[0].total_steps, 3);
        assert_eq!(updates[2].message, "Analysis complete");
    }

    #[test]
    fn test_dropped_receiver_does_not_fail_the_run() {
        let (tx, rx) = channel();
        drop(rx);
        let report = run_analysis(
            &record("Candidate", "ACGTACGTACGT"),
            None,
            &StabilityParams::default(),
            Some(tx),
        );
        assert!(report.stability.is_some());
    }
}
