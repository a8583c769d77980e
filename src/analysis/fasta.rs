//! Input parsing for candidate and reference sequences
//!
//! Accepts either a single-record FASTA or bare sequence text, possibly
//! wrapped across lines. Characters are uppercased during accumulation and
//! validated strictly afterwards; an out-of-alphabet character is reported
//! with its position rather than silently dropped.

use super::sequence::is_standard_base;

/// A named, validated, uppercase DNA sequence
#[derive(Debug, Clone)]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

/// Parse pasted text as exactly one DNA sequence.
pub fn parse_sequence_input(text: &str) -> Result<SequenceRecord, String> {
    let mut records: Vec<(String, String)> = Vec::new();
    let mut current_name: Option<String> = None;
    let mut current_seq = String::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(name) = line.strip_prefix('>') {
            // Save previous record if one was started
            if current_name.is_some() || !current_seq.is_empty() {
                let name = current_name
                    .take()
                    .unwrap_or_else(|| format!("Sequence_{}", records.len() + 1));
                records.push((name, std::mem::take(&mut current_seq)));
            }
            current_name = Some(name.trim().to_string());
        } else {
            for c in line.chars() {
                if !c.is_whitespace() {
                    current_seq.push(c.to_ascii_uppercase());
                }
            }
        }
    }
    if current_name.is_some() || !current_seq.is_empty() {
        let name = current_name
            .take()
            .unwrap_or_else(|| format!("Sequence_{}", records.len() + 1));
        records.push((name, current_seq));
    }

    if records.is_empty() {
        return Err("No sequence found in input".to_string());
    }
    if records.len() > 1 {
        return Err(format!(
            "Input must contain exactly 1 sequence, found {}",
            records.len()
        ));
    }

    let (name, sequence) = records.swap_remove(0);
    if sequence.is_empty() {
        return Err("No sequence found in input".to_string());
    }
    for (i, c) in sequence.chars().enumerate() {
        if !is_standard_base(c) {
            return Err(format!(
                "Sequence contains invalid character '{}' at position {}. Only A, C, G, T are allowed.",
                c,
                i + 1
            ));
        }
    }

    Ok(SequenceRecord { name, sequence })
}
