//! Main application state and UI

use eframe::egui;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use crate::analysis::{
    parse_sequence_input, reverse_complement, run_analysis, AnalysisReport, EditingReport,
    ProgressUpdate, SequenceRecord, StabilityParams, StabilityReport, StabilityVerdict,
};

/// Application state
pub struct GenescreenApp {
    // Input tab state - candidate sequence
    candidate_input: String,
    candidate_record: Option<SequenceRecord>,
    candidate_error: Option<String>,

    // Input tab state - reference (intended original)
    reference_input: String,
    reference_record: Option<SequenceRecord>,
    reference_error: Option<String>,

    // Analysis parameters
    params: StabilityParams,

    // Analysis state
    is_analyzing: bool,
    analysis_progress: Option<ProgressUpdate>,
    progress_rx: Option<Receiver<ProgressUpdate>>,
    report_rx: Option<Receiver<AnalysisReport>>,

    // Results state
    report: Option<AnalysisReport>,

    // Sequence display options
    show_reverse_complement: bool,
    show_codon_spacing: bool,

    // View state
    current_tab: Tab,

    // Save/Load
    save_error: Option<String>,
    load_error: Option<String>,

    // Deferred actions
    pending_save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Input,
    Analysis,
    Results,
}

impl Default for GenescreenApp {
    fn default() -> Self {
        Self {
            candidate_input: String::new(),
            candidate_record: None,
            candidate_error: None,
            reference_input: String::new(),
            reference_record: None,
            reference_error: None,
            params: StabilityParams::default(),
            is_analyzing: false,
            analysis_progress: None,
            progress_rx: None,
            report_rx: None,
            report: None,
            show_reverse_complement: false,
            show_codon_spacing: false,
            current_tab: Tab::Input,
            save_error: None,
            load_error: None,
            pending_save: false,
        }
    }
}

impl GenescreenApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn parse_candidate_input(&mut self) {
        self.candidate_error = None;
        self.candidate_record = None;

        if self.candidate_input.trim().is_empty() {
            return;
        }

        match parse_sequence_input(&self.candidate_input) {
            Ok(record) => {
                self.candidate_record = Some(record);
            }
            Err(e) => {
                self.candidate_error = Some(e);
            }
        }
    }

    fn parse_reference_input(&mut self) {
        self.reference_error = None;
        self.reference_record = None;

        if self.reference_input.trim().is_empty() {
            return;
        }

        match parse_sequence_input(&self.reference_input) {
            Ok(record) => {
                self.reference_record = Some(record);
            }
            Err(e) => {
                self.reference_error = Some(e);
            }
        }
    }

    fn start_analysis(&mut self) {
        let Some(candidate) = &self.candidate_record else {
            return;
        };

        let candidate_clone = candidate.clone();
        let reference_clone = self.reference_record.clone();
        let params_clone = self.params.clone();

        let (progress_tx, progress_rx) = channel();
        let (report_tx, report_rx) = channel();

        self.progress_rx = Some(progress_rx);
        self.report_rx = Some(report_rx);
        self.is_analyzing = true;
        self.analysis_progress = None;

        thread::spawn(move || {
            let report = run_analysis(
                &candidate_clone,
                reference_clone.as_ref(),
                &params_clone,
                Some(progress_tx),
            );
            let _ = report_tx.send(report);
        });
    }

    fn check_analysis_progress(&mut self) {
        if let Some(rx) = &self.progress_rx {
            while let Ok(progress) = rx.try_recv() {
                self.analysis_progress = Some(progress);
            }
        }

        if let Some(rx) = &self.report_rx {
            if let Ok(report) = rx.try_recv() {
                self.report = Some(report);
                self.is_analyzing = false;
                self.progress_rx = None;
                self.report_rx = None;
                self.current_tab = Tab::Results;
            }
        }
    }

    fn save_report(&mut self) {
        let Some(report) = &self.report else {
            self.save_error = Some("No report to save".to_string());
            return;
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("analysis_report.json")
            .save_file()
        {
            match serde_json::to_string_pretty(report) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        self.save_error = Some(format!("Failed to write file: {}", e));
                    } else {
                        self.save_error = None;
                    }
                }
                Err(e) => {
                    self.save_error = Some(format!("Failed to serialize: {}", e));
                }
            }
        }
    }

    fn load_report(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(json) => match serde_json::from_str::<AnalysisReport>(&json) {
                    Ok(report) => {
                        self.report = Some(report);
                        self.load_error = None;
                        self.current_tab = Tab::Results;
                    }
                    Err(e) => {
                        self.load_error = Some(format!("Failed to parse: {}", e));
                    }
                },
                Err(e) => {
                    self.load_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }

    fn load_candidate_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("FASTA", &["fasta", "fa", "fna", "fas", "txt"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    self.candidate_input = content;
                    self.parse_candidate_input();
                }
                Err(e) => {
                    self.candidate_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }

    fn load_reference_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("FASTA", &["fasta", "fa", "fna", "fas", "txt"])
            .pick_file()
        {
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    self.reference_input = content;
                    self.parse_reference_input();
                }
                Err(e) => {
                    self.reference_error = Some(format!("Failed to read file: {}", e));
                }
            }
        }
    }
}

impl eframe::App for GenescreenApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.is_analyzing {
            self.check_analysis_progress();
            ctx.request_repaint();
        }

        if self.pending_save {
            self.pending_save = false;
            self.save_report();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load Candidate...").clicked() {
                        self.load_candidate_file();
                        ui.close_menu();
                    }
                    if ui.button("Load Reference...").clicked() {
                        self.load_reference_file();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Load Report...").clicked() {
                        self.load_report();
                        ui.close_menu();
                    }
                    if ui.button("Save Report...").clicked() {
                        self.save_report();
                        ui.close_menu();
                    }
                });
            });
        });

        // Tab bar
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.current_tab, Tab::Input, "Input Data");
                ui.selectable_value(&mut self.current_tab, Tab::Analysis, "Analysis Setup");
                ui.selectable_value(&mut self.current_tab, Tab::Results, "Results");
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.is_analyzing {
                    ui.spinner();
                    if let Some(ref progress) = self.analysis_progress {
                        ui.label(format!(
                            "Step {}/{}: {}",
                            progress.step, progress.total_steps, progress.message
                        ));
                    } else {
                        ui.label("Starting analysis...");
                    }
                } else if let Some(ref report) = self.report {
                    ui.label(format!(
                        "Report: {} ({} bp)",
                        report.sequence_name, report.sequence_length
                    ));
                } else {
                    let mut parts = Vec::new();
                    if let Some(ref c) = self.candidate_record {
                        parts.push(format!("Candidate: {} bp", c.sequence.len()));
                    }
                    if let Some(ref r) = self.reference_record {
                        parts.push(format!("Reference: {} bp", r.sequence.len()));
                    }
                    if parts.is_empty() {
                        ui.label("Load a candidate sequence to begin");
                    } else {
                        ui.label(parts.join(" | "));
                    }
                }
            });
        });

        // Main content
        egui::CentralPanel::default().show(ctx, |ui| match self.current_tab {
            Tab::Input => self.show_input_tab(ui),
            Tab::Analysis => self.show_analysis_tab(ui),
            Tab::Results => self.show_results_tab(ui),
        });
    }
}

impl GenescreenApp {
    fn show_input_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Input Data");
        ui.separator();

        // Use available height for two panels
        let available_height = ui.available_height();
        let panel_height = (available_height / 2.0 - 60.0).max(120.0);

        // --- Candidate Sequence ---
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Candidate Sequence");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        self.candidate_input.clear();
                        self.candidate_record = None;
                        self.candidate_error = None;
                    }
                    if ui.button("Load File").clicked() {
                        self.load_candidate_file();
                    }
                    if ui.button("Load Example").clicked() {
                        self.candidate_input = EXAMPLE_CANDIDATE.to_string();
                        self.parse_candidate_input();
                    }
                });
            });

            ui.label("Sequence to analyze, FASTA or plain text (A, C, G, T only):");

            egui::ScrollArea::vertical()
                .id_salt("candidate_scroll")
                .max_height(panel_height)
                .show(ui, |ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut self.candidate_input)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(6),
                    );
                    if response.changed() {
                        self.parse_candidate_input();
                    }
                });

            if let Some(ref error) = self.candidate_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
            }
            if let Some(ref record) = self.candidate_record {
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 100),
                    format!("Candidate: {} ({} bp)", record.name, record.sequence.len()),
                );
            }
        });

        ui.add_space(5.0);

        // --- Reference Sequence ---
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.heading("Reference Sequence (optional)");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        self.reference_input.clear();
                        self.reference_record = None;
                        self.reference_error = None;
                    }
                    if ui.button("Load File").clicked() {
                        self.load_reference_file();
                    }
                    if ui.button("Load Example").clicked() {
                        self.reference_input = EXAMPLE_REFERENCE.to_string();
                        self.parse_reference_input();
                    }
                });
            });

            ui.label("Intended original of the same length, for the Cas9 editing simulation:");

            egui::ScrollArea::vertical()
                .id_salt("reference_scroll")
                .max_height(panel_height)
                .show(ui, |ui| {
                    let response = ui.add(
                        egui::TextEdit::multiline(&mut self.reference_input)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY)
                            .desired_rows(6),
                    );
                    if response.changed() {
                        self.parse_reference_input();
                    }
                });

            if let Some(ref error) = self.reference_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
            }
            if let Some(ref record) = self.reference_record {
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 100),
                    format!("Reference: {} ({} bp)", record.name, record.sequence.len()),
                );
            }
            if let (Some(c), Some(r)) = (&self.candidate_record, &self.reference_record) {
                if c.sequence.len() != r.sequence.len() {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!(
                            "Lengths differ ({} vs {} bp); the editing simulation will report an error",
                            c.sequence.len(),
                            r.sequence.len()
                        ),
                    );
                }
            }
        });
    }

    fn show_analysis_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading("Analysis Setup");
        ui.separator();

        let Some(candidate_len) = self.candidate_record.as_ref().map(|c| c.sequence.len()) else {
            ui.colored_label(
                egui::Color32::YELLOW,
                "Please load a candidate sequence in the Input tab.",
            );
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            // Stable ranges
            ui.group(|ui| {
                ui.heading("Stable Ranges");

                ui.horizontal(|ui| {
                    ui.label("GC content (%):");
                    ui.add(egui::DragValue::new(&mut self.params.gc_stable_min).range(0.0..=100.0));
                    ui.label("to");
                    ui.add(egui::DragValue::new(&mut self.params.gc_stable_max).range(0.0..=100.0));
                });

                if self.params.gc_stable_min > self.params.gc_stable_max {
                    self.params.gc_stable_max = self.params.gc_stable_min;
                }

                ui.horizontal(|ui| {
                    ui.label("Melting temperature (°C):");
                    ui.add(egui::DragValue::new(&mut self.params.tm_stable_min).range(0.0..=120.0));
                    ui.label("to");
                    ui.add(egui::DragValue::new(&mut self.params.tm_stable_max).range(0.0..=120.0));
                });

                if self.params.tm_stable_min > self.params.tm_stable_max {
                    self.params.tm_stable_max = self.params.tm_stable_min;
                }

                ui.horizontal(|ui| {
                    ui.label("Wallace rule below (bases):");
                    ui.add(egui::DragValue::new(&mut self.params.tm_length_cutoff).range(1..=200));
                });
                ui.label("Shorter sequences use the Wallace Tm rule, longer ones the nearest-neighbor approximation.");
            });

            ui.add_space(10.0);

            // Motif detectors
            ui.group(|ui| {
                ui.heading("Motif Detectors");

                ui.horizontal(|ui| {
                    ui.label("Repeat window (bases):");
                    ui.add(egui::DragValue::new(&mut self.params.min_repeat_length).range(1..=50));
                    ui.add_space(20.0);
                    ui.label("Repeat score threshold:");
                    ui.add(
                        egui::DragValue::new(&mut self.params.repeat_score_threshold)
                            .range(0..=1000),
                    );
                });

                ui.horizontal(|ui| {
                    ui.label("Palindrome window (bases):");
                    ui.add(
                        egui::DragValue::new(&mut self.params.palindrome_min_length).range(2..=50),
                    );
                    ui.add_space(20.0);
                    ui.label("Hairpin stem (bases):");
                    ui.add(egui::DragValue::new(&mut self.params.hairpin_stem_length).range(1..=50));
                });

                ui.horizontal(|ui| {
                    ui.label("CpG ratio threshold:");
                    ui.add(
                        egui::DragValue::new(&mut self.params.cpg_ratio_threshold)
                            .range(0.0..=1.0)
                            .speed(0.01),
                    );
                    ui.add_space(20.0);
                    ui.label("AT/TA ratio threshold:");
                    ui.add(
                        egui::DragValue::new(&mut self.params.at_ratio_threshold)
                            .range(0.0..=1.0)
                            .speed(0.01),
                    );
                });

                if candidate_len > 2000 {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!(
                            "Warning: Long sequence ({} bp) may take significant time in the repeat and hairpin scans",
                            candidate_len
                        ),
                    );
                }
            });

            ui.add_space(10.0);

            // Length rule
            ui.group(|ui| {
                ui.heading("Length Rule");
                ui.horizontal(|ui| {
                    ui.label("Minimum stable length (bases):");
                    ui.add(egui::DragValue::new(&mut self.params.min_stable_length).range(1..=500));
                });
                ui.label("Shorter sequences are penalized with one instability factor.");
            });

            ui.add_space(20.0);

            // Run button
            ui.horizontal(|ui| {
                let can_run = !self.is_analyzing;
                if ui
                    .add_enabled(can_run, egui::Button::new("Run Analysis"))
                    .clicked()
                {
                    self.start_analysis();
                }

                if self.is_analyzing {
                    ui.spinner();
                    if let Some(ref progress) = self.analysis_progress {
                        ui.label(&progress.message);
                    }
                }
            });

            if self.reference_record.is_none() {
                ui.label("No reference loaded; only the stability prediction will run.");
            }
        });
    }

    fn show_results_tab(&mut self, ui: &mut egui::Ui) {
        if self.report.is_none() {
            ui.heading("Results");
            ui.separator();
            ui.label("No results yet. Run an analysis from the Analysis Setup tab.");
            return;
        }

        ui.horizontal(|ui| {
            ui.heading("Results");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save Report").clicked() {
                    self.pending_save = true;
                }
            });
        });
        ui.separator();

        let report = self.report.as_ref().unwrap();

        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .show(ui, |ui| {
                ui.label(format!(
                    "Sequence: {} ({} bp)",
                    report.sequence_name, report.sequence_length
                ));
                ui.add_space(5.0);

                if let Some(ref error) = report.stability_error {
                    ui.colored_label(egui::Color32::RED, format!("Stability: {}", error));
                }
                if let Some(ref stability) = report.stability {
                    show_stability_section(ui, stability);
                }

                ui.add_space(5.0);

                if let Some(ref error) = report.editing_error {
                    ui.colored_label(egui::Color32::RED, format!("Editing: {}", error));
                }
                if let Some(ref editing) = report.editing {
                    show_editing_section(
                        ui,
                        editing,
                        &mut self.show_reverse_complement,
                        &mut self.show_codon_spacing,
                    );
                } else if report.editing_error.is_none() {
                    ui.label("No reference sequence was loaded; the editing simulation was skipped.");
                }

                ui.add_space(10.0);
                ui.label(format!(
                    "Thresholds: GC {}-{}% | Tm {}-{}°C | repeat window {} (score > {}) | palindrome {} | hairpin stem {} | min length {}",
                    report.params.gc_stable_min,
                    report.params.gc_stable_max,
                    report.params.tm_stable_min,
                    report.params.tm_stable_max,
                    report.params.min_repeat_length,
                    report.params.repeat_score_threshold,
                    report.params.palindrome_min_length,
                    report.params.hairpin_stem_length,
                    report.params.min_stable_length,
                ));
            });

        // Error messages
        if let Some(ref error) = self.save_error {
            ui.colored_label(egui::Color32::RED, error);
        }
        if let Some(ref error) = self.load_error {
            ui.colored_label(egui::Color32::RED, error);
        }
    }
}

fn show_stability_section(ui: &mut egui::Ui, stability: &StabilityReport) {
    ui.group(|ui| {
        ui.heading("Structural Stability");

        ui.horizontal(|ui| {
            ui.label("Verdict:");
            ui.colored_label(
                verdict_color(stability.verdict),
                egui::RichText::new(stability.verdict.label()).strong(),
            );
            ui.separator();
            ui.label(format!(
                "Instability factors: {}",
                stability.instability_factors
            ));
        });

        ui.label(format!(
            "Length: {} bp | GC: {:.1}% | AT: {:.1}% | Tm: {:.1}°C",
            stability.sequence_length,
            stability.gc_content,
            stability.at_content,
            stability.melting_temperature
        ));

        ui.horizontal(|ui| {
            flag_label(ui, "Repetition", stability.is_repetitive);
            flag_label(ui, "Palindrome", stability.has_palindrome);
            flag_label(ui, "Dinucleotide bias", stability.has_dinucleotide_bias);
            flag_label(ui, "Hairpin", stability.has_hairpin_potential);
        });

        ui.separator();
        for reason in &stability.reasons {
            ui.label(format!("- {}", reason));
        }
    });
}

fn show_editing_section(
    ui: &mut egui::Ui,
    editing: &EditingReport,
    show_reverse_complement: &mut bool,
    show_codon_spacing: &mut bool,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.heading("CRISPR-Cas9 Editing Simulation");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(show_codon_spacing, "Codon spacing");
                ui.checkbox(show_reverse_complement, "Reverse complement");
            });
        });

        // Mutations
        if editing.mutations.is_empty() {
            ui.label("No mutations detected; the sequences are identical.");
        } else {
            ui.label(format!(
                "Detected mutations: {} (similarity before repair: {:.2}%)",
                editing.mutations.len(),
                editing.baseline_similarity
            ));
            egui::Grid::new("mutations_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    ui.strong("Position");
                    ui.strong("Original");
                    ui.strong("Mutated");
                    ui.end_row();
                    for mutation in &editing.mutations {
                        ui.label(format!("{}", mutation.position + 1));
                        ui.label(egui::RichText::new(mutation.original.to_string()).monospace());
                        ui.label(egui::RichText::new(mutation.mutated.to_string()).monospace());
                        ui.end_row();
                    }
                });
        }

        ui.separator();

        // PAM and cleavage
        if editing.editable() {
            if let (Some(pam), Some(motif)) = (editing.pam_position, &editing.pam_motif) {
                ui.label(format!(
                    "PAM site (NGG) found at position {} ({})",
                    pam + 1,
                    motif
                ));
            }
            if let Some(cleavage) = editing.cleavage_position {
                if editing.cleavage_in_range {
                    ui.label(format!(
                        "Predicted Cas9 cut at position {} (3 bases upstream of the PAM):",
                        cleavage + 1
                    ));
                    ui.add(egui::Label::new(
                        egui::RichText::new(cleavage_visual(
                            &editing.mutated_sequence,
                            cleavage as usize,
                        ))
                        .monospace(),
                    ));
                } else {
                    ui.colored_label(
                        egui::Color32::YELLOW,
                        format!(
                            "Predicted cut position {} falls outside the sequence; the repair is still simulated",
                            cleavage
                        ),
                    );
                }
            }
        } else {
            ui.colored_label(
                egui::Color32::YELLOW,
                "No valid NGG PAM site found. Cas9 editing not possible.",
            );
        }

        ui.separator();

        // Sequences
        sequence_line(
            ui,
            "Original:",
            &editing.original_sequence,
            *show_reverse_complement,
            *show_codon_spacing,
        );
        sequence_line(
            ui,
            "Mutated:",
            &editing.mutated_sequence,
            *show_reverse_complement,
            *show_codon_spacing,
        );
        if let Some(ref edited) = editing.edited_sequence {
            sequence_line(
                ui,
                "Edited:",
                edited,
                *show_reverse_complement,
                *show_codon_spacing,
            );
        }

        if let Some(similarity) = editing.similarity {
            ui.label(format!("Similarity after repair: {:.2}%", similarity));
            if editing.fully_restored() {
                ui.colored_label(
                    egui::Color32::from_rgb(100, 200, 100),
                    "All mismatches corrected. Sequence successfully restored!",
                );
            } else {
                ui.colored_label(egui::Color32::YELLOW, "Some mismatches remain after repair.");
            }
        }
    });
}

fn sequence_line(ui: &mut egui::Ui, name: &str, seq: &str, reverse_comp: bool, codon_spacing: bool) {
    ui.label(name);
    let mut display = if reverse_comp {
        reverse_complement(seq)
    } else {
        seq.to_string()
    };
    if codon_spacing {
        display = codon_spaced(&display);
    }
    ui.add(egui::Label::new(
        egui::RichText::new(display).monospace().size(11.0),
    ));
}

fn flag_label(ui: &mut egui::Ui, name: &str, flagged: bool) {
    if flagged {
        ui.colored_label(
            egui::Color32::from_rgb(220, 80, 80),
            format!("{}: detected", name),
        );
    } else {
        ui.colored_label(
            egui::Color32::from_rgb(100, 200, 100),
            format!("{}: none", name),
        );
    }
    ui.separator();
}

/// Insert a space between codons (every 3 bases)
fn codon_spaced(seq: &str) -> String {
    let mut out = String::with_capacity(seq.len() + seq.len() / 3);
    for (i, c) in seq.chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Bracket the base at the predicted cut position
fn cleavage_visual(seq: &str, cleavage: usize) -> String {
    let mut out = String::with_capacity(seq.len() + 2);
    out.push_str(&seq[..cleavage]);
    out.push('[');
    out.push_str(&seq[cleavage..cleavage + 1]);
    out.push(']');
    out.push_str(&seq[cleavage + 1..]);
    out
}

fn verdict_color(verdict: StabilityVerdict) -> egui::Color32 {
    match verdict {
        StabilityVerdict::Stable => egui::Color32::from_rgb(100, 200, 100),
        StabilityVerdict::ModeratelyStable => egui::Color32::from_rgb(255, 200, 60),
        StabilityVerdict::Unstable => egui::Color32::from_rgb(220, 80, 80),
    }
}

const EXAMPLE_CANDIDATE: &str = r#">Mutated fragment
ATGCTAGTTAGGCTTCGTAGTTAGGATGGTACGCTAGCCTAGATAGTTAG
"#;

const EXAMPLE_REFERENCE: &str = r#">Wildtype fragment
ATGCTAGCTAGGCTACGTAGCTAGGATCGTAGGCTAACGTAGCTAGCTAG
"#;
