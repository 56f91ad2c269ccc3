//! Plain-text rendering of option lists and generated questions, and saving
//! of exported files.

use crate::models::{Question, QuizmakerError, Result};
use crate::selection::{OptionLists, SelectionState};
use std::fmt::Write;
use std::path::Path;

/// Render generated questions as a numbered list.
///
/// The answer block is printed only for questions with a non-blank answer.
/// An empty list renders as an empty string.
pub fn render_questions(questions: &[Question]) -> String {
    if questions.is_empty() {
        return String::new();
    }

    let mut out = String::from("=== 생성된 문제 ===\n");
    for (i, q) in questions.iter().enumerate() {
        let _ = writeln!(out, "\n[{}]", i + 1);
        let _ = writeln!(out, "{}", q.question.trim_end());
        if let Some(answer) = q.visible_answer() {
            let _ = writeln!(out, "\n📝 정답 및 해설:");
            for line in answer.trim_end().lines() {
                let _ = writeln!(out, "    {line}");
            }
        }
    }
    out
}

/// Render the current selection path and the options at each dependent level.
pub fn render_selection(state: &SelectionState, options: &OptionLists) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "도메인: {}", state.domain);
    render_level(&mut out, "주요항목", &state.main_criterion, &options.main);
    render_level(&mut out, "세부항목", &state.sub_criterion, &options.sub);
    render_level(&mut out, "세세항목", &state.detail_criterion, &options.detail);
    out
}

fn render_level(out: &mut String, title: &str, selected: &str, options: &[&str]) {
    let _ = writeln!(out, "\n{title} ({}):", options.len());
    if options.is_empty() {
        let _ = writeln!(out, "  (선택 불가)");
        return;
    }
    for option in options {
        let marker = if *option == selected { '*' } else { ' ' };
        let _ = writeln!(out, " {marker} {option}");
    }
}

/// Write exported CSV bytes to `path`, replacing any existing file.
pub fn save_csv(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .map_err(|e| QuizmakerError::io(format!("Failed to write {}", path.display()), e))
}
