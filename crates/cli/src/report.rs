use articulation_core::alignment::domain::alignment_entry::MatchType;
use articulation_core::scoring::domain::word_score::WordScore;
use articulation_core::AssessmentResult;

/// Word rows shown in the text report before the table is cut off.
pub const REPORT_WORD_ROWS: usize = 30;

const RULE_WIDTH: usize = 70;

/// Renders the detailed human-readable report.
pub fn render_text(result: &AssessmentResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        heavy.clone(),
        "ARTICULATION REPORT".to_string(),
        heavy.clone(),
        String::new(),
        "OVERALL ASSESSMENT".to_string(),
        light.clone(),
        format!("Score:      {:.1}%", result.accuracy_percentage),
        format!("Category:   {}", result.category),
        format!("Points:     {}/5", result.points),
        format!(
            "Words:      {}/{} correct",
            result.correct_words, result.total_words
        ),
        format!("Time:       {:.2}s", result.processing_time_secs),
        String::new(),
        format!("WORD-BY-WORD ANALYSIS (first {REPORT_WORD_ROWS} words)"),
        light.clone(),
        format!(
            "{:<4} {:<20} {:<20} {:<15}",
            "No", "Expected", "Detected", "Status"
        ),
        light.clone(),
    ];

    for (i, ws) in result.word_scores.iter().take(REPORT_WORD_ROWS).enumerate() {
        lines.push(format!(
            "{:<4} {:<20} {:<20} {:<15}",
            i + 1,
            ws.expected_label(),
            ws.detected_label(),
            status(ws)
        ));
    }
    if result.word_scores.len() > REPORT_WORD_ROWS {
        lines.push(format!(
            "... and {} more words",
            result.word_scores.len() - REPORT_WORD_ROWS
        ));
    }
    lines.push(light.clone());
    lines.push(String::new());

    if !result.repetitions_detected.is_empty() {
        let repeats: Vec<String> = result
            .repetitions_detected
            .iter()
            .map(|(word, count)| format!("{word} x{count}"))
            .collect();
        lines.push(format!("Repetitions: {}", repeats.join(", ")));
        lines.push(String::new());
    }

    lines.push("FEEDBACK".to_string());
    lines.push(light);
    lines.extend(result.detailed_feedback.iter().cloned());
    lines.push(heavy);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Status column for one word row.
pub fn status(ws: &WordScore) -> String {
    if ws.is_filler {
        return "Filler".to_string();
    }
    match ws.match_type {
        MatchType::Match => "Correct".to_string(),
        MatchType::Deletion => "Not spoken".to_string(),
        MatchType::Insertion => "Extra word".to_string(),
        MatchType::Substitution => format!("Wrong ({:.0}%)", ws.similarity * 100.0),
    }
}
