use super::assessment_result::ErrorTally;
use super::grade::Category;
use super::word_score::WordScore;
use crate::alignment::domain::alignment_entry::MatchType;
use crate::shared::constants::{FILLER_PREVIEW_LIMIT, SUBSTITUTION_EXAMPLES_LIMIT};

/// Everything the feedback lines are derived from.
pub struct FeedbackContext<'a> {
    pub word_scores: &'a [WordScore],
    pub fillers: &'a [String],
    pub tally: ErrorTally,
    pub correct_words: usize,
    pub total_words: usize,
    pub accuracy_percentage: f64,
    pub category: Category,
}

/// Builds the human-readable feedback, in this order: accuracy summary,
/// filler note, error tallies, substitution examples, recommendations.
/// Sections with nothing to say are omitted, except the summary and
/// recommendations.
pub fn generate(ctx: &FeedbackContext<'_>) -> Vec<String> {
    let mut lines = vec![format!(
        "Word accuracy: {}/{} words correct ({:.1}%)",
        ctx.correct_words, ctx.total_words, ctx.accuracy_percentage
    )];

    if !ctx.fillers.is_empty() {
        lines.push(format!(
            "Filler words: {} detected ({})",
            ctx.fillers.len(),
            filler_preview(ctx.fillers).join(", ")
        ));
        lines.push("  Fillers are normal in natural speech and do not reduce the score.".into());
    }

    if ctx.tally.total() > 0 {
        lines.push("Error analysis:".into());
        if ctx.tally.deletions > 0 {
            lines.push(format!("  • {} words not spoken", ctx.tally.deletions));
        }
        if ctx.tally.substitutions > 0 {
            lines.push(format!("  • {} words mispronounced", ctx.tally.substitutions));
        }
        if ctx.tally.extra_words > 0 {
            lines.push(format!(
                "  • {} extra words (not fillers)",
                ctx.tally.extra_words
            ));
        }
    }

    let examples: Vec<&WordScore> = ctx
        .word_scores
        .iter()
        .filter(|ws| !ws.is_correct && ws.match_type == MatchType::Substitution)
        .take(SUBSTITUTION_EXAMPLES_LIMIT)
        .collect();
    if !examples.is_empty() {
        lines.push("Mispronounced words:".into());
        for ws in examples {
            lines.push(format!(
                "  • '{}' detected as '{}' (similarity: {:.0}%)",
                ws.expected_label(),
                ws.detected_label(),
                ws.similarity * 100.0
            ));
        }
    }

    lines.push("Recommendations:".into());
    lines.extend(
        ctx.category
            .recommendations()
            .iter()
            .map(|r| format!("  • {r}")),
    );

    lines
}

/// First distinct fillers in order of appearance.
fn filler_preview(fillers: &[String]) -> Vec<&str> {
    let mut preview: Vec<&str> = Vec::new();
    for filler in fillers {
        if preview.len() == FILLER_PREVIEW_LIMIT {
            break;
        }
        if !preview.contains(&filler.as_str()) {
            preview.push(filler);
        }
    }
    preview
}
