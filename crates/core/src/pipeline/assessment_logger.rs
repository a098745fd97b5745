use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting observer for assessment stages.
///
/// Keeps the use case free of any particular output mechanism so callers
/// can collect timings without changing the scoring code.
pub trait AssessmentLogger: Send {
    /// Record how long a named stage took for one assessment.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. word counts, DP cells).
    fn metric(&mut self, name: &str, value: f64);

    /// Report a finished assessment.
    fn assessed(&mut self, correct_words: usize, total_words: usize);

    /// Log a human-readable status line for the current assessment.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullAssessmentLogger;

impl AssessmentLogger for NullAssessmentLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn assessed(&mut self, _correct_words: usize, _total_words: usize) {}
    fn info(&mut self, _message: &str) {}
}

/// CLI-oriented logger that tracks per-stage timing and metrics and
/// renders a summary once the run is over.
pub struct StdoutAssessmentLogger {
    timings: HashMap<String, Vec<f64>>,
    metrics: HashMap<String, Vec<f64>>,
    start_time: Instant,
    assessments: usize,
    reference_words: usize,
}

impl StdoutAssessmentLogger {
    pub fn new() -> Self {
        Self {
            timings: HashMap::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
            assessments: 0,
            reference_words: 0,
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let runs = self.assessments;
        let mut lines = vec![format!(
            "Assessment summary ({runs} runs, {:.1}ms total):",
            elapsed_ms
        )];

        let mut stages: Vec<_> = self.timings.keys().collect();
        stages.sort();
        for stage in stages {
            let durations = &self.timings[stage];
            let total_ms: f64 = durations.iter().sum();
            let avg_ms = mean(durations);
            let pct = if elapsed_ms > 0.0 {
                total_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!(
                "  {stage:10}: avg {avg_ms:8.3}ms  total {total_ms:9.3}ms  ({pct:4.1}%)"
            ));
        }

        let mut metric_names: Vec<_> = self.metrics.keys().collect();
        metric_names.sort();
        for name in metric_names {
            lines.push(format!("  {name}: avg {:.1}", mean(&self.metrics[name])));
        }

        if self.reference_words > 0 && elapsed_ms > 0.0 {
            let wps = self.reference_words as f64 / (elapsed_ms / 1000.0);
            lines.push(format!("  Throughput: {wps:.1} reference words/s"));
        }

        Some(lines.join("\n"))
    }

    /// Returns the timing data for a given stage.
    pub fn timings_for(&self, stage: &str) -> Option<&[f64]> {
        self.timings.get(stage).map(|v| v.as_slice())
    }

    /// Returns the metric data for a given name.
    pub fn metrics_for(&self, name: &str) -> Option<&[f64]> {
        self.metrics.get(name).map(|v| v.as_slice())
    }
}

impl Default for StdoutAssessmentLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentLogger for StdoutAssessmentLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        self.timings
            .entry(stage.to_string())
            .or_default()
            .push(duration_ms);
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics
            .entry(name.to_string())
            .or_default()
            .push(value);
    }

    fn assessed(&mut self, correct_words: usize, total_words: usize) {
        self.assessments += 1;
        self.reference_words += total_words;
        log::debug!("Assessment #{}: {correct_words}/{total_words} correct", self.assessments);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
