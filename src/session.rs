//! Caller-owned bookkeeping for a run of recognized gestures.
//!
//! The recognizer never touches this; whoever drives recognition records
//! each result along with how long the gesture took.

use std::fmt;
use std::time::Duration;

use crate::recognition::{Classification, GestureKind};

/// One recorded gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureLogEntry {
    pub kind: GestureKind,
    /// Score rounded to three decimals.
    pub score: f64,
    /// Time from pointer press to classification.
    pub duration: Duration,
    /// Whether the score cleared the caller's threshold.
    pub success: bool,
}

/// Running totals over a session.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    entries: Vec<GestureLogEntry>,
    successful: usize,
    total_latency: Duration,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a classification; `threshold` decides success.
    pub fn record(
        &mut self,
        classification: &Classification,
        duration: Duration,
        threshold: f64,
    ) -> GestureLogEntry {
        let success = classification.is_success(threshold);
        let entry = GestureLogEntry {
            kind: classification.kind,
            score: (classification.score * 1000.0).round() / 1000.0,
            duration,
            success,
        };
        if success {
            self.successful += 1;
        }
        self.total_latency += duration;
        self.entries.push(entry);
        tracing::info!(
            gesture = %entry.kind,
            score = entry.score,
            duration_ms = entry.duration.as_secs_f64() * 1000.0,
            success,
            "gesture recorded"
        );
        entry
    }

    #[must_use]
    pub fn entries(&self) -> &[GestureLogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn successful(&self) -> usize {
        self.successful
    }

    /// Share of successful gestures, in percent; 0 for an empty session.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accuracy_percent(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.successful as f64 / self.entries.len() as f64 * 100.0
    }

    /// Mean gesture duration in milliseconds; 0 for an empty session.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_latency_ms(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.total_latency.as_secs_f64() * 1000.0 / self.entries.len() as f64
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Session Summary:")?;
        writeln!(f, "  Total Gestures: {}", self.total())?;
        writeln!(f, "  Accuracy: {:.1}%", self.accuracy_percent())?;
        write!(
            f,
            "  Avg Input-to-Action Latency: {:.1} ms",
            self.average_latency_ms()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SUCCESS_THRESHOLD;

    fn classification(kind: GestureKind, score: f64) -> Classification {
        Classification {
            kind,
            score,
            distance: Some(1.0),
        }
    }

    #[test]
    fn empty_session_reports_zeroes() {
        let stats = SessionStats::new();
        assert_eq!(stats.total(), 0);
        assert!(stats.accuracy_percent().abs() < 1e-12);
        assert!(stats.average_latency_ms().abs() < 1e-12);
    }

    #[test]
    fn totals_accumulate() {
        let mut stats = SessionStats::new();
        stats.record(
            &classification(GestureKind::Circle, 0.92),
            Duration::from_millis(300),
            DEFAULT_SUCCESS_THRESHOLD,
        );
        let entry = stats.record(
            &classification(GestureKind::Z, 0.123_456),
            Duration::from_millis(100),
            DEFAULT_SUCCESS_THRESHOLD,
        );
        assert!(!entry.success);
        assert!((entry.score - 0.123).abs() < 1e-12);

        assert_eq!(stats.total(), 2);
        assert_eq!(stats.successful(), 1);
        assert!((stats.accuracy_percent() - 50.0).abs() < 1e-9);
        assert!((stats.average_latency_ms() - 200.0).abs() < 1e-9);
        assert_eq!(stats.entries()[0].kind, GestureKind::Circle);
    }

    #[test]
    fn summary_mentions_every_total() {
        let mut stats = SessionStats::new();
        stats.record(
            &classification(GestureKind::ArrowLeft, 0.97),
            Duration::from_millis(250),
            DEFAULT_SUCCESS_THRESHOLD,
        );
        let text = stats.to_string();
        assert!(text.contains("Total Gestures: 1"), "{text}");
        assert!(text.contains("Accuracy: 100.0%"), "{text}");
        assert!(text.contains("Latency: 250.0 ms"), "{text}");
    }
}
