//! Telemetry (spec §2, §4.8): phase timers and per-fake metrics
//! accumulated across one compilation, with a level-aware report
//! formatter.
//!
//! Counters live behind a single `Mutex` rather than atomics: a
//! declaration's own pipeline is single-threaded (spec §5), so the only
//! contention here is across declarations running on different `--jobs`
//! worker threads, which this lock already serializes correctly.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Report verbosity, configurable via `--telemetry-level` or the legacy
/// `debug` plugin option (spec §10.3).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TelemetryLevel {
    Quiet,
    Normal,
    Verbose,
}

impl TelemetryLevel {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            _ => None,
        }
    }
}

/// Per-declaration metrics recorded on a successful emission (spec §4.8
/// step 3d).
#[derive(Debug, Clone)]
pub struct FakeMetrics {
    pub qualified_id: String,
    pub duration: Duration,
    pub generated_lines: usize,
    pub file_size_bytes: usize,
    pub import_count: usize,
}

#[derive(Default)]
struct TelemetryState {
    cache_hits: u32,
    generated: Vec<FakeMetrics>,
    failed: Vec<String>,
}

/// One compilation's telemetry aggregate: constructed once per
/// orchestrator run, written to from every declaration's pipeline, read
/// once at the end to format the report.
pub struct Telemetry {
    started_at: Instant,
    state: Mutex<TelemetryState>,
}

impl Telemetry {
    /// Opens the total-time timer (spec §4.8 step 1).
    pub fn start() -> Self {
        Self {
            started_at: Instant::now(),
            state: Mutex::new(TelemetryState::default()),
        }
    }

    pub fn record_cache_hit(&self) {
        self.lock().cache_hits += 1;
    }

    pub fn record_generated(&self, metrics: FakeMetrics) {
        self.lock().generated.push(metrics);
    }

    pub fn record_failure(&self, qualified_id: impl Into<String>) {
        self.lock().failed.push(qualified_id.into());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, TelemetryState> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn generated_count(&self) -> usize {
        self.lock().generated.len()
    }

    pub fn cache_hit_count(&self) -> u32 {
        self.lock().cache_hits
    }

    pub fn failed_count(&self) -> usize {
        self.lock().failed.len()
    }

    /// Closes the total-time timer and formats the report at `level`
    /// (spec §4.8 step 4).
    pub fn report(&self, level: TelemetryLevel) -> String {
        let elapsed = self.started_at.elapsed();
        let state = self.lock();
        let summary = format!(
            "fakt: {} generated, {} cache hits, {} failed ({elapsed:.2?})",
            state.generated.len(),
            state.cache_hits,
            state.failed.len(),
        );

        if level == TelemetryLevel::Quiet {
            return summary;
        }

        let mut report = summary;
        report.push('\n');
        if level == TelemetryLevel::Verbose {
            for metrics in &state.generated {
                report.push_str(&format!(
                    "  {} — {:.2?}, {} lines, {} bytes, {} imports\n",
                    metrics.qualified_id, metrics.duration, metrics.generated_lines, metrics.file_size_bytes, metrics.import_count
                ));
            }
        }
        for qualified_id in &state.failed {
            report.push_str(&format!("  FAILED: {qualified_id}\n"));
        }
        report.trim_end().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn quiet_report_is_one_line() {
        let telemetry = Telemetry::start();
        telemetry.record_cache_hit();
        telemetry.record_generated(FakeMetrics {
            qualified_id: "com.example.Foo".into(),
            duration: Duration::from_millis(1),
            generated_lines: 10,
            file_size_bytes: 200,
            import_count: 1,
        });
        let report = telemetry.report(TelemetryLevel::Quiet);
        assert!(!report.contains('\n'));
        assert!(report.contains("1 generated"));
        assert!(report.contains("1 cache hits"));
    }

    #[test]
    fn verbose_report_lists_each_generated_fake() {
        let telemetry = Telemetry::start();
        telemetry.record_generated(FakeMetrics {
            qualified_id: "com.example.Foo".into(),
            duration: Duration::from_millis(1),
            generated_lines: 10,
            file_size_bytes: 200,
            import_count: 1,
        });
        let report = telemetry.report(TelemetryLevel::Verbose);
        assert!(report.contains("com.example.Foo"));
        assert!(report.contains("10 lines"));
    }

    #[test]
    fn normal_report_omits_per_fake_lines_but_lists_failures() {
        let telemetry = Telemetry::start();
        telemetry.record_generated(FakeMetrics {
            qualified_id: "com.example.Foo".into(),
            duration: Duration::from_millis(1),
            generated_lines: 10,
            file_size_bytes: 200,
            import_count: 1,
        });
        telemetry.record_failure("com.example.Bar");
        let report = telemetry.report(TelemetryLevel::Normal);
        assert!(!report.contains("com.example.Foo"));
        assert!(report.contains("FAILED: com.example.Bar"));
    }

    #[test]
    fn parses_known_levels_only() {
        assert_eq!(TelemetryLevel::parse("quiet"), Some(TelemetryLevel::Quiet));
        assert_eq!(TelemetryLevel::parse("loud"), None);
    }
}
