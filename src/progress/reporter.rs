//! Interval based progress reporting for transfers.

use super::style::ProgressBarOpts;
use crate::logging::DOWNLOADER;

use indicatif::ProgressBar;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// A progress report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Bytes written so far.
    pub written: u64,
    /// Size announced by the server, if any.
    pub total: Option<u64>,
}

/// Callback type for progress reports.
pub type ProgressCallback = Box<dyn Fn(&Progress) + Send + Sync>;

/// Counts transferred bytes and reports at most once per interval.
///
/// The clock starts when the reporter is created. Each [`advance`] call is
/// the point where the elapsed time is checked, so reports happen between
/// writes and never in the middle of one.
///
/// [`advance`]: ProgressReporter::advance
pub struct ProgressReporter {
    label: String,
    interval: Duration,
    last_report: Instant,
    progress: Progress,
    bar: ProgressBar,
    style: ProgressBarOpts,
    callback: Option<Arc<ProgressCallback>>,
}

impl ProgressReporter {
    pub fn new(label: impl Into<String>, total: Option<u64>, interval: Duration) -> Self {
        Self::started_at(label, total, interval, Instant::now())
    }

    fn started_at(label: impl Into<String>, total: Option<u64>, interval: Duration, start: Instant) -> Self {
        Self {
            label: label.into(),
            interval,
            last_report: start,
            progress: Progress { written: 0, total },
            bar: ProgressBar::hidden(),
            style: ProgressBarOpts::hidden(),
            callback: None,
        }
    }

    /// Display a progress bar styled by `style`.
    pub fn with_bar(mut self, style: &ProgressBarOpts) -> Self {
        self.bar = style.to_progress_bar(self.progress.total);
        self.style = style.clone();
        self
    }

    /// Call `callback` with every report.
    pub fn with_callback(mut self, callback: Option<Arc<ProgressCallback>>) -> Self {
        self.callback = callback;
        self
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Record `bytes` more bytes. Returns whether a report was emitted.
    pub fn advance(&mut self, bytes: u64) -> bool {
        self.advance_at(bytes, Instant::now())
    }

    fn advance_at(&mut self, bytes: u64, now: Instant) -> bool {
        self.progress.written += bytes;
        self.bar.inc(bytes);

        if now.saturating_duration_since(self.last_report) < self.interval {
            return false;
        }
        self.last_report = now;
        self.report();
        true
    }

    fn report(&self) {
        match self.progress.total {
            Some(total) => debug!(
                target: DOWNLOADER,
                "Downloaded {} out of {} bytes to {}", self.progress.written, total, self.label
            ),
            None => debug!(
                target: DOWNLOADER,
                "Downloaded {} bytes to {}", self.progress.written, self.label
            ),
        }
        if let Some(callback) = &self.callback {
            callback(&self.progress);
        }
    }

    /// Finish the bar and return the final progress.
    pub fn finish(self) -> Progress {
        self.style.finish(&self.bar);
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn test_no_report_before_interval() {
        let start = Instant::now();
        let mut reporter = ProgressReporter::started_at("out.bin", Some(3000), Duration::from_secs(5), start);

        for ms in [0, 1000, 2500, 4999] {
            assert!(!reporter.advance_at(100, start + Duration::from_millis(ms)));
        }
        assert_eq!(reporter.progress().written, 400);
    }

    #[test]
    fn test_reports_once_per_interval() {
        let start = Instant::now();
        let mut reporter = ProgressReporter::started_at("out.bin", None, Duration::from_secs(5), start);

        let mut reports = Vec::new();
        // One write every 500ms for 16 seconds.
        for step in 1..=32u64 {
            if reporter.advance_at(10, start + Duration::from_millis(step * 500)) {
                reports.push(step * 500);
            }
        }

        assert_eq!(reports, vec![5000, 10000, 15000]);
    }

    #[test]
    fn test_slow_writes_report_each_time() {
        let start = Instant::now();
        let mut reporter = ProgressReporter::started_at("out.bin", Some(30), Duration::from_secs(5), start);

        assert!(reporter.advance_at(10, start + Duration::from_secs(6)));
        assert!(!reporter.advance_at(10, start + Duration::from_secs(7)));
        assert!(reporter.advance_at(10, start + Duration::from_secs(20)));
    }

    #[test]
    fn test_callback_receives_progress() {
        let seen = Arc::new(AtomicU64::new(0));
        let seen_clone = seen.clone();
        let callback: ProgressCallback = Box::new(move |progress| {
            seen_clone.store(progress.written, Ordering::SeqCst);
        });

        let start = Instant::now();
        let mut reporter = ProgressReporter::started_at("out.bin", Some(64), Duration::ZERO, start)
            .with_callback(Some(Arc::new(callback)));

        assert!(reporter.advance_at(64, start));
        assert_eq!(seen.load(Ordering::SeqCst), 64);
        assert_eq!(reporter.finish(), Progress { written: 64, total: Some(64) });
    }
}
