/// The polling loop: sweep every key code, log each new press.
use std::future::Future;
use std::io::{self, Write};

use crate::config::PollConfig;
use crate::keys::{KeyCode, KeyNameResolver, KeyStateSource};
use crate::log_file;
use crate::record::{Clock, KeyRecord, SystemClock};

/// What happened to the presses seen during one or more batches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepReport {
    /// Presses written to the log.
    pub recorded: usize,
    /// Presses skipped because the key has no display name.
    pub unnamed: usize,
    /// Presses lost because the log could not be written.
    pub dropped: usize,
}

impl SweepReport {
    fn merge(&mut self, other: SweepReport) {
        self.recorded += other.recorded;
        self.unnamed += other.unnamed;
        self.dropped += other.dropped;
    }
}

pub struct Collector<S, R, C = SystemClock> {
    config: PollConfig,
    keys: S,
    names: R,
    clock: C,
    /// Receives the key-name echo and the "unable to open log file" line.
    /// Stdout unless replaced.
    console: Box<dyn Write>,
    /// Last timestamp written, so the log never goes backwards.
    last_timestamp_ms: i64,
    /// Everything seen since the collector was created.
    totals: SweepReport,
}

impl<S, R> Collector<S, R, SystemClock>
where
    S: KeyStateSource,
    R: KeyNameResolver,
{
    pub fn new(config: PollConfig, keys: S, names: R) -> Self {
        Self {
            config,
            keys,
            names,
            clock: SystemClock,
            console: Box::new(io::stdout()),
            last_timestamp_ms: i64::MIN,
            totals: SweepReport::default(),
        }
    }
}

impl<S, R, C> Collector<S, R, C>
where
    S: KeyStateSource,
    R: KeyNameResolver,
    C: Clock,
{
    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    /// Running totals across every batch polled so far.
    pub fn totals(&self) -> SweepReport {
        self.totals
    }

    /// Runs the loop until `shutdown` resolves successfully.
    ///
    /// If `shutdown` fails (e.g. the Ctrl+C handler cannot be installed) the
    /// error is reported and the loop keeps going, uninterrupted.
    pub async fn run_until<F>(&mut self, shutdown: F)
    where
        F: Future<Output = io::Result<()>>,
    {
        let shutdown = async {
            if let Err(e) = shutdown.await {
                eprintln!("[collector] Failed to listen for shutdown: {e}");
                std::future::pending::<()>().await;
            }
        };
        tokio::select! {
            _ = self.run() => {}
            _ = shutdown => {}
        }
    }

    /// Sweeps forever, pausing after each batch of `sweep_width` codes.
    /// Never returns; the process ends only when it is terminated.
    pub async fn run(&mut self) {
        let batches = self.config.batches();
        let pause = self.config.sweep_pause;
        loop {
            for batch in &batches {
                self.poll_batch(batch);
                tokio::time::sleep(pause).await;
            }
            if batches.is_empty() {
                tokio::time::sleep(pause).await;
            }
        }
    }

    /// Checks each code in `codes` once, in order.
    pub fn poll_batch(&mut self, codes: &[KeyCode]) -> SweepReport {
        let mut report = SweepReport::default();
        for &code in codes {
            self.poll_code(code, &mut report);
        }
        self.totals.merge(report);
        report
    }

    fn poll_code(&mut self, code: KeyCode, report: &mut SweepReport) {
        if !self.keys.take_press(code) {
            return;
        }
        let Some(name) = self.names.display_name(code) else {
            report.unnamed += 1;
            return;
        };
        let _ = writeln!(self.console, "{name}");

        let timestamp_ms = self.clock.now_millis().max(self.last_timestamp_ms);
        self.last_timestamp_ms = timestamp_ms;

        let record = KeyRecord::new(timestamp_ms, name);
        match log_file::append_record(&self.config.log_path, &record) {
            Ok(()) => report.recorded += 1,
            Err(e) => {
                report.dropped += 1;
                let _ = writeln!(self.console, "Unable to open log file: {e:#}");
            }
        }
        let _ = self.console.flush();
    }
}

#[cfg(test)]
impl<S, R, C> Collector<S, R, C>
where
    S: KeyStateSource,
    R: KeyNameResolver,
    C: Clock,
{
    fn with_clock<C2: Clock>(self, clock: C2) -> Collector<S, R, C2> {
        Collector {
            config: self.config,
            keys: self.keys,
            names: self.names,
            clock,
            console: self.console,
            last_timestamp_ms: self.last_timestamp_ms,
            totals: self.totals,
        }
    }

    fn with_console(mut self, sink: impl Write + 'static) -> Self {
        self.console = Box::new(sink);
        self
    }

    /// Every configured code once, with no pauses.
    fn sweep(&mut self) -> SweepReport {
        let codes: Vec<KeyCode> = self.config.codes().collect();
        self.poll_batch(&codes)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
