use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use indicatif::{HumanBytes, HumanDuration, ProgressBar, ProgressDrawTarget, ProgressStyle};

pub struct Progress {
    enabled: bool,
    start: Instant,
    stage: ProgressBar,
    pages_written: AtomicU64,
    bytes_written: AtomicU64,
}

impl Progress {
    pub fn new(enabled: bool) -> Arc<Self> {
        let stage = if enabled {
            let bar = ProgressBar::new_spinner();
            bar.set_draw_target(ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]")
            {
                bar.set_style(style);
            }
            bar.enable_steady_tick(Duration::from_millis(80));
            bar.set_message("starting");
            bar
        } else {
            ProgressBar::hidden()
        };

        Arc::new(Self {
            enabled,
            start: Instant::now(),
            stage,
            pages_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
        })
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn output_written(&self, bytes: usize) {
        self.pages_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn finish(&self) {
        let pages = self.pages_written.load(Ordering::Relaxed);
        let bytes = self.bytes_written.load(Ordering::Relaxed);
        tracing::debug!(pages, bytes, "outputs written");
        if !self.enabled {
            return;
        }
        self.stage.finish_with_message(format!(
            "wrote {pages} file(s), {} in {}",
            HumanBytes(bytes),
            HumanDuration(self.start.elapsed())
        ));
    }
}
