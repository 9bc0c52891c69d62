use crate::domain::ports::ProgressReporter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);

/// Terminal spinner shown while the links file is loaded.
#[derive(Default)]
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for SpinnerProgress {
    fn start(&self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{msg:.green} {spinner:.green}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(FRAMES),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK);

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn finish(&self, message: &str) {
        let pb = self.bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = pb {
            pb.finish_and_clear();
            println!("{}", message.green());
        }
    }
}
