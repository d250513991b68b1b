use indicatif::{ProgressBar, ProgressStyle};
use saambe::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::new_spinner()
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
        pb.finish_and_clear();

        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::PhaseStart { name } => {
                    pb_guard.reset();
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(name);
                }
                Progress::PhaseFinish => {
                    pb_guard.disable_steady_tick();
                    let name = pb_guard.message();
                    pb_guard.finish_with_message(format!("✓ {}", name));
                }
                Progress::PhaseFailed { name } => {
                    pb_guard.disable_steady_tick();
                    pb_guard.abandon_with_message(format!("✗ {}", name));
                }
                Progress::Message(msg) => {
                    pb_guard.println(format!("  {}", msg));
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn handler_initializes_in_a_clean_state() {
        let handler = CliProgressHandler::new();
        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
    }

    #[test]
    fn callback_tracks_phase_lifecycle() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Validating Mutations",
        });
        {
            let pb = handler.pb.lock().unwrap();
            assert_eq!(pb.message(), "Validating Mutations");
            assert!(!pb.is_finished());
        }

        callback(Progress::Message("2 mutation(s) requested".to_string()));
        callback(Progress::PhaseFinish);
        {
            let pb = handler.pb.lock().unwrap();
            assert!(pb.is_finished());
            assert_eq!(pb.message(), "✓ Validating Mutations");
        }
    }

    #[test]
    fn failed_phase_is_marked() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Running SAAMBE-3D",
        });
        callback(Progress::PhaseFailed {
            name: "Running SAAMBE-3D",
        });

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✗ Running SAAMBE-3D");
    }

    #[test]
    fn callback_is_thread_safe() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::PhaseStart { name: "Scoring" });
            callback(Progress::PhaseFinish);
        })
        .join()
        .unwrap();

        let pb = handler.pb.lock().unwrap();
        assert!(pb.is_finished());
        assert_eq!(pb.message(), "✓ Scoring");
    }
}
