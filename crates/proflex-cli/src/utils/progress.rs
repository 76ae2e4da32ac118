use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use proflex::engine::progress::{Progress, ProgressCallback};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Drives a single indicatif bar on stderr from core progress events.
///
/// Phases render as a spinner with the phase name, tasks as a counted bar.
/// The handler owns the bar; the callback handed to the core is `'static`
/// and can cross thread boundaries.
#[derive(Clone)]
pub struct CliProgressHandler {
    bar: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::hidden();
        bar.set_draw_target(ProgressDrawTarget::stderr());
        bar.finish_and_clear();
        Self {
            bar: Arc::new(Mutex::new(bar)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let bar = Arc::clone(&self.bar);
        Box::new(move |event: Progress| {
            let Ok(bar) = bar.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };
            Self::handle(&bar, event);
        })
    }

    fn handle(bar: &ProgressBar, event: Progress) {
        match event {
            Progress::PhaseStart { name } => {
                bar.reset();
                bar.set_style(phase_style());
                bar.set_message(name);
                bar.enable_steady_tick(SPINNER_TICK);
            }
            Progress::PhaseFinish => {
                bar.disable_steady_tick();
                bar.finish_and_clear();
            }
            Progress::TaskStart { total_steps } => {
                bar.disable_steady_tick();
                bar.reset();
                bar.set_style(task_style());
                bar.set_length(total_steps);
                bar.set_message("Predicting");
            }
            Progress::TaskIncrement => bar.inc(1),
            Progress::TaskFinish => {
                // A task that skipped records still ends at full length.
                if let Some(length) = bar.length() {
                    bar.set_position(length);
                }
                bar.finish();
            }
            Progress::Message(text) => {
                bar.println(format!("  {}", text));
            }
        }
    }
}

fn phase_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}...")
        .expect("phase template is well-formed")
}

fn task_style() -> ProgressStyle {
    ProgressStyle::with_template("{msg} [{bar:40.cyan/blue}] {pos}/{len} {elapsed}")
        .expect("task template is well-formed")
        .progress_chars("=> ")
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
    fn task_events_drive_the_bar_to_completion() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::TaskStart { total_steps: 3 });
        callback(Progress::TaskIncrement);
        {
            let bar = handler.bar.lock().unwrap();
            assert_eq!(bar.length(), Some(3));
            assert_eq!(bar.position(), 1);
            assert!(!bar.is_finished());
        }

        callback(Progress::TaskFinish);
        let bar = handler.bar.lock().unwrap();
        assert!(bar.is_finished());
        assert_eq!(bar.position(), 3);
    }

    #[test]
    fn task_finish_completes_a_partially_advanced_bar() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::TaskStart { total_steps: 5 });
        callback(Progress::TaskIncrement);
        callback(Progress::TaskFinish);

        let bar = handler.bar.lock().unwrap();
        assert_eq!(bar.position(), 5);
    }

    #[test]
    fn phase_events_spin_and_clear() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        callback(Progress::PhaseStart {
            name: "Reading FASTA input",
        });
        {
            let bar = handler.bar.lock().unwrap();
            assert_eq!(bar.message(), "Reading FASTA input");
            assert!(!bar.is_finished());
        }

        callback(Progress::PhaseFinish);
        let bar = handler.bar.lock().unwrap();
        assert!(bar.is_finished());
    }

    #[test]
    fn callback_survives_a_worker_thread() {
        let handler = CliProgressHandler::new();
        let callback = handler.get_callback();

        thread::spawn(move || {
            callback(Progress::TaskStart { total_steps: 2 });
            callback(Progress::Message("halfway".to_string()));
            callback(Progress::TaskFinish);
        })
        .join()
        .unwrap();

        let bar = handler.bar.lock().unwrap();
        assert!(bar.is_finished());
        assert_eq!(bar.position(), 2);
    }
}
