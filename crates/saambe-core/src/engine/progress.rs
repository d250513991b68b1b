#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,
    PhaseFailed { name: &'static str },

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` between a start and a finish (or failure) event.
    pub fn phase<T, E>(&self, name: &'static str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        let result = f();
        match &result {
            Ok(_) => self.report(Progress::PhaseFinish),
            Err(_) => self.report(Progress::PhaseFailed { name }),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<Progress>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter =
            ProgressReporter::with_callback(Box::new(move |p| sink.lock().unwrap().push(p)));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".into()));
        assert_eq!(reporter.phase("noop", || Ok::<_, ()>(1)), Ok(1));
    }

    #[test]
    fn phase_reports_start_and_finish_on_success() {
        let (reporter, events) = recording_reporter();
        let value = reporter.phase("Validating", || Ok::<_, ()>(42)).unwrap();
        assert_eq!(value, 42);
        assert_eq!(
            *events.lock().unwrap(),
            vec![
                Progress::PhaseStart { name: "Validating" },
                Progress::PhaseFinish
            ]
        );
    }

    #[test]
    fn phase_reports_failure() {
        let (reporter, events) = recording_reporter();
        let result = reporter.phase("Predicting", || Err::<(), _>("boom"));
        assert_eq!(result, Err("boom"));
        assert_eq!(
            events.lock().unwrap().last(),
            Some(&Progress::PhaseFailed { name: "Predicting" })
        );
    }
}
