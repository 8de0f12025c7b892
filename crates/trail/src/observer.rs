use newton_core::Observer;
use newton_solvers::equation::newton::{Action, Event};

/// An observer that logs each recorded iteration and never intervenes.
///
/// Events are logged at `debug` level under the `newton_trail` target, tagged
/// with the function label so interleaved runs can be told apart.
#[derive(Debug, Clone)]
pub struct LogObserver {
    label: String,
    events: usize,
}

impl LogObserver {
    /// Creates an observer for a run of the function named `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            events: 0,
        }
    }

    /// Returns how many events have been observed.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Observer<Event<'_>, Action> for LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        self.events += 1;
        let record = event.record;
        log::debug!(
            "{}: iter {} x = {:e} f(x) = {:e} f'(x) = {:e} step = {:e}",
            self.label,
            record.iter,
            record.x,
            record.fx,
            record.dfx,
            record.step,
        );
        None
    }
}

impl Observer<Event<'_>, Action> for &mut LogObserver {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use newton_catalog::standard::TRIGONOMETRIC;
    use newton_solvers::equation::newton::{self, Config, Status};

    #[test]
    fn counts_events_without_stopping() {
        let config = Config::new(20, 1e-10).expect("valid config");
        let mut observer = LogObserver::new(TRIGONOMETRIC.label());

        let run = newton::solve(&TRIGONOMETRIC, 1.0, &config, &mut observer);

        assert_eq!(run.status(), Status::Converged);
        assert_eq!(observer.events(), run.iters());
    }

    #[test]
    fn can_be_passed_by_value() {
        let run = newton::solve(
            &TRIGONOMETRIC,
            1.0,
            &Config::default(),
            LogObserver::new("cos"),
        );
        assert_eq!(run.status(), Status::Converged);
    }
}
