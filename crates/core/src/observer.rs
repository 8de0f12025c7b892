/// A hook called by a solver after each recorded step.
///
/// The Newton-Raphson solver passes an event borrowing the step it just
/// recorded. Returning `Some(action)` asks it to act on that step (for
/// example to stop with the current estimate); `None` lets the run continue.
/// Solvers stay pure, so logging and progress tracking live in observers.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. `()` never acts.
pub trait Observer<E, A> {
    /// Inspects `event` and optionally requests an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O>(mut observer: O, events: &[usize]) -> Vec<&'static str>
    where
        O: Observer<usize, &'static str>,
    {
        events.iter().filter_map(|e| observer.observe(e)).collect()
    }

    #[test]
    fn unit_observer_never_acts() {
        assert!(drive((), &[1, 2, 3]).is_empty());
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        let actions = drive(
            |event: &usize| {
                seen.push(*event);
                (*event == 2).then_some("stop")
            },
            &[1, 2, 3],
        );

        assert_eq!(actions, vec!["stop"]);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
