//! Field errors that disappear on their own.

use std::time::Duration;

use api::FormErrors;
use dioxus::prelude::*;

use crate::context::use_app;

/// Countdown bookkeeping for [`use_form_errors`]. Each new set of errors arms a
/// fresh countdown; only the newest one may clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ClearTimer {
    generation: u64,
}

impl ClearTimer {
    /// Start a countdown, superseding any earlier one.
    pub(crate) fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Validation messages for a form. Non-empty errors are cleared after the
/// configured delay; setting them again restarts the timer.
pub fn use_form_errors() -> Signal<FormErrors> {
    let delay = use_app().config.forms.error_clear_delay();
    let mut errors = use_signal(FormErrors::new);
    let mut timer = use_signal(ClearTimer::default);

    use_effect(move || {
        if errors.read().is_empty() {
            return;
        }
        let ticket = timer.write().arm();
        spawn(async move {
            sleep(delay).await;
            if timer.peek().is_current(ticket) {
                errors.write().clear();
            }
        });
    });

    errors
}

pub(crate) async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(delay).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use api::Field;
    use tokio::time::Instant;

    use super::*;

    const DELAY: Duration = Duration::from_secs(3);

    fn email_error() -> FormErrors {
        let mut errors = FormErrors::new();
        errors.add(Field::Email, "Invalid email address");
        errors
    }

    type Shared = Arc<Mutex<(ClearTimer, FormErrors)>>;

    /// Wait out the delay, then clear if `ticket` is still the newest countdown.
    fn countdown(state: &Shared, ticket: u64) -> tokio::task::JoinHandle<bool> {
        let state = state.clone();
        tokio::spawn(async move {
            sleep(DELAY).await;
            let mut guard = state.lock().unwrap();
            let (timer, errors) = &mut *guard;
            if timer.is_current(ticket) {
                errors.clear();
                true
            } else {
                false
            }
        })
    }

    #[test]
    fn test_newest_countdown_wins() {
        let mut timer = ClearTimer::default();
        let first = timer.arm();
        assert!(timer.is_current(first));

        let second = timer.arm();
        assert!(!timer.is_current(first));
        assert!(timer.is_current(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_errors_clear_after_delay() {
        let state: Shared = Arc::new(Mutex::new((ClearTimer::default(), email_error())));
        let started = Instant::now();

        let ticket = state.lock().unwrap().0.arm();
        assert!(countdown(&state, ticket).await.unwrap());

        assert!(started.elapsed() >= DELAY);
        assert!(state.lock().unwrap().1.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_errors_restart_the_countdown() {
        let state: Shared = Arc::new(Mutex::new((ClearTimer::default(), email_error())));
        let started = Instant::now();

        let first = state.lock().unwrap().0.arm();
        let first_task = countdown(&state, first);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let second = state.lock().unwrap().0.arm();
        let second_task = countdown(&state, second);

        // The first countdown expires at 3s but no longer owns the errors
        assert!(!first_task.await.unwrap());
        assert!(!state.lock().unwrap().1.is_empty());

        assert!(second_task.await.unwrap());
        assert!(started.elapsed() >= Duration::from_secs(5));
        assert!(state.lock().unwrap().1.is_empty());
    }
}
