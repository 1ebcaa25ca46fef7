//! Debounce for the free-text search input.
//!
//! Every [`Debouncer::push`] aborts the pending timer task and spawns a new
//! one. A timer that survives its quiet period sends a [`Settled`] message on
//! the channel the event loop listens to. Messages carry the generation they
//! were scheduled under, so a timer that fired just before being replaced is
//! recognised and ignored by [`Debouncer::accept`].

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A value that held still for the full quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    generation: u64,
    value: String,
}

pub struct Debouncer {
    quiet: Duration,
    tx: mpsc::UnboundedSender<Settled>,
    pending: Option<JoinHandle<()>>,
    generation: u64,
}

impl Debouncer {
    /// Creates a debouncer that publishes settled values on `tx`.
    #[must_use]
    pub fn new(quiet: Duration, tx: mpsc::UnboundedSender<Settled>) -> Self {
        Self {
            quiet,
            tx,
            pending: None,
            generation: 0,
        }
    }

    /// Schedules `value` to settle after the quiet period, replacing any
    /// pending value.
    ///
    /// Must be called from within a tokio runtime.
    pub fn push(&mut self, value: impl Into<String>) {
        self.cancel();
        self.generation += 1;

        let settled = Settled {
            generation: self.generation,
            value: value.into(),
        };
        let quiet = self.quiet;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            // Receiver gone means the loop is shutting down.
            let _ = tx.send(settled);
        }));
    }

    /// Returns the settled value if it belongs to the latest push.
    pub fn accept(&mut self, settled: Settled) -> Option<String> {
        if settled.generation != self.generation {
            tracing::trace!(
                generation = settled.generation,
                current = self.generation,
                "ignoring stale debounce timer"
            );
            return None;
        }
        self.pending = None;
        Some(settled.value)
    }

    /// Aborts the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    fn debouncer() -> (Debouncer, mpsc::UnboundedReceiver<Settled>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Debouncer::new(QUIET, tx), rx)
    }

    fn assert_near(elapsed: Duration, expected: Duration) {
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "expected ~{expected:?}, got {elapsed:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn single_push_settles_after_quiet_period() {
        let (mut debouncer, mut rx) = debouncer();
        let start = tokio::time::Instant::now();

        debouncer.push("shirt");
        let settled = rx.recv().await.unwrap();

        assert_near(start.elapsed(), QUIET);
        assert_eq!(debouncer.accept(settled), Some("shirt".to_string()));
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_pushes_settle_once_with_last_value() {
        let (mut debouncer, mut rx) = debouncer();

        for value in ["s", "sh", "shi", "shir", "shirt"] {
            debouncer.push(value);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let settled = rx.recv().await.unwrap();
        assert_eq!(debouncer.accept(settled), Some("shirt".to_string()));

        tokio::time::sleep(QUIET * 4).await;
        assert!(rx.try_recv().is_err(), "expected exactly one settle event");
    }

    #[tokio::test(start_paused = true)]
    async fn push_restarts_the_quiet_period() {
        let (mut debouncer, mut rx) = debouncer();
        let start = tokio::time::Instant::now();

        debouncer.push("a");
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.push("ab");

        let settled = rx.recv().await.unwrap();
        assert_near(start.elapsed(), Duration::from_millis(900));
        assert_eq!(debouncer.accept(settled), Some("ab".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_generation_is_ignored() {
        let (mut debouncer, mut rx) = debouncer();

        debouncer.push("old");
        let stale = rx.recv().await.unwrap();
        debouncer.push("new");

        assert_eq!(debouncer.accept(stale), None);
        assert!(debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_debouncer_cancels_the_timer() {
        let (mut debouncer, mut rx) = debouncer();

        debouncer.push("shirt");
        drop(debouncer);
        tokio::time::sleep(QUIET * 2).await;

        // Every sender is gone and nothing was sent.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_value() {
        let (mut debouncer, mut rx) = debouncer();

        debouncer.push("shirt");
        debouncer.cancel();
        tokio::time::sleep(QUIET * 2).await;

        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }
}
