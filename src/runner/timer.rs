use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

/// Recurring wall-clock timer driving live status output.
///
/// The callback runs on a dedicated thread so it keeps firing even while
/// every worker is busy between suspend points. Ticks are scheduled at a
/// fixed interval from the start instant, so callback execution time does
/// not drift the schedule.
pub struct StatusTimer {
    shutdown_tx: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl StatusTimer {
    /// Starts the timer; `tick` fires every `period` until [`stop`] is
    /// called.
    ///
    /// [`stop`]: StatusTimer::stop
    pub fn start<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (shutdown_tx, shutdown_rx) = mpsc::channel();
        let thread = thread::spawn(move || {
            let mut next = Instant::now() + period;
            loop {
                let wait = next.saturating_duration_since(Instant::now());
                match shutdown_rx.recv_timeout(wait) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        tick();
                        next += period;
                    }
                }
            }
        });
        Self {
            shutdown_tx,
            thread: Some(thread),
        }
    }

    /// Stops the timer and waits for the timer thread to exit.
    ///
    /// Idempotent. Once this returns, no further tick will fire: at most
    /// one in-flight tick completes before the join resolves.
    pub fn stop(&mut self) {
        if let Some(thread) = self.thread.take() {
            drop(self.shutdown_tx.send(()));
            drop(thread.join());
        }
    }
}

impl Drop for StatusTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
