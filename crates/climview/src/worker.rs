//! Background worker for refreshing dashboard data without blocking the UI.
//!
//! A refresh waits out a configurable latency and then asks a
//! [`RefreshBackend`] for fresh data. The outcome is always reported
//! explicitly: completed, cancelled or failed.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use jiff::Timestamp;

/// How often the worker checks the cancel flag while waiting
const CANCEL_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Source of refreshed data.
pub trait RefreshBackend: Send + 'static {
    fn fetch(&mut self) -> Result<(), String>;
}

/// Backend with nothing to fetch; every refresh succeeds once the delay elapses.
#[derive(Debug, Default)]
pub struct PlaceholderBackend;

impl RefreshBackend for PlaceholderBackend {
    fn fetch(&mut self) -> Result<(), String> {
        Ok(())
    }
}

/// Request sent to the background worker
#[derive(Debug)]
pub enum RefreshRequest {
    Refresh { delay: Duration },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshResponse {
    Completed {
        started_at: Timestamp,
        finished_at: Timestamp,
    },
    /// Refresh was cancelled before it finished
    Cancelled,
    Failed(String),
}

/// Background worker that runs refreshes on a separate thread
pub struct RefreshWorker {
    request_tx: Sender<RefreshRequest>,
    response_rx: Receiver<RefreshResponse>,
    cancel_flag: Arc<AtomicBool>,
    busy: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl RefreshWorker {
    pub fn new() -> Self {
        Self::with_backend(PlaceholderBackend)
    }

    /// Create a worker whose refreshes are served by `backend`
    pub fn with_backend(backend: impl RefreshBackend) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let busy = Arc::new(AtomicBool::new(false));

        let ctx = WorkerContext {
            response_tx,
            cancel_flag: cancel_flag.clone(),
            busy: busy.clone(),
            backend: Box::new(backend),
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            cancel_flag,
            busy,
            thread: Some(thread),
        }
    }

    /// Start a refresh.
    ///
    /// Returns false without queueing anything if a refresh is already in
    /// flight or the worker has stopped.
    pub fn refresh(&self, delay: Duration) -> bool {
        if self.busy.swap(true, Ordering::SeqCst) {
            tracing::debug!("Refresh already in flight, ignoring request");
            return false;
        }
        self.cancel_flag.store(false, Ordering::SeqCst);
        if self.request_tx.send(RefreshRequest::Refresh { delay }).is_err() {
            self.busy.store(false, Ordering::SeqCst);
            return false;
        }
        true
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<RefreshResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Wait up to `timeout` for a response
    pub fn recv_timeout(&self, timeout: Duration) -> Option<RefreshResponse> {
        self.response_rx.recv_timeout(timeout).ok()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Request cancellation of the current refresh
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        self.cancel();
        let _ = self.request_tx.send(RefreshRequest::Shutdown);
    }
}

impl Default for RefreshWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RefreshWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// State owned by the background worker thread.
struct WorkerContext {
    response_tx: Sender<RefreshResponse>,
    cancel_flag: Arc<AtomicBool>,
    busy: Arc<AtomicBool>,
    backend: Box<dyn RefreshBackend>,
}

impl WorkerContext {
    fn run(mut self, request_rx: Receiver<RefreshRequest>) {
        while let Ok(request) = request_rx.recv() {
            match request {
                RefreshRequest::Shutdown => break,
                RefreshRequest::Refresh { delay } => {
                    tracing::info!(delay_ms = delay.as_millis() as u64, "Starting refresh");
                    let response = self.run_refresh(delay);
                    match &response {
                        RefreshResponse::Completed { finished_at, .. } => {
                            tracing::info!(%finished_at, "Refresh completed")
                        }
                        RefreshResponse::Cancelled => tracing::info!("Refresh cancelled"),
                        RefreshResponse::Failed(e) => tracing::warn!("Refresh failed: {e}"),
                    }
                    // Idle before the response is visible to the caller
                    self.busy.store(false, Ordering::SeqCst);
                    let _ = self.response_tx.send(response);
                }
            }
        }
        tracing::debug!("Refresh worker stopped");
    }

    fn run_refresh(&mut self, delay: Duration) -> RefreshResponse {
        let started_at = Timestamp::now();
        if !self.wait(delay) {
            return RefreshResponse::Cancelled;
        }
        match self.backend.fetch() {
            Ok(()) => RefreshResponse::Completed {
                started_at,
                finished_at: Timestamp::now(),
            },
            Err(e) => RefreshResponse::Failed(e),
        }
    }

    /// Sleep for `delay` in short slices. Returns false if cancelled.
    fn wait(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        loop {
            if self.cancel_flag.load(Ordering::SeqCst) {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep(CANCEL_POLL_INTERVAL.min(deadline - now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_secs(5);

    struct FailingBackend;

    impl RefreshBackend for FailingBackend {
        fn fetch(&mut self) -> Result<(), String> {
            Err("backend unavailable".to_string())
        }
    }

    #[test]
    fn test_refresh_completes_after_delay() {
        let worker = RefreshWorker::new();
        let begin = Instant::now();
        assert!(worker.refresh(Duration::from_millis(50)));
        assert!(worker.is_busy());

        match worker.recv_timeout(WAIT) {
            Some(RefreshResponse::Completed {
                started_at,
                finished_at,
            }) => assert!(finished_at >= started_at),
            other => panic!("expected completion, got {other:?}"),
        }
        assert!(begin.elapsed() >= Duration::from_millis(50));
        assert!(!worker.is_busy());
    }

    #[test]
    fn test_refresh_can_be_cancelled() {
        let worker = RefreshWorker::new();
        assert!(worker.refresh(Duration::from_secs(30)));
        worker.cancel();

        assert_eq!(worker.recv_timeout(WAIT), Some(RefreshResponse::Cancelled));
        assert!(!worker.is_busy());
    }

    #[test]
    fn test_second_refresh_ignored_while_busy() {
        let worker = RefreshWorker::new();
        assert!(worker.refresh(Duration::from_millis(200)));
        assert!(!worker.refresh(Duration::from_millis(200)));

        assert!(matches!(
            worker.recv_timeout(WAIT),
            Some(RefreshResponse::Completed { .. })
        ));
        // Only one response was produced
        assert_eq!(worker.recv_timeout(Duration::from_millis(300)), None);

        // Worker accepts new work once idle
        assert!(worker.refresh(Duration::ZERO));
        assert!(matches!(
            worker.recv_timeout(WAIT),
            Some(RefreshResponse::Completed { .. })
        ));
    }

    #[test]
    fn test_backend_failure_is_reported() {
        let worker = RefreshWorker::with_backend(FailingBackend);
        assert!(worker.refresh(Duration::ZERO));
        assert_eq!(
            worker.recv_timeout(WAIT),
            Some(RefreshResponse::Failed("backend unavailable".to_string()))
        );
    }

    #[test]
    fn test_try_recv_empty_when_idle() {
        let worker = RefreshWorker::new();
        assert_eq!(worker.try_recv(), None);
    }
}
