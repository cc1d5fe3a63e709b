//! Background worker that runs an analysis backend off the UI thread
//!
//! The UI sends requests and polls once per frame. Requests are handled in
//! order and cannot be cancelled once sent.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use super::backend::AnalysisBackend;
use crate::error::{DashError, Result};
use crate::model::{Condition, Insight, QueryResult};

/// Which operation a request or response belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Insights,
    Query,
    Signal,
}

/// Requests that can be sent to the background worker
#[derive(Debug, Clone, PartialEq)]
pub enum BackendRequest {
    GenerateInsights,
    RunQuery { conditions: Vec<Condition> },
    CreateSignal { name: String, formula: String },
    /// Shutdown the worker
    Shutdown,
}

impl BackendRequest {
    pub fn kind(&self) -> Option<RequestKind> {
        match self {
            BackendRequest::GenerateInsights => Some(RequestKind::Insights),
            BackendRequest::RunQuery { .. } => Some(RequestKind::Query),
            BackendRequest::CreateSignal { .. } => Some(RequestKind::Signal),
            BackendRequest::Shutdown => None,
        }
    }
}

/// Results returned from the background worker
#[derive(Debug)]
pub enum BackendResponse {
    InsightsReady(Vec<Insight>),
    QueryReady(QueryResult),
    SignalCreated { name: String },
    Failed { kind: RequestKind, error: DashError },
}

impl BackendResponse {
    pub fn kind(&self) -> RequestKind {
        match self {
            BackendResponse::InsightsReady(_) => RequestKind::Insights,
            BackendResponse::QueryReady(_) => RequestKind::Query,
            BackendResponse::SignalCreated { .. } => RequestKind::Signal,
            BackendResponse::Failed { kind, .. } => *kind,
        }
    }
}

pub struct BackgroundWorker {
    tx: Sender<BackendRequest>,
    rx: Receiver<BackendResponse>,
    handle: Option<JoinHandle<()>>,
    pending: usize,
}

impl BackgroundWorker {
    /// Spawn a worker thread that owns `backend`
    pub fn spawn<B: AnalysisBackend>(backend: B) -> Self {
        let (req_tx, req_rx) = channel::<BackendRequest>();
        let (res_tx, res_rx) = channel::<BackendResponse>();

        let handle = thread::Builder::new()
            .name("analysis-backend".into())
            .spawn(move || Self::worker_loop(backend, req_rx, res_tx))
            .ok();
        if handle.is_none() {
            tracing::error!("failed to spawn analysis worker thread");
        }

        Self {
            tx: req_tx,
            rx: res_rx,
            handle,
            pending: 0,
        }
    }

    fn worker_loop<B: AnalysisBackend>(mut backend: B, rx: Receiver<BackendRequest>, tx: Sender<BackendResponse>) {
        while let Ok(request) = rx.recv() {
            let response = match request {
                BackendRequest::GenerateInsights => match backend.generate_insights() {
                    Ok(insights) => BackendResponse::InsightsReady(insights),
                    Err(error) => BackendResponse::Failed {
                        kind: RequestKind::Insights,
                        error,
                    },
                },
                BackendRequest::RunQuery { conditions } => match backend.run_query(&conditions) {
                    Ok(result) => BackendResponse::QueryReady(result),
                    Err(error) => BackendResponse::Failed {
                        kind: RequestKind::Query,
                        error,
                    },
                },
                BackendRequest::CreateSignal { name, formula } => match backend.create_signal(&name, &formula) {
                    Ok(name) => BackendResponse::SignalCreated { name },
                    Err(error) => BackendResponse::Failed {
                        kind: RequestKind::Signal,
                        error,
                    },
                },
                BackendRequest::Shutdown => break,
            };

            if tx.send(response).is_err() {
                break;
            }
        }
    }

    /// Send a request to the worker (non-blocking)
    pub fn request(&mut self, req: BackendRequest) -> Result<()> {
        tracing::debug!(kind = ?req.kind(), "backend request");
        self.tx.send(req).map_err(|_| DashError::BackendDisconnected)?;
        self.pending += 1;
        Ok(())
    }

    /// Poll for completed work (non-blocking)
    pub fn poll(&mut self) -> Option<BackendResponse> {
        match self.rx.try_recv() {
            Ok(response) => {
                self.pending = self.pending.saturating_sub(1);
                tracing::debug!(kind = ?response.kind(), "backend response");
                Some(response)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                if self.pending > 0 {
                    self.pending = 0;
                    tracing::warn!("analysis worker disconnected with requests in flight");
                }
                None
            }
        }
    }

    /// Check if there's pending work
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    /// Block until a response arrives or `timeout` elapses
    #[cfg(test)]
    pub fn wait(&mut self, timeout: std::time::Duration) -> Option<BackendResponse> {
        let response = self.rx.recv_timeout(timeout).ok()?;
        self.pending = self.pending.saturating_sub(1);
        Some(response)
    }
}

impl Drop for BackgroundWorker {
    fn drop(&mut self) {
        let _ = self.tx.send(BackendRequest::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockBackend, MockDelays};
    use crate::model::Comparison;
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(5);

    struct FailingBackend;

    impl AnalysisBackend for FailingBackend {
        fn generate_insights(&mut self) -> Result<Vec<Insight>> {
            Err(DashError::BackendDisconnected)
        }

        fn run_query(&mut self, _conditions: &[Condition]) -> Result<QueryResult> {
            Err(DashError::BackendDisconnected)
        }

        fn create_signal(&mut self, _name: &str, _formula: &str) -> Result<String> {
            Err(DashError::BackendDisconnected)
        }
    }

    #[test]
    fn test_worker_round_trip() {
        let mut worker = BackgroundWorker::spawn(MockBackend::new(MockDelays::zero()));
        assert!(!worker.is_busy());

        worker
            .request(BackendRequest::RunQuery {
                conditions: vec![Condition::new("1", "BattU", Comparison::Gt, "12")],
            })
            .unwrap();
        assert!(worker.is_busy());

        match worker.wait(TIMEOUT) {
            Some(BackendResponse::QueryReady(result)) => {
                assert_eq!(result.query, "BattU > 12");
                assert_eq!(result.row_count(), 3);
            }
            other => panic!("Expected QueryReady, got {:?}", other),
        }
        assert!(!worker.is_busy());
    }

    #[test]
    fn test_responses_keep_request_order() {
        let mut worker = BackgroundWorker::spawn(MockBackend::new(MockDelays::zero()));
        worker.request(BackendRequest::GenerateInsights).unwrap();
        worker
            .request(BackendRequest::CreateSignal {
                name: "power".into(),
                formula: "BattU * I".into(),
            })
            .unwrap();

        assert_eq!(worker.wait(TIMEOUT).map(|r| r.kind()), Some(RequestKind::Insights));
        match worker.wait(TIMEOUT) {
            Some(BackendResponse::SignalCreated { name }) => assert_eq!(name, "power"),
            other => panic!("Expected SignalCreated, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_errors_are_reported() {
        let mut worker = BackgroundWorker::spawn(FailingBackend);
        worker.request(BackendRequest::GenerateInsights).unwrap();
        match worker.wait(TIMEOUT) {
            Some(BackendResponse::Failed { kind, .. }) => assert_eq!(kind, RequestKind::Insights),
            other => panic!("Expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_poll_is_non_blocking() {
        let delays = MockDelays {
            insights: Duration::from_millis(200),
            ..MockDelays::zero()
        };
        let mut worker = BackgroundWorker::spawn(MockBackend::new(delays));
        worker.request(BackendRequest::GenerateInsights).unwrap();
        assert!(worker.poll().is_none());
        assert!(worker.is_busy());
    }
}
