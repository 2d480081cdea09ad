//! Background worker for running analysis requests without blocking the UI.
//!
//! The UI thread sends requests over a channel and drains responses with
//! `try_recv` from its tick loop. Every request carries the cycle sequence
//! number it was issued under; the response echoes it so the orchestrator
//! can discard responses from superseded cycles.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use finsnap_core::protocol::{AnalysisInput, AnalysisResult};

use crate::client::AnalysisClient;

/// Request sent to the background worker
#[derive(Debug)]
pub enum AnalysisRequest {
    /// Run one analysis cycle against the remote service
    Analyze { seq: u64, input: AnalysisInput },
    /// Graceful shutdown
    Shutdown,
}

/// Response from the background worker
#[derive(Debug)]
pub enum AnalysisResponse {
    /// The request under `seq` settled, successfully or not
    Complete {
        seq: u64,
        result: Result<AnalysisResult, String>,
    },
}

/// Interface the orchestrator talks to, so tests can substitute a recording
/// backend for the real worker thread.
pub trait AnalysisBackend {
    /// Send a request to the worker. Returns true if it was accepted.
    fn send(&self, request: AnalysisRequest) -> bool;

    /// Try to receive a response (non-blocking)
    fn try_recv(&self) -> Option<AnalysisResponse>;
}

/// Background worker that runs analysis requests on a separate thread
pub struct AnalysisWorker {
    request_tx: Sender<AnalysisRequest>,
    response_rx: Receiver<AnalysisResponse>,
    thread: Option<JoinHandle<()>>,
}

impl AnalysisWorker {
    /// Create a new worker with a background thread owning the HTTP client
    pub fn new(client: AnalysisClient) -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();

        let thread = thread::spawn(move || {
            run_worker(client, request_rx, response_tx);
        });

        Self {
            request_tx,
            response_rx,
            thread: Some(thread),
        }
    }

    /// Shutdown the worker thread
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(AnalysisRequest::Shutdown);
    }
}

impl AnalysisBackend for AnalysisWorker {
    fn send(&self, request: AnalysisRequest) -> bool {
        self.request_tx.send(request).is_ok()
    }

    fn try_recv(&self) -> Option<AnalysisResponse> {
        self.response_rx.try_recv().ok()
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run_worker(
    client: AnalysisClient,
    request_rx: Receiver<AnalysisRequest>,
    response_tx: Sender<AnalysisResponse>,
) {
    while let Ok(request) = request_rx.recv() {
        match request {
            AnalysisRequest::Shutdown => break,

            AnalysisRequest::Analyze { seq, input } => {
                tracing::info!(seq, "Starting analysis request");
                let result = client.analyze(&input).map_err(|e| {
                    tracing::warn!(seq, error = %e, "Analysis request failed");
                    e.to_string()
                });
                let _ = response_tx.send(AnalysisResponse::Complete { seq, result });
            }
        }
    }
}
