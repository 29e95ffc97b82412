use serde::Serialize;
use tokio::sync::mpsc::Sender;

use super::error::Error;
use common::{error::Error as KernelError, types::Kernel};

/// A trait defining the contract for any source that produces kernel requests
/// and streams them into the evaluation pipeline.
///
/// The trait bounds (`Send`, `Sync`, `'static`) let implementations run on the
/// multi-threaded Tokio runtime.
#[async_trait::async_trait]
pub trait RequestStreamer: Send + Sync + 'static {
    async fn run_stream(self, sender: Sender<Vec<KernelRequest>>) -> Result<(), Error>;
}

/// One kernel invocation.
///
/// `args: None` models an absent argument sequence, which the kernel rejects
/// with `InvalidArgument`; `Some(vec![])` is a valid empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelRequest {
    pub id: u64,
    pub kernel: Kernel,
    pub args: Option<Vec<f64>>,
}

/// Result row written by the evaluator. Exactly one of `value` / `error` is set.
#[derive(Debug, Clone, Serialize)]
pub struct KernelOutcome {
    pub id: u64,
    pub kernel: &'static str,
    pub value: Option<f64>,
    pub error: Option<String>,
}

impl KernelOutcome {
    pub fn new(request: &KernelRequest, outcome: Result<f64, KernelError>) -> Self {
        let (value, error) = match outcome {
            Ok(v) => (Some(v), None),
            Err(e) => (None, Some(e.to_string())),
        };
        KernelOutcome {
            id: request.id,
            kernel: request.kernel.name(),
            value,
            error,
        }
    }
}

/// Counters reported when the evaluator shuts down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationStats {
    pub evaluated: usize,
    pub rejected: usize,
    pub non_finite: usize,
}

/// Where the pipeline reads its requests from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sim,
    Csv(String),
}
