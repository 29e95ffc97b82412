use log::{debug, info, warn};
use std::io::Write;
use tokio::sync::mpsc::Receiver;
use tokio::task::JoinHandle;

use super::error::Error;
use super::types::{EvaluationStats, KernelOutcome, KernelRequest};
use stable_math_core::traits::Evaluate;

/// Async consumer that evaluates kernel requests and writes one CSV row per request.
pub struct Evaluator<W: Write> {
    receiver: Receiver<Vec<KernelRequest>>,
    sink: csv::Writer<W>,
    stats: EvaluationStats,
}

impl<W> Evaluator<W>
where
    W: Write + Send + 'static,
{
    pub fn new(receiver: Receiver<Vec<KernelRequest>>, output: W) -> Self {
        Self {
            receiver,
            sink: csv::Writer::from_writer(output),
            stats: EvaluationStats::default(),
        }
    }

    fn evaluate_batch(&mut self, batch: Vec<KernelRequest>) -> Result<(), Error> {
        for request in batch {
            let outcome = request.kernel.evaluate(request.args.as_deref());
            match &outcome {
                Ok(value) if !value.is_finite() => self.stats.non_finite += 1,
                Ok(_) => {}
                Err(e) => {
                    warn!("Request {} rejected: {}", request.id, e);
                    self.stats.rejected += 1;
                }
            }
            self.stats.evaluated += 1;
            self.sink.serialize(KernelOutcome::new(&request, outcome))?;
        }
        self.sink.flush()?;
        Ok(())
    }

    /// Run the evaluator asynchronously.
    ///
    /// Consumes batches until every sender is dropped, flushing the sink after
    /// each batch, then returns the accumulated counters.
    pub async fn process_requests(mut self) -> Result<EvaluationStats, Error> {
        info!("Evaluator ready.");

        while let Some(batch) = self.receiver.recv().await {
            let size = batch.len();
            self.evaluate_batch(batch)?;
            debug!("Evaluated batch of {} requests.", size);
        }

        info!(
            "Receiver closed, evaluator done: {} evaluated, {} rejected, {} non-finite.",
            self.stats.evaluated, self.stats.rejected, self.stats.non_finite
        );
        Ok(self.stats)
    }

    /// Spawns the evaluator onto the Tokio runtime.
    pub fn spawn_task(self) -> JoinHandle<Result<EvaluationStats, Error>> {
        tokio::spawn(self.process_requests())
    }
}
