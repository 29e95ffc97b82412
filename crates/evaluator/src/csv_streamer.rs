use csv::{ReaderBuilder, Trim};
use log::{info, warn};
use serde::Deserialize;
use std::fs::File;
use tokio::sync::mpsc::Sender;

use super::error::Error;
use super::types::{KernelRequest, RequestStreamer};
use common::error::Error as KernelError;
use common::types::Kernel;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize, Default)]
pub struct CsvRecord {
    pub id: u64,
    pub kernel: String,
    /// Empty field means the argument sequence is absent.
    pub args: Option<String>,
}

impl TryFrom<CsvRecord> for KernelRequest {
    type Error = Error;

    fn try_from(record: CsvRecord) -> Result<Self, Error> {
        let kernel: Kernel = record.kernel.parse()?;
        let args = record.args.as_deref().map(parse_args).transpose()?;
        Ok(KernelRequest {
            id: record.id,
            kernel,
            args,
        })
    }
}

/// Parses `1.5;-2;inf`, optionally wrapped in brackets. `[]` is the empty sequence.
pub fn parse_args(field: &str) -> Result<Vec<f64>, Error> {
    let trimmed = field.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(trimmed)
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(';')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| {
                Error::KernelError(KernelError::InvalidArgument(format!(
                    "'{}' is not a number",
                    token
                )))
            })
        })
        .collect()
}

pub struct CsvStreamer {
    path: String,
    batch_size: usize,
}

impl CsvStreamer {
    pub fn new(path: String, batch_size: usize) -> Self {
        CsvStreamer { path, batch_size }
    }

    /// Reads every row; malformed rows are logged and skipped.
    fn parse_csv_to_requests(&self) -> Result<Vec<KernelRequest>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            warn!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(file);

        let mut requests = Vec::new();

        for (row, result) in rdr.deserialize::<CsvRecord>().enumerate() {
            match result.map_err(Error::from).and_then(KernelRequest::try_from) {
                Ok(request) => requests.push(request),
                Err(e) => warn!("Skipping row {} of {}: {}", row + 1, self.path, e),
            }
        }
        Ok(requests)
    }
}

#[async_trait::async_trait]
impl RequestStreamer for CsvStreamer {
    async fn run_stream(self, sender: Sender<Vec<KernelRequest>>) -> Result<(), Error> {
        let all_requests = self.parse_csv_to_requests()?;
        let total_requests = all_requests.len();
        let mut requests_sent = 0;

        info!("CsvStreamer: Starting transfer of {} requests...", total_requests);

        for chunk in all_requests.chunks(self.batch_size) {
            let batch: Vec<KernelRequest> = chunk.to_vec();
            if let Err(e) = sender.send(batch).await {
                warn!(
                    "CsvStreamer shutting down: Evaluator receiver dropped during send. Error: {}",
                    e
                );
                return Err(Error::ChannelSendFailed);
            }

            requests_sent += chunk.len();
        }

        info!(
            "CsvStreamer: Successfully transferred {} requests in batches.",
            requests_sent
        );
        Ok(())
    }
}
