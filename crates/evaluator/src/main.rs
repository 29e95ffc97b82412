pub mod config;
pub mod csv_streamer;
pub mod error;
pub mod evaluator;
pub mod producer;
pub mod simulator;
pub mod types;

use env_logger::Env;
use log::{error, info};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use tokio::sync::{mpsc, mpsc::Sender};
use tokio::task::JoinHandle;

use csv_streamer::CsvStreamer;
use error::Error;
use evaluator::Evaluator;
use producer::Producer;
use simulator::SimulatorStreamer;
use types::{DataSource, KernelRequest};

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let source = parse_args();
    let config = config::load_config()?;

    let capacity = config.producer.channel_capacity;
    let (sender, receiver) = mpsc::channel::<Vec<KernelRequest>>(capacity);

    let producer_handle = spawn_producer(&source, sender, &config);
    let evaluator_handle = Evaluator::new(receiver, open_output(&config)?).spawn_task();

    let (producer_result, evaluator_result) = tokio::join!(producer_handle, evaluator_handle);

    if let Err(e) = producer_result? {
        error!("Producer stopped early: {}", e);
    }
    let stats = evaluator_result??;

    info!(
        "Pipeline shut down after {} requests ({} rejected, {} non-finite).",
        stats.evaluated, stats.rejected, stats.non_finite
    );
    Ok(())
}

/// Parse command-line arguments to determine data source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "sim".to_string());

    match (source.as_str(), args.get(2)) {
        ("sim", _) => DataSource::Sim,
        ("csv", Some(path)) => DataSource::Csv(path.clone()),
        _ => {
            eprintln!(
                "Usage: {} <SIM|CSV> [path_to_csv]\n  - SIM: evaluate simulated requests\n  - CSV: read requests (id,kernel,args) from a CSV file",
                args.first().map(String::as_str).unwrap_or("evaluator")
            );
            std::process::exit(1);
        }
    }
}

fn open_output(config: &config::Config) -> Result<Box<dyn Write + Send>, Error> {
    match config.output.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => {
            info!("Writing results to {}", path);
            Ok(Box::new(File::create(path)?))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn spawn_producer(
    source: &DataSource,
    sender: Sender<Vec<KernelRequest>>,
    config: &config::Config,
) -> JoinHandle<Result<(), Error>> {
    match source {
        DataSource::Sim => {
            info!("Starting SimulatorStreamer producer task...");
            let streamer = SimulatorStreamer::new(config.simulator.clone());
            Producer::new(streamer).spawn(sender)
        }
        DataSource::Csv(path) => {
            info!("Starting CsvStreamer producer task...");
            let streamer = CsvStreamer::new(path.clone(), config.producer.batch_size);
            Producer::new(streamer).spawn(sender)
        }
    }
}
