use async_trait::async_trait;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::Sender;
use tokio::time::{self, Duration};

use super::config::SimulatorConfig;
use super::error::Error;
use super::types::{KernelRequest, RequestStreamer};
use common::types::{Arity, Kernel};

/// Largest magnitude used for scalar trig arguments.
const SCALAR_RANGE: f64 = 8.0;

/// Largest absolute exponent generated for `pow`.
const MAX_POW_EXPONENT: i32 = 64;

/// Produces synthetic kernel requests for simulation purposes.
///
/// Generates batches of requests with random kernels and argument sequences
/// spanning many decades, and sends them over a Tokio bounded channel. Stops
/// after `total_requests` have been sent, which closes the channel.
pub struct SimulatorStreamer {
    config: SimulatorConfig,
}

impl SimulatorStreamer {
    pub fn new(config: SimulatorConfig) -> Self {
        SimulatorStreamer { config }
    }

    fn special_value(rng: &mut SmallRng) -> f64 {
        match rng.random_range(0..3) {
            0 => f64::NAN,
            1 => f64::INFINITY,
            _ => f64::NEG_INFINITY,
        }
    }

    /// `± m * 10^e` with `m` in `[1, 10)` and `e` between the configured decades.
    fn wide_value(&self, rng: &mut SmallRng) -> f64 {
        if rng.random_bool(self.config.special_value_rate) {
            return Self::special_value(rng);
        }
        let mantissa = rng.random_range(1.0..10.0);
        let decade = rng.random_range(self.config.min_decade..=self.config.max_decade);
        let value = mantissa * 10f64.powi(decade);
        if rng.random::<bool>() { -value } else { value }
    }

    fn scalar_value(&self, rng: &mut SmallRng) -> f64 {
        if rng.random_bool(self.config.special_value_rate) {
            return Self::special_value(rng);
        }
        rng.random_range(-SCALAR_RANGE..=SCALAR_RANGE)
    }

    fn generate_args(&self, kernel: Kernel, rng: &mut SmallRng) -> Option<Vec<f64>> {
        if rng.random_bool(self.config.absent_rate) {
            return None;
        }
        let args = match kernel.arity() {
            Arity::Variadic => {
                let len = rng.random_range(0..=self.config.max_sequence_len);
                (0..len).map(|_| self.wide_value(rng)).collect()
            }
            Arity::Unary => vec![self.scalar_value(rng)],
            Arity::Binary => {
                let exponent = rng.random_range(-MAX_POW_EXPONENT..=MAX_POW_EXPONENT);
                vec![self.scalar_value(rng), exponent as f64]
            }
        };
        Some(args)
    }

    fn generate_request(&self, id: u64, rng: &mut SmallRng) -> KernelRequest {
        let kernel = Kernel::ALL[rng.random_range(0..Kernel::ALL.len())];
        let args = self.generate_args(kernel, rng);
        KernelRequest { id, kernel, args }
    }
}

#[async_trait]
impl RequestStreamer for SimulatorStreamer {
    /// Runs the simulation asynchronously.
    ///
    /// Backpressure is handled by awaiting on `sender.send()`. Returns
    /// `ChannelSendFailed` if the receiver is dropped early.
    async fn run_stream(self, sender: Sender<Vec<KernelRequest>>) -> Result<(), Error> {
        let mut interval = time::interval(Duration::from_millis(self.config.interval_ms));

        let mut rng: SmallRng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let total = self.config.total_requests as u64;
        let mut next_id: u64 = 0;

        while next_id < total {
            interval.tick().await;

            let end = (next_id + self.config.batch_size as u64).min(total);
            let requests: Vec<KernelRequest> = (next_id..end)
                .map(|id| self.generate_request(id, &mut rng))
                .collect();
            next_id = end;

            debug!("Simulator sent {} requests.", requests.len());
            if sender.send(requests).await.is_err() {
                info!("Simulator shutting down: Evaluator receiver dropped.");
                return Err(Error::ChannelSendFailed);
            }
        }

        info!("Simulator finished after {} requests.", total);
        Ok(())
    }
}
