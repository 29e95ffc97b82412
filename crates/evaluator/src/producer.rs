use log::info;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

use super::{
    error::Error,
    types::{KernelRequest, RequestStreamer},
};

pub struct Producer<S: RequestStreamer> {
    streamer: S,
}

impl<S> Producer<S>
where
    S: RequestStreamer,
{
    pub fn new(streamer: S) -> Self {
        Producer { streamer }
    }

    /// Moves the streamer onto the runtime; the channel closes when it returns.
    pub fn spawn(self, sender: Sender<Vec<KernelRequest>>) -> JoinHandle<Result<(), Error>> {
        info!("Producer ready.");
        tokio::spawn(async move { self.streamer.run_stream(sender).await })
    }
}
