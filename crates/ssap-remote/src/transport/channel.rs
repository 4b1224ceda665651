use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::mpsc;

use ssap_core::error::{Result, SsapError};

use crate::dispatch::Transport;

/// Forwards frames to an mpsc receiver owned by a connection task.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    tx: mpsc::Sender<Bytes>,
}

impl ChannelTransport {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<Bytes>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Transport for ChannelTransport {
    async fn send(&self, frame: Bytes) -> Result<()> {
        self.tx
            .send(frame)
            .await
            .map_err(|_| SsapError::Transport("connection task gone".into()))
    }
}
