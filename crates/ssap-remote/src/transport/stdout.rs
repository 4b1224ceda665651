use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::Mutex;

use ssap_core::error::{Result, SsapError};

use crate::dispatch::Transport;

/// Writes one frame per line to stdout.
pub struct StdoutTransport {
    out: Mutex<Stdout>,
}

impl StdoutTransport {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
        }
    }
}

impl Default for StdoutTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for StdoutTransport {
    async fn send(&self, frame: Bytes) -> Result<()> {
        let mut out = self.out.lock().await;
        let write = async {
            out.write_all(&frame).await?;
            out.write_all(b"\n").await?;
            out.flush().await?;
            Ok::<_, std::io::Error>(())
        };
        write
            .await
            .map_err(|e| SsapError::Transport(format!("stdout write failed: {e}")))
    }
}
