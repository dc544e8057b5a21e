// * Emit collaborator: where finished messages and report blocks go.

use async_trait::async_trait;
use std::io::Write;
use thiserror::Error;

use crate::engine::report::ReportBlock;

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("send failed: {0}")]
    Send(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[async_trait]
pub trait ReportSink: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<(), EmitError>;

    async fn send_block(&self, block: &ReportBlock) -> Result<(), EmitError>;
}

/// Writes everything to standard output, separated by blank lines
#[derive(Debug, Default)]
pub struct StdoutSink;

#[async_trait]
impl ReportSink for StdoutSink {
    async fn send_text(&self, text: &str) -> Result<(), EmitError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}\n", text)?;
        Ok(())
    }

    async fn send_block(&self, block: &ReportBlock) -> Result<(), EmitError> {
        self.send_text(&block.render()).await
    }
}
