//! Print worker.
//!
//! One task drains the queue and prints jobs one at a time, so two receipts
//! never interleave on the paper. Device writes block, so each job runs on
//! the blocking pool.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::error::{Result, TipperError};
use crate::printer::PrinterConfig;
use crate::receipt::Receipt;
use crate::transport::SerialTransport;

/// Queue depth before submitters have to wait.
pub const QUEUE_CAPACITY: usize = 16;

/// Where finished jobs go.
pub type JobSink = Arc<dyn Fn(&[u8]) -> Result<()> + Send + Sync>;

/// Sink that opens the serial device for every job.
pub fn serial_sink(device_path: String, printer: PrinterConfig) -> JobSink {
    Arc::new(move |data: &[u8]| {
        let mut transport = SerialTransport::open(&device_path, &printer)?;
        transport.write_all(data)
    })
}

/// Print receipts from `jobs` until every sender is gone.
///
/// Returns the number of jobs printed successfully. Failed jobs are logged
/// and dropped; the worker keeps going.
pub async fn run(mut jobs: mpsc::Receiver<Receipt>, printer: PrinterConfig, sink: JobSink) -> usize {
    let mut printed = 0;

    while let Some(receipt) = jobs.recv().await {
        let sink = sink.clone();
        let header = receipt.header.clone();

        let result = tokio::task::spawn_blocking(move || {
            let data = receipt.build(&printer)?;
            sink(&data)?;
            Ok::<usize, TipperError>(data.len())
        })
        .await;

        match result {
            Ok(Ok(bytes)) => {
                printed += 1;
                info!(%header, bytes, "receipt printed");
            }
            Ok(Err(e)) => error!(%header, error = %e, "print failed"),
            Err(e) => error!(%header, error = %e, "print task panicked"),
        }
    }

    printed
}
