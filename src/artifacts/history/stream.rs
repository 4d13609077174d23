//! Streaming reflog reader
//!
//! A background task reads reflog subject lines, classifies them, rewrites
//! branch names through the [`NameResolver`] and pushes the resulting checkout
//! events into a bounded channel. The consumer pulls events with
//! [`HistoryStream::next`] and may stop at any point.
//!
//! ## Cancellation
//!
//! Every suspension point of the producer (waiting for the next line, waiting
//! for room in the channel) also waits on the stream's cancellation token,
//! with cancellation polled first. Once the token fires nothing new is
//! enqueued, but events already in the channel can still be drained.
//!
//! ## Subprocess lifetime
//!
//! When the lines come from a child process, the producer owns the child. On
//! every exit path it drops the output pipe and then waits for the child, so
//! the process is always reaped. Its exit status is only logged: lines that
//! were already read are kept even if the reader failed afterwards.

use crate::artifacts::history::entry::{CheckoutEvent, ReflogClassifier};
use crate::artifacts::history::resolver::NameResolver;
use crate::errors::HistoryError;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Number of resolved events the producer may run ahead of the consumer
pub const HISTORY_CHANNEL_CAPACITY: usize = 100;

/// Why the producer stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProducerExit {
    /// The source reached end of output
    Exhausted,
    /// The cancellation token fired
    Cancelled,
    /// The consumer went away
    Disconnected,
    /// Reading from the source failed; earlier events were delivered
    ReadFailed,
}

pub struct HistoryStream {
    events: mpsc::Receiver<CheckoutEvent>,
    producer: JoinHandle<ProducerExit>,
    cancel: CancellationToken,
}

impl HistoryStream {
    /// Stream the reflog printed on the standard output of `child`
    ///
    /// Fails without spawning anything if the child's stdout was not piped.
    pub fn from_child(
        mut child: Child,
        command: &str,
        classifier: ReflogClassifier,
        resolver: NameResolver,
        cancel: CancellationToken,
    ) -> Result<Self, HistoryError> {
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| HistoryError::MissingStdout {
                command: command.to_string(),
            })?;

        let command = command.to_string();
        let (sender, events) = mpsc::channel(HISTORY_CHANNEL_CAPACITY);
        let producer = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                let exit =
                    produce(BufReader::new(stdout), classifier, resolver, sender, &cancel).await;
                reap(child, &command).await;
                exit
            }
        });

        Ok(Self {
            events,
            producer,
            cancel,
        })
    }

    /// Stream the reflog from any in-process reader
    pub fn from_reader<R>(
        reader: R,
        classifier: ReflogClassifier,
        resolver: NameResolver,
        cancel: CancellationToken,
    ) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (sender, events) = mpsc::channel(HISTORY_CHANNEL_CAPACITY);
        let producer = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                produce(BufReader::new(reader), classifier, resolver, sender, &cancel).await
            }
        });

        Self {
            events,
            producer,
            cancel,
        }
    }

    /// Next resolved checkout event, or `None` once the producer is done and
    /// the channel is drained
    pub async fn next(&mut self) -> Option<CheckoutEvent> {
        self.events.recv().await
    }

    /// Stop producing; buffered events stay available to [`next`](Self::next)
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel the producer and wait until it has released its source
    pub async fn close(mut self) -> ProducerExit {
        self.cancel.cancel();

        match (&mut self.producer).await {
            Ok(exit) => exit,
            Err(err) => {
                warn!(error = %err, "reflog producer task failed");
                ProducerExit::Cancelled
            }
        }
    }
}

impl Drop for HistoryStream {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn produce<R>(
    mut reader: R,
    classifier: ReflogClassifier,
    mut resolver: NameResolver,
    events: mpsc::Sender<CheckoutEvent>,
    cancel: &CancellationToken,
) -> ProducerExit
where
    R: AsyncBufRead + Unpin,
{
    let mut line = Vec::new();

    loop {
        line.clear();

        let read = tokio::select! {
            biased;
            _ = cancel.cancelled() => return ProducerExit::Cancelled,
            read = reader.read_until(b'\n', &mut line) => read,
        };

        match read {
            Ok(0) => return ProducerExit::Exhausted,
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "failed to read the reflog, history may be incomplete");
                return ProducerExit::ReadFailed;
            }
        }

        let subject = String::from_utf8_lossy(&line);
        let subject = subject.trim_end_matches(['\n', '\r']);

        let Some(entry) = classifier.classify(subject) else {
            trace!(subject, "skipping reflog entry");
            continue;
        };
        let Some(event) = resolver.observe(entry) else {
            continue;
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return ProducerExit::Cancelled,
            sent = events.send(event) => {
                if sent.is_err() {
                    return ProducerExit::Disconnected;
                }
            }
        }
    }
}

async fn reap(mut child: Child, command: &str) {
    match child.wait().await {
        Ok(status) if status.success() => trace!(command, "reflog reader finished"),
        Ok(status) => debug!(command, %status, "ignoring reflog reader exit status"),
        Err(err) => debug!(command, error = %err, "failed to wait for the reflog reader"),
    }
}
