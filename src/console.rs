//! Line-based console transport.
//!
//! Each input line is one chat message. Lines are dispatched as independent
//! tasks and replies are written as they complete, so a slow lookup does not
//! hold up the lines behind it.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

use crate::commands::Dispatcher;

/// Reads lines from `reader` until EOF and writes every reply to `writer`.
///
/// Returns after all in-flight commands have replied.
pub async fn serve<R, W>(
    dispatcher: Arc<Dispatcher>,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let mut lines = reader.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    let dispatcher = Arc::clone(&dispatcher);
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        if let Some(reply) = dispatcher.handle(&line).await {
                            let _ = tx.send(reply);
                        }
                    });
                }
                None => break,
            },
            Some(reply) = rx.recv() => write_reply(&mut writer, &reply).await?,
        }
    }

    debug!("Input closed, waiting for pending replies");
    drop(tx);
    while let Some(reply) = rx.recv().await {
        write_reply(&mut writer, &reply).await?;
    }

    writer.flush().await
}

async fn write_reply<W: AsyncWrite + Unpin>(writer: &mut W, reply: &str) -> std::io::Result<()> {
    writer.write_all(reply.as_bytes()).await?;
    if !reply.ends_with('\n') {
        writer.write_all(b"\n").await?;
    }
    writer.flush().await
}
