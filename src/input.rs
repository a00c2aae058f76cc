use crate::domain::commands::Command;
use std::io;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::Sender;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

const QUIT: [&str; 2] = ["quit", "exit"];

/// Reads one command per line and forwards it, until EOF, a quit line or a closed channel.
#[instrument(skip_all)]
pub async fn read_commands<R>(reader: R, tx: Sender<Command>) -> io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut lines = LinesStream::new(BufReader::new(reader).lines());

    while let Some(line) = lines.next().await {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        if QUIT.iter().any(|quit| input.eq_ignore_ascii_case(quit)) {
            info!("👋 Quit requested");
            break;
        }

        match input.parse::<Command>() {
            Ok(command) => {
                debug!("⌨️ Read command {:?}", command);
                if tx.send(command).await.is_err() {
                    warn!("⚠️ Dispatcher is gone, no longer reading commands");
                    break;
                }
            }
            Err(err) => warn!("⚠️ {}", err),
        }
    }

    Ok(())
}
