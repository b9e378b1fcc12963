use crate::events::AppEvent;
use async_channel::Sender;
use talkdeck::SOCKET_PATH;
use talkdeck::command::Command;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub async fn run_server(tx: Sender<AppEvent>) {
    // stale socket from a previous run
    if fs_err::metadata(SOCKET_PATH).is_ok() {
        let _ = fs_err::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind control socket {}: {}", SOCKET_PATH, e);
            return;
        }
    };
    log::info!("Listening for remote commands on {}", SOCKET_PATH);

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        if line.trim().is_empty() {
                            continue;
                        }
                        match line.parse::<Command>() {
                            Ok(command) => {
                                if tx.send(AppEvent::Command(command)).await.is_err() {
                                    return;
                                }
                            }
                            Err(e) => log::warn!("Ignoring remote command '{}': {}", line, e),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}
