use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
}

pub async fn event_loop(event_tx: mpsc::Sender<AppEvent>) {
    let mut key_stream = EventStream::new();

    while let Some(Ok(event)) = key_stream.next().await {
        if let Event::Key(key) = event {
            if event_tx.send(AppEvent::Key(key)).await.is_err() {
                break;
            }
        }
    }
}
