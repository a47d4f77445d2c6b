// One-shot event channel from command handlers to the presentation layer

use tokio::sync::mpsc;
use tracing::debug;

/// Create a bounded one-shot event channel
///
/// Each event is received at most once. Nothing is replayed to a receiver,
/// unlike the watch-based task list and preference streams.
pub fn channel<E>(capacity: usize) -> (EventSender<E>, EventReceiver<E>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (EventSender { tx }, EventReceiver { rx })
}

#[derive(Debug)]
pub struct EventSender<E> {
    tx: mpsc::Sender<E>,
}

impl<E> Clone for EventSender<E> {
    fn clone(&self) -> Self {
        Self { tx: self.tx.clone() }
    }
}

impl<E: std::fmt::Debug> EventSender<E> {
    /// Deliver an event, waiting for room in the channel
    ///
    /// An event sent after the receiver is gone is dropped.
    pub async fn send(&self, event: E) {
        if let Err(mpsc::error::SendError(event)) = self.tx.send(event).await {
            debug!(?event, "Event dropped, receiver is gone");
        }
    }
}

#[derive(Debug)]
pub struct EventReceiver<E> {
    rx: mpsc::Receiver<E>,
}

impl<E> EventReceiver<E> {
    /// Wait for the next event; `None` once every sender is gone
    pub async fn recv(&mut self) -> Option<E> {
        self.rx.recv().await
    }

    /// Next already-delivered event, if any
    pub fn try_recv(&mut self) -> Option<E> {
        self.rx.try_recv().ok()
    }
}
