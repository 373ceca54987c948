use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tracing::debug;

use speedmath_core::model::InputEvent;

use crate::controller::SessionController;
use crate::error::InputQueueError;

/// Creates a connected sender/queue pair.
#[must_use]
pub fn input_channel() -> (InputSender, InputQueue) {
    let (tx, rx) = mpsc::unbounded_channel();
    (InputSender { tx }, InputQueue { rx })
}

/// Producer half, held by whatever captures key presses.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: UnboundedSender<InputEvent>,
}

impl InputSender {
    /// Queues an event. Never blocks.
    ///
    /// # Errors
    ///
    /// Returns `InputQueueError::Closed` when the queue has been dropped.
    pub fn send(&self, event: InputEvent) -> Result<(), InputQueueError> {
        self.tx.send(event).map_err(|_| InputQueueError::Closed)
    }

    /// Queues a digit entry from a raw value.
    ///
    /// Values outside 0-9 are dropped and `Ok(false)` is returned.
    ///
    /// # Errors
    ///
    /// Returns `InputQueueError::Closed` when the queue has been dropped.
    pub fn send_digit(&self, value: u8) -> Result<bool, InputQueueError> {
        let Some(event) = InputEvent::digit(value) else {
            debug!(value, "dropping malformed digit");
            return Ok(false);
        };
        self.send(event)?;
        Ok(true)
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half. Events come out in the order they were sent.
#[derive(Debug)]
pub struct InputQueue {
    rx: UnboundedReceiver<InputEvent>,
}

impl InputQueue {
    /// Waits for the next event. Returns `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<InputEvent> {
        self.rx.recv().await
    }

    /// Returns the next queued event without waiting.
    pub fn try_next(&mut self) -> Option<InputEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Applies every event queued right now to `controller`, in arrival order.
    ///
    /// Returns how many events were processed.
    pub fn drain_into(&mut self, controller: &mut SessionController) -> usize {
        let mut processed = 0;
        while let Some(event) = self.try_next() {
            controller.apply(event);
            processed += 1;
        }
        processed
    }
}
