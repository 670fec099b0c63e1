use std::time::Duration;

use shared::Message;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::responder;

/// Fixed duration of the simulated processing phase.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Time-suspension contract for reply delivery.
///
/// The conversation controller never sleeps itself; it hands the reply
/// thunk to a scheduler so tests can substitute an immediate one.
pub trait ReplyScheduler: Send {
    fn schedule(
        &self,
        delay: Duration,
        make_reply: Box<dyn FnOnce() -> Message + Send>,
        tx: UnboundedSender<Message>,
    );
}

/// Delivers replies after `delay` on a tokio timer.
pub struct DelayScheduler {
    runtime: tokio::runtime::Runtime,
}

impl DelayScheduler {
    pub fn new() -> Result<Self, String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .map_err(|e| format!("Failed to start reply runtime: {e}"))?;
        Ok(Self { runtime })
    }
}

impl ReplyScheduler for DelayScheduler {
    fn schedule(
        &self,
        delay: Duration,
        make_reply: Box<dyn FnOnce() -> Message + Send>,
        tx: UnboundedSender<Message>,
    ) {
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver may be gone if the conversation was reset.
            let _ = tx.send(make_reply());
        });
    }
}

/// Delivers replies synchronously, ignoring the delay. Used by the test
/// harness and as a degraded fallback when no runtime is available.
pub struct InstantScheduler;

impl ReplyScheduler for InstantScheduler {
    fn schedule(
        &self,
        _delay: Duration,
        make_reply: Box<dyn FnOnce() -> Message + Send>,
        tx: UnboundedSender<Message>,
    ) {
        let _ = tx.send(make_reply());
    }
}

/// Conversation state: ordered message history, input buffer, and the
/// processing flag covering the simulated delay.
pub struct ChatState {
    pub messages: Vec<Message>,
    pub input: String,
    pub is_processing: bool,
    delay: Duration,
    scheduler: Box<dyn ReplyScheduler>,
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl ChatState {
    pub fn new(scheduler: Box<dyn ReplyScheduler>, delay: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            messages: vec![responder::greeting()],
            input: String::new(),
            is_processing: false,
            delay,
            scheduler,
            tx,
            rx,
        }
    }

    /// Submit the current input buffer.
    ///
    /// No-op when the trimmed buffer is empty or a reply is already being
    /// generated. Otherwise appends the user message, enters the processing
    /// state, and schedules the assistant reply; the reply message itself is
    /// created at delivery time so its id and timestamp reflect it.
    pub fn send_message(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.is_processing {
            return;
        }

        self.messages.push(Message::user(text.clone()));
        self.is_processing = true;

        self.scheduler.schedule(
            self.delay,
            Box::new(move || responder::synthesize_reply(&text)),
            self.tx.clone(),
        );

        self.input.clear();
    }

    /// Drain finished replies. Called once per frame by the app loop.
    /// Returns true if the message history grew.
    pub fn poll_responses(&mut self) -> bool {
        let mut appended = false;
        while let Ok(reply) = self.rx.try_recv() {
            self.messages.push(reply);
            self.is_processing = false;
            appended = true;
        }
        appended
    }

    /// Reset to a fresh conversation. A reply still in flight is abandoned:
    /// the channel is recreated, so the stale send lands nowhere.
    pub fn clear(&mut self) {
        let (tx, rx) = unbounded_channel();
        self.tx = tx;
        self.rx = rx;
        self.messages.clear();
        self.messages.push(responder::greeting());
        self.input.clear();
        self.is_processing = false;
    }

    /// Change the processing delay for subsequent sends.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }
}
