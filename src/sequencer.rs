// src/sequencer.rs

//! The "Virtual Assistant is typing..." routine.
//!
//! Every enqueued message runs its own pair of timers on the tokio runtime.
//! The timers never touch chat state; they send [`ChatEvent`]s to whoever
//! owns the chatbox, which applies them on the UI loop.

use crate::chat::ChatMessage;
use crate::constants::{DEFAULT_TIME_TO_START_TYPING_MS, DEFAULT_TYPING_TIME_MS};
use log::debug;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::sleep;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// Show or hide the typing indicator
    Typing(bool),
    /// Append the message to the log
    Reveal {
        message: ChatMessage,
        scroll_to_bottom: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    TypingIndicatorShown,
    MessageRevealed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingOptions {
    /// Time to wait before the typing indicator shows up
    pub time_to_start_typing: Duration,
    /// Time the typing indicator stays up before the message is sent
    pub typing_time: Duration,
    pub scroll_to_bottom: bool,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            time_to_start_typing: Duration::from_millis(DEFAULT_TIME_TO_START_TYPING_MS),
            typing_time: Duration::from_millis(DEFAULT_TYPING_TIME_MS),
            scroll_to_bottom: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypingSequencer {
    events: mpsc::UnboundedSender<ChatEvent>,
}

impl TypingSequencer {
    pub fn new(events: mpsc::UnboundedSender<ChatEvent>) -> Self {
        Self { events }
    }

    /// Schedules `message` to be "typed" and revealed.
    ///
    /// Sequences are independent: enqueueing while another one is pending
    /// runs both at once, and their events may interleave. Must be called
    /// from within a tokio runtime.
    pub fn enqueue(&self, message: ChatMessage, options: TypingOptions) -> SequenceHandle {
        let (state_tx, state_rx) = watch::channel(TypingState::Idle);
        let events = self.events.clone();

        let task = tokio::spawn(async move {
            sleep(options.time_to_start_typing).await;
            state_tx.send_replace(TypingState::TypingIndicatorShown);
            if events.send(ChatEvent::Typing(true)).is_err() {
                debug!("chatbox went away before typing started");
                return;
            }

            sleep(options.typing_time).await;
            let revealed = events.send(ChatEvent::Typing(false)).is_ok()
                && events
                    .send(ChatEvent::Reveal {
                        message,
                        scroll_to_bottom: options.scroll_to_bottom,
                    })
                    .is_ok();
            if revealed {
                state_tx.send_replace(TypingState::MessageRevealed);
            } else {
                debug!("chatbox went away before the message was revealed");
            }
        });

        SequenceHandle {
            task,
            state: state_rx,
        }
    }
}

/// A pending typing sequence.
///
/// Dropping the handle leaves the sequence running.
#[derive(Debug)]
pub struct SequenceHandle {
    task: JoinHandle<()>,
    state: watch::Receiver<TypingState>,
}

impl SequenceHandle {
    /// A sequence that ended without revealing its message reports
    /// [`TypingState::Cancelled`].
    pub fn state(&self) -> TypingState {
        if self.task.is_finished() && *self.state.borrow() != TypingState::MessageRevealed {
            return TypingState::Cancelled;
        }
        *self.state.borrow()
    }

    /// Stops whatever part of the sequence has not fired yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the sequence to end. Returns `false` if it was stopped with
    /// [`cancel`](Self::cancel).
    pub async fn finished(self) -> bool {
        self.task.await.is_ok()
    }
}
