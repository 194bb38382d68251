// src/chatbox.rs

//! A chatbox you can talk to. It is extremely smart.

use crate::chat::{ChatMessage, ASSISTANT, VISITOR};
use crate::chat_message::ChatLog;
use crate::constants::GREETING;
use crate::nya::generate_nya;
use crate::sequencer::{ChatEvent, SequenceHandle, TypingOptions, TypingSequencer};
use crate::status_indicator::TypingIndicator;
use log::debug;

pub struct Chatbox {
    log: ChatLog,
    indicator: TypingIndicator,
    sequencer: TypingSequencer,
    reply_options: TypingOptions,
    reply: fn() -> String,
    /// The form's text field
    pub input: String,
}

impl Chatbox {
    pub fn new(sequencer: TypingSequencer, reply_options: TypingOptions) -> Self {
        Self::with_reply(sequencer, reply_options, generate_nya)
    }

    /// Like [`new`](Self::new), but the assistant answers with whatever
    /// `reply` comes up with.
    pub fn with_reply(
        sequencer: TypingSequencer,
        reply_options: TypingOptions,
        reply: fn() -> String,
    ) -> Self {
        Self {
            log: ChatLog::new(),
            indicator: TypingIndicator::new(ASSISTANT.name),
            sequencer,
            reply_options,
            reply,
            input: String::new(),
        }
    }

    /// Has the assistant say hello, without scrolling.
    pub fn connect(&mut self) -> SequenceHandle {
        self.queue_message(
            ChatMessage::new(ASSISTANT, GREETING),
            TypingOptions {
                scroll_to_bottom: false,
                ..self.reply_options
            },
        )
    }

    /// Submits the form.
    ///
    /// Blank input is ignored and leaves the field alone. Otherwise the
    /// visitor's message goes straight into the log, the form is reset and an
    /// assistant reply is queued.
    pub fn submit(&mut self) -> Option<SequenceHandle> {
        let text = self.input.trim();
        if text.is_empty() {
            return None;
        }

        let message = ChatMessage::new(VISITOR, text);
        self.input.clear();
        self.add_message(&message);
        self.log.scroll_to_bottom();

        let reply = ChatMessage::new(ASSISTANT, (self.reply)());
        debug!("Queued reply: {}", reply.text);
        Some(self.queue_message(reply, self.reply_options))
    }

    pub fn add_message(&mut self, message: &ChatMessage) {
        self.log.append(message);
    }

    pub fn queue_message(&self, message: ChatMessage, options: TypingOptions) -> SequenceHandle {
        self.sequencer.enqueue(message, options)
    }

    /// Applies an event sent by a typing sequence.
    pub fn apply(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::Typing(shown) => self.set_ellipsis(shown),
            ChatEvent::Reveal {
                message,
                scroll_to_bottom,
            } => {
                self.add_message(&message);
                if scroll_to_bottom {
                    self.log.scroll_to_bottom();
                }
            }
        }
    }

    pub fn set_ellipsis(&mut self, shown: bool) {
        self.indicator.set_shown(shown);
    }

    pub fn indicator(&self) -> &TypingIndicator {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut TypingIndicator {
        &mut self.indicator
    }

    pub fn log(&self) -> &ChatLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut ChatLog {
        &mut self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use tokio::time::sleep;

    fn chatbox() -> (Chatbox, mpsc::UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let chatbox = Chatbox::with_reply(TypingSequencer::new(tx), TypingOptions::default(), || {
            "Nyanya, nya.".to_string()
        });
        (chatbox, rx)
    }

    /// Applies events until `count` messages have been revealed.
    async fn drain_reveals(
        chatbox: &mut Chatbox,
        rx: &mut mpsc::UnboundedReceiver<ChatEvent>,
        count: usize,
    ) {
        let mut revealed = 0;
        while revealed < count {
            let event = rx.recv().await.unwrap();
            if matches!(event, ChatEvent::Reveal { .. }) {
                revealed += 1;
            }
            chatbox.apply(event);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_is_rejected() {
        let (mut chatbox, mut rx) = chatbox();
        chatbox.input = "   ".to_string();

        assert!(chatbox.submit().is_none());
        sleep(Duration::from_secs(10)).await;

        assert!(chatbox.log().is_empty());
        assert!(rx.try_recv().is_err());
        assert_eq!(chatbox.input, "   ");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hello_gets_one_reply() {
        let (mut chatbox, mut rx) = chatbox();
        chatbox.input = "  hello ".to_string();

        assert!(chatbox.submit().is_some());
        assert!(chatbox.input.is_empty());
        assert_eq!(chatbox.log().len(), 1);
        let visitor = &chatbox.log().entries()[0];
        assert_eq!(visitor.name, VISITOR.name);
        assert_eq!(visitor.text, "hello");
        assert_eq!(chatbox.log().scroll, u16::MAX);

        assert_eq!(rx.recv().await, Some(ChatEvent::Typing(true)));
        chatbox.apply(ChatEvent::Typing(true));
        assert!(chatbox.indicator().is_shown());
        assert_eq!(chatbox.log().len(), 1);

        drain_reveals(&mut chatbox, &mut rx, 1).await;
        assert!(!chatbox.indicator().is_shown());
        assert_eq!(chatbox.log().len(), 2);
        let reply = &chatbox.log().entries()[1];
        assert_eq!(reply.name, ASSISTANT.name);
        assert_eq!(reply.text, "Nyanya, nya.");

        sleep(Duration::from_secs(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_reply_is_nya() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut chatbox = Chatbox::new(TypingSequencer::new(tx), TypingOptions::default());
        chatbox.input = "meow?".to_string();
        chatbox.submit();

        drain_reveals(&mut chatbox, &mut rx, 1).await;
        let reply = &chatbox.log().entries()[1].text;
        assert!(reply.ends_with('.'));
        let leftover = reply.to_lowercase().replace("nya", "");
        assert!(leftover.chars().all(|c| matches!(c, ' ' | ',' | '.')));
    }

    #[tokio::test(start_paused = true)]
    async fn test_greeting_does_not_scroll() {
        let (mut chatbox, mut rx) = chatbox();
        chatbox.connect();

        drain_reveals(&mut chatbox, &mut rx, 1).await;
        assert_eq!(chatbox.log().entries()[0].text, GREETING);
        assert_eq!(chatbox.log().scroll, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_submits_all_get_replies() {
        let (mut chatbox, mut rx) = chatbox();
        for text in ["one", "two", "three"] {
            chatbox.input = text.to_string();
            chatbox.submit();
        }
        assert_eq!(chatbox.log().len(), 3);

        drain_reveals(&mut chatbox, &mut rx, 3).await;
        assert_eq!(chatbox.log().len(), 6);
        assert_eq!(
            chatbox
                .log()
                .entries()
                .iter()
                .filter(|e| e.name == ASSISTANT.name)
                .count(),
            3
        );
    }
}
