use crate::chatbox::Chatbox;
use crate::config::Config;
use crate::constants::{NSFW_SWITCH_ID, XP_SOUNDS};
use crate::cookies::CookieStore;
use crate::errors::CatchatResult;
use crate::sequencer::{ChatEvent, TypingSequencer};
use crate::sound::{AudioBackend, SoundPlayer};
use crate::visibility::{Body, ContentBlock, NsfwToggle, ToggleControl};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Chat,
    QuitConfirm,
    Quit,
}

/// The page everything lives on.
pub struct App {
    pub state: AppState,
    pub chatbox: Chatbox,
    pub body: Body,
    pub nsfw_switch: Option<ToggleControl>,
    pub nsfw: NsfwToggle<Box<dyn CookieStore>>,
    pub sounds: SoundPlayer<Box<dyn AudioBackend>>,
    pub about: Vec<ContentBlock>,
}

impl App {
    pub fn new(
        config: &Config,
        events: mpsc::UnboundedSender<ChatEvent>,
        cookies: Box<dyn CookieStore>,
        audio: Box<dyn AudioBackend>,
    ) -> CatchatResult<App> {
        Ok(App {
            state: AppState::Chat,
            chatbox: Chatbox::new(TypingSequencer::new(events), config.typing_options()),
            body: Body::new(),
            nsfw_switch: Some(ToggleControl::new(NSFW_SWITCH_ID)),
            nsfw: NsfwToggle::new(cookies),
            sounds: SoundPlayer::new(XP_SOUNDS, audio)?,
            about: about_blocks(),
        })
    }

    /// Runs once the page is up: applies the NSFW preference and says hello.
    pub fn connect(&mut self) {
        self.nsfw.initialize(&mut self.body, self.nsfw_switch.as_mut());
        self.chatbox.connect();
    }

    pub fn toggle_nsfw(&mut self) {
        self.nsfw
            .on_control_input(&mut self.body, self.nsfw_switch.as_mut());
    }

    pub fn play_random_sound(&mut self) {
        self.sounds.play_random_sound();
    }

    pub fn is_running(&self) -> bool {
        self.state != AppState::Quit
    }
}

fn about_blocks() -> Vec<ContentBlock> {
    vec![
        ContentBlock::plain("Welcome! Talk to the assistant below, it knows everything."),
        ContentBlock::plain("Press Ctrl-S for a sound. Any sound. You don't get to pick."),
        ContentBlock::marked("The assistant is, in fact, a cat. Please do not tell it."),
    ]
}
