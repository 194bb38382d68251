// src/lib.rs

pub mod app;
pub mod chat;
pub mod chat_message;
pub mod chat_view;
pub mod chatbox;
pub mod config;
pub mod constants;
pub mod cookies;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod nya;
pub mod sequencer;
pub mod sound;
pub mod status_indicator;
pub mod ui;
pub mod visibility;
