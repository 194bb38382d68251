use crate::app::{App, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key(key: KeyEvent, app: &mut App) {
    match app.state {
        AppState::Chat => handle_chat_input(key, app),
        AppState::QuitConfirm => handle_quit_confirm_input(key, app),
        AppState::Quit => {}
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            app.chatbox.submit();
        }
        KeyCode::PageUp | KeyCode::Up => app.chatbox.log_mut().scroll_up(),
        KeyCode::PageDown | KeyCode::Down => app.chatbox.log_mut().scroll_down(),
        KeyCode::Backspace => {
            app.chatbox.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => app.state = AppState::Quit,
                    'n' => app.toggle_nsfw(),
                    's' => app.play_random_sound(),
                    _ => {}
                }
            } else {
                app.chatbox.input.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Chat;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::constants::NSFW_CLASS;
    use crate::cookies::MemoryCookieStore;
    use crate::sequencer::ChatEvent;
    use crate::sound::SilentBackend;
    use crate::visibility::ClassList;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<ChatEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            &Config::default(),
            tx,
            Box::new(MemoryCookieStore::new()),
            Box::new(SilentBackend),
        )
        .unwrap();
        (app, rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_and_enter_submits() {
        let (mut app, _rx) = app();
        for c in "hi!".chars() {
            handle_key(key(KeyCode::Char(c)), &mut app);
        }
        handle_key(key(KeyCode::Backspace), &mut app);
        assert_eq!(app.chatbox.input, "hi");

        handle_key(key(KeyCode::Enter), &mut app);
        assert!(app.chatbox.input.is_empty());
        assert_eq!(app.chatbox.log().entries()[0].text, "hi");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_n_toggles_after_connect() {
        let (mut app, _rx) = app();
        app.connect();
        handle_key(ctrl('n'), &mut app);
        assert!(app.body.has_class(NSFW_CLASS));
        assert!(app.chatbox.input.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_confirm_flow() {
        let (mut app, _rx) = app();
        handle_key(key(KeyCode::Esc), &mut app);
        assert_eq!(app.state, AppState::QuitConfirm);
        handle_key(key(KeyCode::Char('n')), &mut app);
        assert_eq!(app.state, AppState::Chat);
        handle_key(key(KeyCode::Esc), &mut app);
        handle_key(key(KeyCode::Char('y')), &mut app);
        assert!(!app.is_running());
    }
}
