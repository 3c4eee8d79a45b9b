//! Responsible for specifically recieving terminal input
//! using [`crossterm`].

use crossterm::event::{self, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt as _;
use tokio::sync::mpsc::Sender;

use crate::{pomodoro::Mode, Message};

/// Maps a single key press to a [`Message`], if it means anything.
pub fn map(event: KeyEvent) -> Option<Message> {
    let message = match event.code {
        // Countdown field editing.
        KeyCode::Up => Message::Adjust(1),
        KeyCode::Down => Message::Adjust(-1),
        KeyCode::PageUp => Message::Adjust(10),
        KeyCode::PageDown => Message::Adjust(-10),
        KeyCode::Right => Message::Field(true),
        KeyCode::Left => Message::Field(false),

        KeyCode::Tab | KeyCode::BackTab => Message::Focus,
        KeyCode::Enter => Message::Toggle,
        KeyCode::Char(character) => match character.to_ascii_lowercase() {
            // Ctrl+C
            'c' if event.modifiers == KeyModifiers::CONTROL => Message::Quit,

            'q' => Message::Quit,
            ' ' => Message::Toggle,
            's' => Message::Start,
            'p' => Message::Pause,
            'r' => Message::Reset,

            // Display & preferences.
            'f' => Message::ToggleFormat,
            't' => Message::ToggleTheme,
            'm' => Message::ToggleSound,

            // Pomodoro phases.
            'w' => Message::Mode(Mode::Work),
            'b' => Message::Mode(Mode::Break),

            digit @ '0'..='9' => Message::Digit(digit as u8 - b'0'),
            _ => return None,
        },
        KeyCode::Media(event::MediaKeyCode::PlayPause) => Message::Toggle,
        KeyCode::Media(event::MediaKeyCode::Stop) => Message::Reset,
        KeyCode::Media(event::MediaKeyCode::MuteVolume) => Message::ToggleSound,
        _ => return None,
    };

    Some(message)
}

/// Starts the listener to recieve input from the terminal for various events.
pub async fn listen(sender: Sender<Message>) -> super::Result<()> {
    let mut reader = EventStream::new();

    while let Some(event) = reader.next().await {
        let Ok(event::Event::Key(event)) = event else {
            continue;
        };

        if event.kind == KeyEventKind::Release {
            continue;
        }

        if let Some(message) = map(event) {
            sender.send(message).await?;
        }
    }

    Ok(())
}
