use crate::prelude::DeckError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Discrete input delivered to a view session by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Start,
    Exit,
    Key(Direction),
    Next,
    Previous,
    Dot(usize),
    Reveal(usize),
    ImageLoaded(usize),
    ImageFailed(usize),
    RotationTick,
    ViewTestimonials,
    Back,
}

impl FromStr for InputEvent {
    type Err = DeckError;

    /// Parses the script form, e.g. `next`, `dot:3`, `reveal:2`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        let unknown = || DeckError::UnknownEvent(raw.to_string());
        let (name, arg) = match raw.split_once(':') {
            Some((name, arg)) => {
                let index = arg.trim().parse::<usize>().map_err(|_| unknown())?;
                (name.trim(), Some(index))
            }
            None => (raw, None),
        };

        let event = match (name.to_ascii_lowercase().as_str(), arg) {
            ("start", None) => InputEvent::Start,
            ("exit", None) => InputEvent::Exit,
            ("left", None) => InputEvent::Key(Direction::Left),
            ("right", None) => InputEvent::Key(Direction::Right),
            ("next", None) => InputEvent::Next,
            ("prev" | "previous", None) => InputEvent::Previous,
            ("tick", None) => InputEvent::RotationTick,
            ("testimonials", None) => InputEvent::ViewTestimonials,
            ("back", None) => InputEvent::Back,
            ("dot", Some(i)) => InputEvent::Dot(i),
            ("reveal", Some(i)) => InputEvent::Reveal(i),
            ("loaded", Some(i)) => InputEvent::ImageLoaded(i),
            ("failed", Some(i)) => InputEvent::ImageFailed(i),
            _ => return Err(unknown()),
        };
        Ok(event)
    }
}
