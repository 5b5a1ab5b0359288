use assets::{bridge_url, fetch_asset, fetch_content, ContentPayload, ImageCache};
use iced::{
    event, keyboard, time,
    widget::{button, column, image, progress_bar, row, scrollable, text, Column, Container, Row},
    window, Alignment, Element, Event, Length, Subscription, Task, Theme,
};
use log::{info, warn};
use profilecore::content::{Catalog, SectionBody};
use profilecore::deck::ImageStatus;
use profilecore::prelude::DeckConfig;
use profilecore::view::{Direction, InputEvent, ProfileView, Screen, SessionHost, TestimonialsPage};

mod assets;
mod tiles;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Viewer::boot, Viewer::update, Viewer::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(state: &Viewer) -> String {
    match state.screen() {
        Some(Screen::Profile(view)) if view.is_started() => {
            format!("Profile - {}", view.deck().current().title)
        }
        Some(Screen::Testimonials(_)) => "Profile - Testimonials".into(),
        _ => "Profile".into(),
    }
}

/// Arrow keys are only listened to while the deck is on screen, and the
/// rotation timer only while a rotation exists.
fn application_subscription(state: &Viewer) -> Subscription<Message> {
    let mut subscriptions = Vec::new();
    if let Some(Screen::Profile(view)) = state.screen() {
        if view.is_started() {
            subscriptions.push(event::listen_with(deck_keys));
        }
        if let Some(rotation) = view.rotation() {
            let tick = time::every(rotation.interval())
                .map(|_| Message::Input(InputEvent::RotationTick));
            subscriptions.push(tick);
        }
    }
    Subscription::batch(subscriptions)
}

fn application_theme(_: &Viewer) -> Theme {
    Theme::Light
}

fn deck_keys(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => key_direction(named).map(|direction| Message::Input(InputEvent::Key(direction))),
        _ => None,
    }
}

fn key_direction(named: keyboard::key::Named) -> Option<Direction> {
    match named {
        keyboard::key::Named::ArrowLeft => Some(Direction::Left),
        keyboard::key::Named::ArrowRight => Some(Direction::Right),
        _ => None,
    }
}

/// What the user is looking at; asset loading is keyed off changes to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Landing,
    Section(usize),
    Testimonials,
}

#[derive(Debug)]
struct Viewer {
    /// `None` until some catalog has opened a session.
    host: Option<SessionHost>,
    images: ImageCache,
    bridge: String,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    ContentFetched(Result<ContentPayload, String>),
    Input(InputEvent),
    AssetFetched {
        path: String,
        section: Option<usize>,
        result: Result<Vec<u8>, String>,
    },
}

impl Viewer {
    fn boot() -> (Self, Task<Message>) {
        let bridge = bridge_url();
        let (host, status) = match SessionHost::new(Catalog::builtin(), DeckConfig::default()) {
            Ok(host) => (Some(host), "Loading content...".to_string()),
            Err(err) => {
                warn!("built-in profile rejected: {}", err);
                (None, format!("Built-in profile unavailable: {err}"))
            }
        };
        (
            Viewer {
                host,
                images: ImageCache::default(),
                bridge: bridge.clone(),
                status,
            },
            Task::perform(fetch_content(bridge), Message::ContentFetched),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::ContentFetched(Ok(payload)) => {
                if state.focus() != Focus::Landing {
                    state.status = "Content update ignored while presenting".into();
                    return Task::none();
                }
                match SessionHost::new(payload.catalog, payload.deck) {
                    Ok(host) => {
                        info!("content loaded from {}", state.bridge);
                        state.host = Some(host);
                        state.status = format!("Content from {}", state.bridge);
                    }
                    Err(err) => state.status = format!("Content rejected: {err}"),
                }
                Task::none()
            }
            Message::ContentFetched(Err(err)) => {
                warn!("content fetch failed: {}", err);
                if state.host.is_some() {
                    state.status = "Offline: showing built-in profile".into();
                } else {
                    state.status = format!("Offline and no profile to show: {err}");
                }
                Task::none()
            }
            Message::Input(event) => {
                let before = state.focus();
                let Some(host) = state.host.as_mut() else {
                    return Task::none();
                };
                if let Err(err) = host.dispatch(event) {
                    state.status = format!("Navigation error: {err}");
                    return Task::none();
                }
                let after = state.focus();
                if before != after {
                    state.load_assets(after)
                } else {
                    Task::none()
                }
            }
            Message::AssetFetched {
                path,
                section,
                result,
            } => {
                let outcome = match result {
                    Ok(bytes) => {
                        state.images.insert(path, bytes);
                        section.map(InputEvent::ImageLoaded)
                    }
                    Err(err) => {
                        warn!("asset {} unavailable: {}", path, err);
                        section.map(InputEvent::ImageFailed)
                    }
                };
                if let (Some(event), Some(host)) = (outcome, state.host.as_mut()) {
                    if let Err(err) = host.dispatch(event) {
                        state.status = format!("Navigation error: {err}");
                    }
                }
                Task::none()
            }
        }
    }

    fn screen(&self) -> Option<&Screen> {
        self.host.as_ref().map(SessionHost::screen)
    }

    fn focus(&self) -> Focus {
        match self.screen() {
            Some(Screen::Profile(view)) if view.is_started() => {
                Focus::Section(view.deck().index())
            }
            Some(Screen::Testimonials(_)) => Focus::Testimonials,
            _ => Focus::Landing,
        }
    }

    fn load_assets(&self, focus: Focus) -> Task<Message> {
        let mut tasks = Vec::new();
        match (focus, self.screen()) {
            (Focus::Section(index), Some(Screen::Profile(view))) => {
                let section = view.deck().current();
                if section.shows_image() {
                    if self.images.contains(&section.image) {
                        tasks.push(Task::done(Message::Input(InputEvent::ImageLoaded(index))));
                    } else {
                        tasks.push(self.fetch(section.image.clone(), Some(index)));
                    }
                }
                if let Some(testimonials) = section.body.testimonials() {
                    tasks.extend(self.fetch_portraits(testimonials.iter()));
                }
            }
            (Focus::Testimonials, Some(Screen::Testimonials(page))) => {
                tasks.extend(self.fetch_portraits(page.testimonials().iter()));
            }
            _ => {}
        }
        Task::batch(tasks)
    }

    fn fetch_portraits<'a>(
        &'a self,
        testimonials: impl Iterator<Item = &'a profilecore::content::Testimonial> + 'a,
    ) -> impl Iterator<Item = Task<Message>> + 'a {
        testimonials
            .filter_map(|testimonial| testimonial.image.clone())
            .filter(|path| !self.images.contains(path))
            .map(|path| self.fetch(path, None))
    }

    fn fetch(&self, path: String, section: Option<usize>) -> Task<Message> {
        Task::perform(fetch_asset(self.bridge.clone(), path.clone()), move |result| {
            Message::AssetFetched {
                path: path.clone(),
                section,
                result,
            }
        })
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match &state.host {
            None => text("No profile content available").size(20).into(),
            Some(host) => match host.screen() {
                Screen::Profile(view) if !view.is_started() => landing_view(host.catalog()),
                Screen::Profile(view) => state.deck_view(view),
                Screen::Testimonials(page) => state.testimonials_view(page),
            },
        };

        let layout = column![screen, text(&state.status).size(12)]
            .spacing(12)
            .padding(20);

        Container::new(scrollable(layout))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    fn deck_view<'a>(&'a self, view: &'a ProfileView) -> Element<'a, Message> {
        let deck = view.deck();
        let section = deck.current();

        let header = column![
            progress_bar(0.0..=100.0, deck.progress()),
            row![
                text(deck.step_label()).size(13),
                Container::new(text(&section.title).size(13))
                    .width(Length::Fill)
                    .align_right(Length::Fill),
            ],
        ]
        .spacing(6);

        let mut narrative = Column::new()
            .spacing(14)
            .push(text(format!("{} {}", section.icon.glyph(), section.title)).size(30))
            .push(text(&section.subtitle).size(20))
            .push(text(&section.content).size(16));

        match &section.body {
            SectionBody::Landing => {}
            SectionBody::Bullets { bullets } => {
                narrative = narrative.push(bullets.iter().fold(
                    Column::new().spacing(6),
                    |col, bullet| col.push(text(format!("•  {}", bullet)).size(15)),
                ));
            }
            SectionBody::Traits { traits } => {
                narrative = narrative.push(traits.iter().fold(
                    Column::new().spacing(8),
                    |col, metric| {
                        col.push(column![
                            row![
                                text(&metric.label).size(13).width(Length::Fill),
                                text(format!("{}%", metric.percent())).size(13),
                            ],
                            progress_bar(0.0..=100.0, metric.percent()),
                        ])
                    },
                ));
            }
            SectionBody::Testimonials { testimonials } => {
                let highlighted = view.rotation().map(|rotation| rotation.current());
                let tiles = testimonials.iter().enumerate().map(|(slot, testimonial)| {
                    tiles::tile(
                        testimonial,
                        view.current_reveals()
                            .is_some_and(|reveals| reveals.is_revealed(slot)),
                        highlighted == Some(slot),
                        view.config().reveal_style,
                        testimonial.image.as_deref().and_then(|p| self.images.get(p)),
                        Message::Input(InputEvent::Reveal(slot)),
                    )
                });
                narrative = narrative.push(grid(tiles.collect()));
            }
        }

        let body: Element<'_, Message> = if section.shows_image() {
            row![
                narrative.width(Length::FillPortion(1)),
                self.section_image(&section.image, deck.image_status()),
            ]
            .spacing(24)
            .align_y(Alignment::Center)
            .into()
        } else {
            narrative.into()
        };

        let navigation = row![
            button(text("< Previous"))
                .on_press_maybe((!deck.is_first()).then_some(Message::Input(InputEvent::Previous))),
            Container::new(dots(deck.len(), deck.index()))
                .width(Length::Fill)
                .center_x(Length::Fill),
            button(text("Next >"))
                .on_press_maybe((!deck.is_last()).then_some(Message::Input(InputEvent::Next))),
        ]
        .align_y(Alignment::Center);

        let footer: Element<'_, Message> = match deck.next_title() {
            Some(title) => text(format!("Next: {}", title)).size(12).into(),
            None => button(text("View Testimonials ✉"))
                .on_press(Message::Input(InputEvent::ViewTestimonials))
                .padding(12)
                .into(),
        };

        column![
            header,
            body,
            navigation,
            row![
                footer,
                Container::new(
                    button(text("Leave deck").size(12)).on_press(Message::Input(InputEvent::Exit))
                )
                .width(Length::Fill)
                .align_right(Length::Fill),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(24)
        .max_width(960.0)
        .into()
    }

    fn section_image<'a>(&'a self, path: &'a str, status: ImageStatus) -> Element<'a, Message> {
        let content: Element<'a, Message> = match self.images.get(path) {
            Some(handle) if !status.shows_placeholder() => {
                image(handle.clone()).width(Length::Fill).into()
            }
            _ if status == ImageStatus::Failed => text("Image unavailable").size(14).into(),
            _ => text("Loading image...").size(14).into(),
        };
        Container::new(content)
            .width(Length::FillPortion(1))
            .height(Length::Fixed(320.0))
            .center_x(Length::FillPortion(1))
            .center_y(Length::Fixed(320.0))
            .into()
    }

    fn testimonials_view<'a>(&'a self, page: &'a TestimonialsPage) -> Element<'a, Message> {
        let tiles = page
            .testimonials()
            .iter()
            .enumerate()
            .map(|(slot, testimonial)| {
                tiles::tile(
                    testimonial,
                    page.reveals().is_revealed(slot),
                    false,
                    page.style(),
                    testimonial.image.as_deref().and_then(|p| self.images.get(p)),
                    Message::Input(InputEvent::Reveal(slot)),
                )
            })
            .collect();

        column![
            button(text("< Back to Profile")).on_press(Message::Input(InputEvent::Back)),
            column![
                text("✉ Testimonials").size(36),
                text("What others say about me").size(18),
            ]
            .spacing(6)
            .align_x(Alignment::Center)
            .width(Length::Fill),
            grid(tiles),
            text(reveal_footer(page)).size(12),
        ]
        .spacing(24)
        .max_width(1100.0)
        .into()
    }
}

fn landing_view(catalog: &Catalog) -> Element<'_, Message> {
    let landing = &catalog.landing;
    let card = column![
        text(&landing.title).size(40),
        text(&landing.subtitle).size(18),
        button(text(&landing.call_to_action).size(18))
            .on_press(Message::Input(InputEvent::Start))
            .padding(14),
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fixed(480.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(480.0))
        .into()
}

fn reveal_footer(page: &TestimonialsPage) -> String {
    let reveals = page.reveals();
    if reveals.all_revealed() {
        format!("All {} testimonials revealed", reveals.len())
    } else {
        format!("{} of {} revealed", reveals.revealed_count(), reveals.len())
    }
}

fn dots<'a>(len: usize, current: usize) -> Element<'a, Message> {
    (0..len)
        .fold(Row::new().spacing(6), |dots, index| {
            let marker = if index == current { "●" } else { "○" };
            dots.push(
                button(text(marker).size(12))
                    .on_press(Message::Input(InputEvent::Dot(index)))
                    .padding(4),
            )
        })
        .into()
}

/// Two tiles per row.
fn grid(mut tiles: Vec<Element<'_, Message>>) -> Element<'_, Message> {
    let mut rows = Column::new().spacing(16);
    while !tiles.is_empty() {
        let take = tiles.len().min(2);
        let chunk: Vec<_> = tiles.drain(..take).collect();
        rows = rows.push(
            chunk
                .into_iter()
                .fold(Row::new().spacing(16), |row, tile| row.push(tile)),
        );
    }
    rows.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_horizontal_arrows_map_to_directions() {
        assert_eq!(
            key_direction(keyboard::key::Named::ArrowLeft),
            Some(Direction::Left)
        );
        assert_eq!(
            key_direction(keyboard::key::Named::ArrowRight),
            Some(Direction::Right)
        );
        assert_eq!(key_direction(keyboard::key::Named::ArrowUp), None);
        assert_eq!(key_direction(keyboard::key::Named::Enter), None);
    }

    fn offline_viewer() -> Viewer {
        Viewer {
            host: None,
            images: ImageCache::default(),
            bridge: "http://127.0.0.1:9000".into(),
            status: String::new(),
        }
    }

    #[test]
    fn boot_opens_builtin_profile_on_landing() {
        let (viewer, _) = Viewer::boot();
        assert!(viewer.host.is_some());
        assert_eq!(viewer.focus(), Focus::Landing);
        assert_eq!(application_title(&viewer), "Profile");
    }

    #[test]
    fn input_without_session_is_ignored() {
        let mut viewer = offline_viewer();
        let _ = Viewer::update(&mut viewer, Message::Input(InputEvent::Start));
        assert!(viewer.host.is_none());
        assert_eq!(viewer.focus(), Focus::Landing);

        let _ = Viewer::update(&mut viewer, Message::ContentFetched(Err("refused".into())));
        assert!(viewer.status.contains("no profile to show"));
    }

    #[test]
    fn fetched_content_opens_missing_session() {
        let mut viewer = offline_viewer();
        let payload = ContentPayload {
            catalog: Catalog::builtin(),
            deck: DeckConfig::default(),
        };
        let _ = Viewer::update(&mut viewer, Message::ContentFetched(Ok(payload)));
        assert!(viewer.host.is_some());

        let _ = Viewer::update(&mut viewer, Message::Input(InputEvent::Start));
        assert_eq!(viewer.focus(), Focus::Section(0));
        assert_eq!(application_title(&viewer), "Profile - Welcome");
    }

    #[test]
    fn footer_reports_full_reveal() {
        let mut host = SessionHost::new(Catalog::builtin(), DeckConfig::default()).unwrap();
        host.navigate(profilecore::prelude::Route::Testimonials).unwrap();
        for slot in 0..4 {
            host.dispatch(InputEvent::Reveal(slot)).unwrap();
        }
        let Screen::Testimonials(page) = host.screen() else {
            panic!("expected testimonials page");
        };
        assert_eq!(reveal_footer(page), "All 4 testimonials revealed");
    }
}
