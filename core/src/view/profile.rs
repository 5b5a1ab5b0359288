use crate::content::Section;
use crate::deck::{RevealTracker, SlideDeck, TestimonialRotation};
use crate::prelude::{DeckConfig, DeckResult, Route, Router};
use crate::telemetry::{LogManager, Metrics, MetricsRecorder};
use crate::view::event::{Direction, InputEvent};
use std::time::Duration;

/// The profile session: landing screen followed by the slide deck.
///
/// Each testimonial-bearing section gets its own [`RevealTracker`], kept for
/// the lifetime of the session. Input other than `Start` is ignored while the
/// landing screen is shown.
#[derive(Debug)]
pub struct ProfileView {
    deck: SlideDeck,
    reveals: Vec<RevealTracker>,
    rotation: Option<TestimonialRotation>,
    config: DeckConfig,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl ProfileView {
    pub fn new(sections: Vec<Section>, config: DeckConfig) -> DeckResult<Self> {
        let reveals = sections
            .iter()
            .map(|section| RevealTracker::new(section.testimonial_count()))
            .collect();
        Ok(Self {
            deck: SlideDeck::new(sections)?,
            reveals,
            rotation: None,
            config,
            logger: LogManager::new("profile"),
            metrics: MetricsRecorder::new(),
        })
    }

    /// Applies one input event. Returns whether anything observable changed.
    pub fn handle<R: Router + ?Sized>(&mut self, event: InputEvent, router: &mut R) -> bool {
        if !self.deck.is_started() {
            return match event {
                InputEvent::Start => {
                    self.deck.start();
                    self.on_section_shown();
                    true
                }
                _ => false,
            };
        }

        let moved = match event {
            InputEvent::Start => false,
            InputEvent::Exit => {
                self.deck.exit();
                self.rotation = None;
                return true;
            }
            InputEvent::Key(Direction::Right) | InputEvent::Next => self.deck.advance(),
            InputEvent::Key(Direction::Left) | InputEvent::Previous => self.deck.retreat(),
            InputEvent::Dot(index) => match self.deck.jump_to(index) {
                Ok(moved) => moved,
                Err(_) => {
                    self.metrics.record_rejected();
                    false
                }
            },
            InputEvent::Reveal(slot) => return self.reveal(slot),
            InputEvent::ImageLoaded(index) => return self.deck.mark_image_loaded(index),
            InputEvent::ImageFailed(index) => {
                let applied = self.deck.mark_image_failed(index);
                if applied {
                    self.logger
                        .reject(&format!("image for section {} failed to load", index));
                }
                return applied;
            }
            InputEvent::RotationTick => {
                return match self.rotation.as_mut() {
                    Some(rotation) => {
                        rotation.tick();
                        true
                    }
                    None => false,
                };
            }
            InputEvent::ViewTestimonials => {
                if !self.deck.is_last() {
                    return false;
                }
                self.logger.record("leaving deck for testimonials");
                router.navigate(Route::Testimonials);
                return true;
            }
            InputEvent::Back => false,
        };

        if moved {
            self.on_section_shown();
        }
        moved
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn is_started(&self) -> bool {
        self.deck.is_started()
    }

    /// Reveal state of the current section, if it carries testimonials.
    pub fn current_reveals(&self) -> Option<&RevealTracker> {
        self.reveals
            .get(self.deck.index())
            .filter(|tracker| !tracker.is_empty())
    }

    pub fn rotation(&self) -> Option<&TestimonialRotation> {
        self.rotation.as_ref()
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics.snapshot()
    }

    fn reveal(&mut self, slot: usize) -> bool {
        let section = self.deck.index();
        let Some(tracker) = self.reveals.get_mut(section) else {
            return false;
        };
        match tracker.reveal(slot) {
            Ok(true) => {
                self.metrics.record_reveal();
                self.logger.record(&format!(
                    "revealed testimonial {} in section {}",
                    slot, section
                ));
                true
            }
            Ok(false) => false,
            Err(err) => {
                self.metrics.record_rejected();
                self.logger.reject(&err.to_string());
                false
            }
        }
    }

    fn on_section_shown(&mut self) {
        self.metrics.record_slide_view();
        self.sync_rotation();
    }

    // A rotation is tied to the section that created it.
    fn sync_rotation(&mut self) {
        let index = self.deck.index();
        if self
            .rotation
            .as_ref()
            .is_some_and(|rotation| rotation.section() == index)
        {
            return;
        }
        self.rotation = if self.config.auto_rotate {
            TestimonialRotation::new(
                index,
                self.deck.current().testimonial_count(),
                Duration::from_secs(self.config.rotate_interval_secs.max(1)),
            )
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Catalog, SectionBody};
    use crate::deck::ImageStatus;
    use crate::prelude::PendingRoute;

    fn view() -> ProfileView {
        ProfileView::new(Catalog::builtin().sections, DeckConfig::default()).unwrap()
    }

    fn deck_with_quotes(auto_rotate: bool) -> ProfileView {
        let mut sections = Catalog::builtin().sections;
        sections[2].body = SectionBody::Testimonials {
            testimonials: Catalog::builtin().testimonials,
        };
        let config = DeckConfig {
            auto_rotate,
            ..DeckConfig::default()
        };
        ProfileView::new(sections, config).unwrap()
    }

    #[test]
    fn keys_are_ignored_on_landing_screen() {
        let mut view = view();
        let mut router = PendingRoute::default();
        assert!(!view.handle(InputEvent::Key(Direction::Right), &mut router));
        assert!(!view.handle(InputEvent::Dot(3), &mut router));
        assert_eq!(view.deck().index(), 0);
        assert!(view.handle(InputEvent::Start, &mut router));
        assert!(view.handle(InputEvent::Key(Direction::Right), &mut router));
        assert_eq!(view.deck().index(), 1);
    }

    #[test]
    fn keys_and_buttons_are_equivalent() {
        let mut router = PendingRoute::default();
        let mut by_key = view();
        let mut by_click = view();
        by_key.handle(InputEvent::Start, &mut router);
        by_click.handle(InputEvent::Start, &mut router);
        for _ in 0..3 {
            by_key.handle(InputEvent::Key(Direction::Right), &mut router);
            by_click.handle(InputEvent::Next, &mut router);
        }
        by_key.handle(InputEvent::Key(Direction::Left), &mut router);
        by_click.handle(InputEvent::Previous, &mut router);
        assert_eq!(by_key.deck().index(), by_click.deck().index());
        assert_eq!(by_key.deck().index(), 2);
    }

    #[test]
    fn dot_jump_resets_image_and_out_of_range_is_counted() {
        let mut view = view();
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        view.handle(InputEvent::ImageLoaded(0), &mut router);
        assert!(view.deck().image_status().is_loaded());
        assert!(view.handle(InputEvent::Dot(3), &mut router));
        assert_eq!(view.deck().index(), 3);
        assert_eq!(view.deck().image_status(), ImageStatus::Pending);

        assert!(!view.handle(InputEvent::Dot(9), &mut router));
        assert_eq!(view.deck().index(), 3);
        assert_eq!(view.metrics().rejected, 1);
    }

    #[test]
    fn stale_image_event_does_not_mark_new_section() {
        let mut view = view();
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        view.handle(InputEvent::Next, &mut router);
        assert!(!view.handle(InputEvent::ImageLoaded(0), &mut router));
        assert!(view.handle(InputEvent::ImageFailed(1), &mut router));
        assert_eq!(view.deck().image_status(), ImageStatus::Failed);
    }

    #[test]
    fn testimonials_route_only_from_last_section() {
        let mut view = view();
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        assert!(!view.handle(InputEvent::ViewTestimonials, &mut router));
        assert_eq!(router.take(), None);

        view.handle(InputEvent::Dot(5), &mut router);
        assert!(view.handle(InputEvent::ViewTestimonials, &mut router));
        assert_eq!(router.take(), Some(Route::Testimonials));
    }

    #[test]
    fn in_deck_reveals_are_scoped_to_their_section() {
        let mut view = deck_with_quotes(false);
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        assert!(view.current_reveals().is_none());
        assert!(!view.handle(InputEvent::Reveal(0), &mut router));

        view.handle(InputEvent::Dot(2), &mut router);
        assert!(view.handle(InputEvent::Reveal(1), &mut router));
        assert!(!view.handle(InputEvent::Reveal(1), &mut router));
        assert!(!view.handle(InputEvent::Reveal(7), &mut router));

        view.handle(InputEvent::Next, &mut router);
        view.handle(InputEvent::Previous, &mut router);
        let reveals = view.current_reveals().unwrap();
        assert!(reveals.is_revealed(1));
        assert_eq!(reveals.revealed_count(), 1);
        assert_eq!(view.metrics().reveals, 1);
    }

    #[test]
    fn rotation_exists_only_on_testimonial_section_when_enabled() {
        let mut view = deck_with_quotes(true);
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        assert!(view.rotation().is_none());
        assert!(!view.handle(InputEvent::RotationTick, &mut router));

        view.handle(InputEvent::Dot(2), &mut router);
        assert!(view.handle(InputEvent::RotationTick, &mut router));
        assert_eq!(view.rotation().map(|r| r.current()), Some(1));
        assert_eq!(view.rotation().map(|r| r.interval()), Some(Duration::from_secs(5)));

        view.handle(InputEvent::Next, &mut router);
        assert!(view.rotation().is_none());
    }

    #[test]
    fn rotation_disabled_by_default() {
        let mut view = deck_with_quotes(false);
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        view.handle(InputEvent::Dot(2), &mut router);
        assert!(view.rotation().is_none());
    }

    #[test]
    fn exit_returns_to_landing_and_drops_rotation() {
        let mut view = deck_with_quotes(true);
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        view.handle(InputEvent::Dot(2), &mut router);
        assert!(view.handle(InputEvent::Exit, &mut router));
        assert!(!view.is_started());
        assert!(view.rotation().is_none());
        assert!(!view.handle(InputEvent::Next, &mut router));
    }

    #[test]
    fn slide_views_count_start_and_moves() {
        let mut view = view();
        let mut router = PendingRoute::default();
        view.handle(InputEvent::Start, &mut router);
        view.handle(InputEvent::Next, &mut router);
        view.handle(InputEvent::Previous, &mut router);
        view.handle(InputEvent::Previous, &mut router);
        assert_eq!(view.metrics().slide_views, 3);
    }
}
