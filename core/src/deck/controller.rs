use crate::content::Section;
use crate::deck::image::ImageStatus;
use crate::prelude::{DeckError, DeckResult};
use crate::telemetry::log::LogManager;

/// Clamped linear cursor over a fixed, non-empty sequence of sections.
///
/// The cursor starts at 0 behind a landing screen. Every change of the
/// cursor resets the image status to [`ImageStatus::Pending`]; the next
/// section's image must report completion again before it counts as loaded.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    sections: Vec<Section>,
    index: usize,
    started: bool,
    image: ImageStatus,
    logger: LogManager,
}

impl SlideDeck {
    pub fn new(sections: Vec<Section>) -> DeckResult<Self> {
        if sections.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(Self {
            sections,
            index: 0,
            started: false,
            image: ImageStatus::Pending,
            logger: LogManager::new("deck"),
        })
    }

    /// Leaves the landing screen. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.logger.record("journey started");
        true
    }

    /// Returns to the landing screen, keeping the cursor.
    pub fn exit(&mut self) -> bool {
        if !self.started {
            return false;
        }
        self.started = false;
        self.logger.record("returned to landing");
        true
    }

    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.move_to(self.index + 1);
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.move_to(self.index - 1);
        true
    }

    /// Sets the cursor directly. Out-of-range indices are rejected and leave
    /// the deck untouched. Returns whether the cursor moved.
    pub fn jump_to(&mut self, index: usize) -> DeckResult<bool> {
        let len = self.len();
        if index >= len {
            self.logger
                .reject(&format!("jump to {} rejected (len {})", index, len));
            return Err(DeckError::IndexOutOfRange { index, len });
        }
        if index == self.index {
            return Ok(false);
        }
        self.move_to(index);
        Ok(true)
    }

    /// Percentage of the deck reached, in `(0, 100]`.
    pub fn progress(&self) -> f32 {
        (self.index + 1) as f32 / self.len() as f32 * 100.0
    }

    pub fn mark_image_loaded(&mut self, index: usize) -> bool {
        self.settle_image(index, ImageStatus::Loaded)
    }

    pub fn mark_image_failed(&mut self, index: usize) -> bool {
        self.settle_image(index, ImageStatus::Failed)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len()
    }

    pub fn current(&self) -> &Section {
        &self.sections[self.index]
    }

    /// Title of the upcoming section, if any.
    pub fn next_title(&self) -> Option<&str> {
        self.sections
            .get(self.index + 1)
            .map(|section| section.title.as_str())
    }

    pub fn step_label(&self) -> String {
        format!("Step {} of {}", self.index + 1, self.len())
    }

    pub fn image_status(&self) -> ImageStatus {
        self.image
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        self.image = ImageStatus::Pending;
        self.logger.detail(&format!(
            "section {} ({}) {:.1}%",
            index,
            self.sections[index].id,
            self.progress()
        ));
    }

    // Notifications for a section that is no longer current are stale.
    fn settle_image(&mut self, index: usize, status: ImageStatus) -> bool {
        if index != self.index {
            self.logger
                .detail(&format!("stale image event for section {}", index));
            return false;
        }
        self.image = status;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Catalog;

    fn deck() -> SlideDeck {
        SlideDeck::new(Catalog::builtin().sections).unwrap()
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert_eq!(SlideDeck::new(Vec::new()).unwrap_err(), DeckError::EmptyDeck);
    }

    #[test]
    fn start_is_one_way_until_exit() {
        let mut deck = deck();
        assert!(!deck.is_started());
        assert!(deck.start());
        assert!(!deck.start());
        assert!(deck.is_started());
        assert!(deck.exit());
        assert!(!deck.is_started());
        assert!(!deck.exit());
    }

    #[test]
    fn advancing_five_times_reaches_the_end_and_clamps() {
        let mut deck = deck();
        for _ in 0..5 {
            assert!(deck.advance());
        }
        assert_eq!(deck.index(), 5);
        assert_eq!(deck.progress(), 100.0);
        assert!(!deck.advance());
        assert_eq!(deck.index(), 5);
        assert!(deck.is_last());
        assert_eq!(deck.next_title(), None);
    }

    #[test]
    fn retreat_at_first_section_is_noop() {
        let mut deck = deck();
        assert!(!deck.retreat());
        assert_eq!(deck.index(), 0);
        deck.advance();
        assert!(deck.retreat());
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn arbitrary_walks_stay_in_bounds() {
        let mut deck = deck();
        let pattern = [1, 1, -1, 1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1, -1, -1, -1, 1];
        for step in pattern.iter().cycle().take(200) {
            if *step > 0 {
                deck.advance();
            } else {
                deck.retreat();
            }
            assert!(deck.index() < deck.len());
        }
    }

    #[test]
    fn progress_is_strictly_increasing_and_hundred_only_at_end() {
        let mut deck = deck();
        let mut previous = 0.0;
        for index in 0..deck.len() {
            deck.jump_to(index).unwrap();
            let progress = deck.progress();
            assert!(progress > previous);
            assert_eq!(progress == 100.0, index == deck.len() - 1);
            previous = progress;
        }
    }

    #[test]
    fn jump_sets_index_directly_and_resets_image() {
        let mut deck = deck();
        assert!(deck.mark_image_loaded(0));
        assert!(deck.image_status().is_loaded());
        assert_eq!(deck.jump_to(3), Ok(true));
        assert_eq!(deck.index(), 3);
        assert_eq!(deck.image_status(), ImageStatus::Pending);
    }

    #[test]
    fn jump_out_of_range_is_rejected_without_side_effects() {
        let mut deck = deck();
        deck.jump_to(2).unwrap();
        deck.mark_image_loaded(2);
        assert_eq!(
            deck.jump_to(6),
            Err(DeckError::IndexOutOfRange { index: 6, len: 6 })
        );
        assert_eq!(deck.index(), 2);
        assert!(deck.image_status().is_loaded());
    }

    #[test]
    fn jump_to_current_index_keeps_image_state() {
        let mut deck = deck();
        deck.mark_image_loaded(0);
        assert_eq!(deck.jump_to(0), Ok(false));
        assert!(deck.image_status().is_loaded());
    }

    #[test]
    fn every_index_change_resets_image_status() {
        let mut deck = deck();
        deck.mark_image_loaded(0);
        deck.advance();
        assert_eq!(deck.image_status(), ImageStatus::Pending);
        deck.mark_image_failed(1);
        assert_eq!(deck.image_status(), ImageStatus::Failed);
        deck.retreat();
        assert_eq!(deck.image_status(), ImageStatus::Pending);
    }

    #[test]
    fn stale_image_events_are_ignored() {
        let mut deck = deck();
        deck.advance();
        assert!(!deck.mark_image_loaded(0));
        assert_eq!(deck.image_status(), ImageStatus::Pending);
    }

    #[test]
    fn step_label_and_next_title_follow_cursor() {
        let mut deck = deck();
        assert_eq!(deck.step_label(), "Step 1 of 6");
        assert_eq!(deck.next_title(), Some("My Personality"));
        deck.advance();
        assert_eq!(deck.step_label(), "Step 2 of 6");
        assert_eq!(deck.current().id, "personality");
    }
}
