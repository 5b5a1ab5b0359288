use crate::content::Testimonial;
use crate::deck::RevealTracker;
use crate::prelude::{RevealStyle, Route, Router};
use crate::telemetry::{LogManager, Metrics, MetricsRecorder};
use crate::view::event::InputEvent;

/// Full-page testimonials view with its own reveal state.
#[derive(Debug)]
pub struct TestimonialsPage {
    testimonials: Vec<Testimonial>,
    reveals: RevealTracker,
    style: RevealStyle,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl TestimonialsPage {
    pub fn new(testimonials: Vec<Testimonial>, style: RevealStyle) -> Self {
        let reveals = RevealTracker::new(testimonials.len());
        Self {
            testimonials,
            reveals,
            style,
            logger: LogManager::new("testimonials"),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn handle<R: Router + ?Sized>(&mut self, event: InputEvent, router: &mut R) -> bool {
        match event {
            InputEvent::Reveal(slot) => match self.reveals.reveal(slot) {
                Ok(first) => {
                    if first {
                        self.metrics.record_reveal();
                        self.logger.record(&format!(
                            "revealed {}",
                            self.testimonials[slot].author
                        ));
                    }
                    first
                }
                Err(err) => {
                    self.metrics.record_rejected();
                    self.logger.reject(&err.to_string());
                    false
                }
            },
            InputEvent::Back | InputEvent::Exit => {
                router.navigate(Route::Profile);
                true
            }
            _ => false,
        }
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn reveals(&self) -> &RevealTracker {
        &self.reveals
    }

    pub fn style(&self) -> RevealStyle {
        self.style
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics.snapshot()
    }
}
