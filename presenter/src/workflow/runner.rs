use anyhow::Context;
use profilecore::content::Catalog;
use profilecore::prelude::{DeckConfig, Route};
use profilecore::telemetry::Metrics;
use profilecore::view::{InputEvent, Screen, SessionHost};
use serde::Serialize;

/// Outcome of replaying a script against a fresh session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub changed_steps: usize,
    pub route: Route,
    pub started: bool,
    pub section_index: Option<usize>,
    pub progress: Option<f32>,
    pub revealed: usize,
    pub reveals: usize,
    pub rejected: usize,
}

impl RunSummary {
    fn from_host(host: &SessionHost, steps: usize, changed_steps: usize) -> Self {
        let (started, section_index, progress, revealed, metrics) = match host.screen() {
            Screen::Profile(view) => (
                view.is_started(),
                Some(view.deck().index()),
                Some(view.deck().progress()),
                view.current_reveals()
                    .map_or(0, |reveals| reveals.revealed_count()),
                view.metrics(),
            ),
            Screen::Testimonials(page) => (
                true,
                None,
                None,
                page.reveals().revealed_count(),
                page.metrics(),
            ),
        };
        let Metrics {
            reveals, rejected, ..
        } = metrics;
        Self {
            steps,
            changed_steps,
            route: host.screen().route(),
            started,
            section_index,
            progress,
            revealed,
            reveals,
            rejected,
        }
    }
}

/// Splits a comma separated script such as `start,next,dot:3`.
pub fn parse_script(script: &str) -> anyhow::Result<Vec<InputEvent>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<InputEvent>()
                .with_context(|| format!("parsing script step `{}`", token))
        })
        .collect()
}

#[derive(Clone)]
pub struct Runner {
    catalog: Catalog,
    config: DeckConfig,
}

impl Runner {
    pub fn new(catalog: Catalog, config: DeckConfig) -> Self {
        Self { catalog, config }
    }

    pub fn execute(&self, events: &[InputEvent]) -> anyhow::Result<RunSummary> {
        self.execute_with(events, |_, _, _| {})
    }

    /// Replays `events`, calling `on_step` after each one with the step
    /// number, the event and the host state.
    pub fn execute_with<F>(
        &self,
        events: &[InputEvent],
        mut on_step: F,
    ) -> anyhow::Result<RunSummary>
    where
        F: FnMut(usize, &InputEvent, &SessionHost),
    {
        let mut host = SessionHost::new(self.catalog.clone(), self.config.clone())
            .context("opening profile session")?;

        let mut changed_steps = 0;
        for (step, event) in events.iter().enumerate() {
            let changed = host
                .dispatch(*event)
                .with_context(|| format!("applying step {} ({:?})", step + 1, event))?;
            if changed {
                changed_steps += 1;
            }
            on_step(step + 1, event, &host);
        }

        Ok(RunSummary::from_host(&host, events.len(), changed_steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecore::content::SectionBody;

    fn runner() -> Runner {
        Runner::new(Catalog::builtin(), DeckConfig::default())
    }

    #[test]
    fn parse_script_skips_blanks_and_reports_bad_steps() {
        let events = parse_script("start, next,,dot:3 ").unwrap();
        assert_eq!(
            events,
            vec![InputEvent::Start, InputEvent::Next, InputEvent::Dot(3)]
        );
        let err = parse_script("start,warp:2").unwrap_err();
        assert!(err.to_string().contains("warp:2"));
    }

    #[test]
    fn six_advances_stop_at_last_section() {
        let events = parse_script("start,next,next,next,next,next,next").unwrap();
        let summary = runner().execute(&events).unwrap();
        assert_eq!(summary.section_index, Some(5));
        assert_eq!(summary.progress, Some(100.0));
        assert_eq!(summary.changed_steps, 6);
        assert_eq!(summary.route, Route::Profile);
    }

    #[test]
    fn journey_into_testimonials_page_reveals_one_tile() {
        let events = parse_script("start,dot:5,testimonials,reveal:2,reveal:2,reveal:9").unwrap();
        let summary = runner().execute(&events).unwrap();
        assert_eq!(summary.route, Route::Testimonials);
        assert_eq!(summary.revealed, 1);
        assert_eq!(summary.reveals, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.section_index, None);
    }

    #[test]
    fn in_deck_testimonials_rotate_when_enabled() {
        let mut catalog = Catalog::builtin();
        catalog.sections[3].body = SectionBody::Testimonials {
            testimonials: catalog.testimonials.clone(),
        };
        let config = DeckConfig {
            auto_rotate: true,
            ..DeckConfig::default()
        };
        let events = parse_script("start,dot:3,tick,tick,reveal:0").unwrap();
        let mut rotations = Vec::new();
        let summary = Runner::new(catalog, config)
            .execute_with(&events, |_, _, host| {
                if let Screen::Profile(view) = host.screen() {
                    rotations.push(view.rotation().map(|r| r.current()));
                }
            })
            .unwrap();
        assert_eq!(rotations, vec![None, Some(0), Some(1), Some(2), Some(2)]);
        assert_eq!(summary.revealed, 1);
    }

    #[test]
    fn keys_before_start_do_not_move_the_deck() {
        let events = parse_script("right,right,start").unwrap();
        let summary = runner().execute(&events).unwrap();
        assert_eq!(summary.section_index, Some(0));
        assert_eq!(summary.changed_steps, 1);
        assert!(summary.started);
    }
}
