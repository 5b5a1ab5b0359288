use crate::content::Catalog;
use crate::prelude::{DeckConfig, DeckResult, PendingRoute, Route};
use crate::telemetry::LogManager;
use crate::view::event::InputEvent;
use crate::view::profile::ProfileView;
use crate::view::testimonials::TestimonialsPage;

/// The session currently on screen.
#[derive(Debug)]
pub enum Screen {
    Profile(ProfileView),
    Testimonials(TestimonialsPage),
}

impl Screen {
    pub fn route(&self) -> Route {
        match self {
            Screen::Profile(_) => Route::Profile,
            Screen::Testimonials(_) => Route::Testimonials,
        }
    }
}

/// Owns the content table and the active session, and resolves route
/// requests by opening a fresh session for the target view.
#[derive(Debug)]
pub struct SessionHost {
    catalog: Catalog,
    config: DeckConfig,
    screen: Screen,
    logger: LogManager,
}

impl SessionHost {
    pub fn new(catalog: Catalog, config: DeckConfig) -> DeckResult<Self> {
        let screen = open(&catalog, &config, Route::Profile)?;
        Ok(Self {
            catalog,
            config,
            screen,
            logger: LogManager::new("host"),
        })
    }

    pub fn dispatch(&mut self, event: InputEvent) -> DeckResult<bool> {
        let mut router = PendingRoute::default();
        let changed = match &mut self.screen {
            Screen::Profile(view) => view.handle(event, &mut router),
            Screen::Testimonials(page) => page.handle(event, &mut router),
        };
        if let Some(route) = router.take() {
            self.navigate(route)?;
        }
        Ok(changed)
    }

    pub fn navigate(&mut self, route: Route) -> DeckResult<()> {
        self.logger.record(&format!("navigating to {}", route.path()));
        self.screen = open(&self.catalog, &self.config, route)?;
        Ok(())
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }
}

fn open(catalog: &Catalog, config: &DeckConfig, route: Route) -> DeckResult<Screen> {
    Ok(match route {
        Route::Profile => Screen::Profile(ProfileView::new(
            catalog.sections.clone(),
            config.clone(),
        )?),
        Route::Testimonials => Screen::Testimonials(TestimonialsPage::new(
            catalog.testimonials.clone(),
            config.reveal_style,
        )),
    })
}
