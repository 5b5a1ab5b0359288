pub mod event;
pub mod host;
pub mod profile;
pub mod testimonials;

pub use event::{Direction, InputEvent};
pub use host::{Screen, SessionHost};
pub use profile::ProfileView;
pub use testimonials::TestimonialsPage;
