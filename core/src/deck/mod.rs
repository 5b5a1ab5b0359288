pub mod controller;
pub mod image;
pub mod reveal;
pub mod rotation;

pub use controller::SlideDeck;
pub use image::ImageStatus;
pub use reveal::RevealTracker;
pub use rotation::TestimonialRotation;
