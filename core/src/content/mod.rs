pub mod catalog;
pub mod section;

pub use catalog::{Catalog, LandingCopy};
pub use section::{Icon, Section, SectionBody, Testimonial, TraitMetric};
