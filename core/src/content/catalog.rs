use crate::content::section::{Icon, Section, SectionBody, Testimonial, TraitMetric};
use crate::prelude::{DeckError, DeckResult};
use serde::{Deserialize, Serialize};

/// Copy shown on the landing screen before the deck starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LandingCopy {
    pub title: String,
    pub subtitle: String,
    pub call_to_action: String,
}

impl Default for LandingCopy {
    fn default() -> Self {
        Self {
            title: "Welcome to My Profile".into(),
            subtitle: "Let's explore how I could contribute to Campus Founders".into(),
            call_to_action: "Start Journey".into(),
        }
    }
}

/// Static content table: the deck sections plus the testimonials page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    #[serde(default)]
    pub landing: LandingCopy,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Catalog {
    pub fn new(sections: Vec<Section>, testimonials: Vec<Testimonial>) -> DeckResult<Self> {
        if sections.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        for (position, section) in sections.iter().enumerate() {
            if sections[..position].iter().any(|other| other.id == section.id) {
                return Err(DeckError::InvalidContent(format!(
                    "duplicate section id `{}`",
                    section.id
                )));
            }
        }
        Ok(Self {
            landing: LandingCopy::default(),
            sections,
            testimonials,
        })
    }

    /// Re-checks the invariants `new` enforces, for deserialized catalogs.
    pub fn validated(self) -> DeckResult<Self> {
        let landing = self.landing;
        let mut catalog = Self::new(self.sections, self.testimonials)?;
        catalog.landing = landing;
        Ok(catalog)
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Every asset path referenced by the catalog, in display order.
    pub fn asset_paths(&self) -> Vec<&str> {
        let mut paths = Vec::new();
        for section in &self.sections {
            paths.push(section.image.as_str());
            paths.push(section.background.as_str());
            if let Some(testimonials) = section.body.testimonials() {
                paths.extend(testimonials.iter().filter_map(|t| t.image.as_deref()));
            }
        }
        paths.extend(self.testimonials.iter().filter_map(|t| t.image.as_deref()));
        paths
    }

    pub fn builtin() -> Self {
        Self {
            landing: LandingCopy::default(),
            sections: builtin_sections(),
            testimonials: builtin_testimonials(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn slide(
    id: &str,
    title: &str,
    subtitle: &str,
    content: &str,
    icon: Icon,
    body: SectionBody,
) -> Section {
    Section {
        id: id.into(),
        title: title.into(),
        subtitle: subtitle.into(),
        content: content.into(),
        image: format!("/images/{id}.jpg"),
        background: format!("/images/bg-{id}.jpg"),
        icon,
        body,
    }
}

fn bullets(items: &[&str]) -> SectionBody {
    SectionBody::Bullets {
        bullets: items.iter().map(|item| item.to_string()).collect(),
    }
}

fn builtin_sections() -> Vec<Section> {
    vec![
        slide(
            "welcome",
            "Welcome",
            "Let's explore my profile together",
            "Hi, I'm Lennart! I'm excited to show you how I could contribute to Campus Founders as a Program Manager. I bring a unique blend of innovation, coaching experience, and entrepreneurial spirit.",
            Icon::Heart,
            SectionBody::Landing,
        ),
        slide(
            "personality",
            "My Personality",
            "ENFP (The Campaigner)",
            "As an ENFP, I bring vibrant enthusiasm and creativity to everything I do. My natural ability to connect people and ideas makes me an effective bridge-builder in dynamic environments.",
            Icon::Heart,
            SectionBody::Traits {
                traits: vec![
                    TraitMetric::new("Extraverted", 60),
                    TraitMetric::new("Intuitive", 76),
                    TraitMetric::new("Feeling", 79),
                    TraitMetric::new("Prospecting", 85),
                    TraitMetric::new("Assertive", 82),
                ],
            },
        ),
        slide(
            "values",
            "My Core Values",
            "What drives me forward",
            "My approach to work and life is shaped by strong core values that align perfectly with the entrepreneurial spirit of Campus Founders:",
            Icon::Star,
            bullets(&[
                "Fostering Innovation & Entrepreneurship",
                "Building Meaningful Connections",
                "Driving Positive Impact",
                "Continuous Learning & Growth",
            ]),
        ),
        slide(
            "team",
            "My Role in Teams",
            "How I contribute to team success",
            "In the dynamic startup ecosystem of Campus Founders, I would contribute by:",
            Icon::Users,
            bullets(&[
                "Connecting talents with opportunities",
                "Facilitating growth and learning",
                "Creating engaging program experiences",
                "Building strong community relationships",
            ]),
        ),
        slide(
            "environment",
            "Ideal Work Environment",
            "Where I thrive",
            "The entrepreneurial and innovative environment at Campus Founders matches perfectly with where I perform best:",
            Icon::Briefcase,
            bullets(&[
                "Dynamic startup ecosystem",
                "Focus on learning and growth",
                "Collaborative community",
                "Impact-driven culture",
            ]),
        ),
        slide(
            "experience",
            "Key Experiences",
            "My professional journey",
            "My experience has prepared me well for the Program Coordinator role:",
            Icon::Briefcase,
            bullets(&[
                "Head of Product & Innovation at vonMorgen",
                "Startup Coach & Trainer",
                "Design Thinking Facilitator",
                "AI Implementation Specialist",
            ]),
        ),
    ]
}

fn builtin_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "Working with Lennart has always been a pleasure. His ability to combine knowledge from different areas, especially in automation and AI, consistently inspires. His energy and resourcefulness make every collaboration both productive and highly enjoyable.",
            "Pia Linden",
            "Design Thinking Coach & Facilitator at Deloitte",
            Some("/images/testimonial1.jpg"),
        ),
        Testimonial::new(
            "Lennart brings an impressively broad knowledge in entrepreneurship, innovation, and organizational development. His pragmatic approach, coupled with strategic vision, has been invaluable in optimizing our processes and integrating AI tools into our daily operations.",
            "Philipp Rier",
            "CEO Lia Collective",
            Some("/images/testimonial2.jpg"),
        ),
        Testimonial::new(
            "What I particularly value about Lennart is his contagious enthusiasm and ability to question dynamics, implement changes, and turn them into playful routines. His curiosity is remarkable - whenever something interests him, he dedicates himself completely until he has mastered it.",
            "Johannes Franke",
            "Architect & Design Thinking Coach",
            Some("/images/testimonial3.jpg"),
        ),
        Testimonial::new(
            "Working with Lennart is a delight. His boundless creativity is matched only by his enthusiasm for topics that interest him. He consistently brings unique value to every team, always has relevant methods at hand, and can be relied upon 100% to deliver excellence.",
            "Charlotte Streit",
            "CEO Hotel Ora & Amore",
            Some("/images/testimonial4.jpg"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_six_sections_and_four_testimonials() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.sections.len(), 6);
        assert_eq!(catalog.testimonials.len(), 4);
        assert_eq!(catalog.sections[0].body, SectionBody::Landing);
        assert_eq!(catalog.section("experience").unwrap().title, "Key Experiences");
    }

    #[test]
    fn builtin_section_ids_are_unique() {
        let catalog = Catalog::builtin();
        let mut ids: Vec<_> = catalog.sections.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.sections.len());
    }

    #[test]
    fn new_rejects_empty_section_list() {
        assert_eq!(Catalog::new(Vec::new(), Vec::new()), Err(DeckError::EmptyDeck));
    }

    #[test]
    fn new_rejects_duplicate_section_ids() {
        let mut sections = Catalog::builtin().sections;
        sections[1].id = "welcome".into();
        assert!(matches!(
            Catalog::new(sections, Vec::new()),
            Err(DeckError::InvalidContent(_))
        ));
    }

    #[test]
    fn asset_paths_are_forwarded_unchanged() {
        let catalog = Catalog::builtin();
        let paths = catalog.asset_paths();
        assert_eq!(paths[0], "/images/welcome.jpg");
        assert_eq!(paths[1], "/images/bg-welcome.jpg");
        assert_eq!(paths.last().copied(), Some("/images/testimonial4.jpg"));
        assert_eq!(paths.len(), 6 * 2 + 4);
    }

    #[test]
    fn catalog_survives_json_transport() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }
}
