use serde::{Deserialize, Serialize};

/// Symbolic glyph attached to a section header.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    #[default]
    Heart,
    Users,
    Briefcase,
    Star,
    MessageCircle,
}

impl Icon {
    pub fn glyph(&self) -> char {
        match self {
            Icon::Heart => '♥',
            Icon::Users => '☺',
            Icon::Briefcase => '■',
            Icon::Star => '★',
            Icon::MessageCircle => '✉',
        }
    }
}

/// Labelled percentage metric, e.g. a personality trait.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraitMetric {
    pub label: String,
    pub value: u8,
}

impl TraitMetric {
    pub fn new(label: impl Into<String>, value: u8) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Display percentage, saturated at 100.
    pub fn percent(&self) -> f32 {
        f32::from(self.value.min(100))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub text: String,
    pub author: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Testimonial {
    pub fn new(
        text: impl Into<String>,
        author: impl Into<String>,
        role: impl Into<String>,
        image: Option<&str>,
    ) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            role: role.into(),
            image: image.map(str::to_string),
        }
    }
}

/// The one kind of detail block a section carries below its narrative text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    #[default]
    Landing,
    Traits { traits: Vec<TraitMetric> },
    Bullets { bullets: Vec<String> },
    Testimonials { testimonials: Vec<Testimonial> },
}

impl SectionBody {
    pub fn testimonials(&self) -> Option<&[Testimonial]> {
        match self {
            SectionBody::Testimonials { testimonials } => Some(testimonials),
            _ => None,
        }
    }
}

/// One slide of the deck.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub image: String,
    pub background: String,
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub body: SectionBody,
}

impl Section {
    /// Testimonial sections render tiles in place of the section image.
    pub fn shows_image(&self) -> bool {
        self.body.testimonials().is_none()
    }

    pub fn testimonial_count(&self) -> usize {
        self.body.testimonials().map_or(0, <[Testimonial]>::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(body: SectionBody) -> Section {
        Section {
            id: "s".into(),
            title: "Title".into(),
            subtitle: "Sub".into(),
            content: "Body".into(),
            image: "/images/s.jpg".into(),
            background: "/images/bg-s.jpg".into(),
            icon: Icon::Star,
            body,
        }
    }

    #[test]
    fn trait_percent_saturates_at_hundred() {
        assert_eq!(TraitMetric::new("Feeling", 79).percent(), 79.0);
        assert_eq!(TraitMetric::new("Overflow", 250).percent(), 100.0);
    }

    #[test]
    fn testimonial_sections_hide_the_image() {
        let plain = section(SectionBody::Bullets {
            bullets: vec!["one".into()],
        });
        assert!(plain.shows_image());
        assert_eq!(plain.testimonial_count(), 0);

        let quotes = section(SectionBody::Testimonials {
            testimonials: vec![Testimonial::new("t", "a", "r", None)],
        });
        assert!(!quotes.shows_image());
        assert_eq!(quotes.testimonial_count(), 1);
    }

    #[test]
    fn body_deserializes_from_kind_tag() {
        let json = r#"{
            "id": "personality",
            "title": "My Personality",
            "subtitle": "ENFP",
            "content": "text",
            "image": "/images/personality.jpg",
            "background": "/images/bg-personality.jpg",
            "icon": "heart",
            "body": {"kind": "traits", "traits": [{"label": "Intuitive", "value": 76}]}
        }"#;
        let parsed: Section = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.body,
            SectionBody::Traits {
                traits: vec![TraitMetric::new("Intuitive", 76)]
            }
        );
    }

    #[test]
    fn missing_body_defaults_to_landing() {
        let json = r#"{"id":"welcome","title":"Welcome","subtitle":"","content":"",
            "image":"/images/welcome.jpg","background":"/images/bg-welcome.jpg"}"#;
        let parsed: Section = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.body, SectionBody::Landing);
        assert_eq!(parsed.icon, Icon::Heart);
    }
}
