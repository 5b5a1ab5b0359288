use profilecore::content::{Catalog, SectionBody, Testimonial};
use profilecore::deck::{ImageStatus, RevealTracker};
use profilecore::prelude::RevealStyle;
use profilecore::view::{ProfileView, Screen, SessionHost, TestimonialsPage};
use std::fmt::Write;

const BAR_WIDTH: usize = 20;

/// Plain-text rendering of whatever the host currently shows.
pub fn render_screen(host: &SessionHost) -> String {
    match host.screen() {
        Screen::Profile(view) if !view.is_started() => render_landing(host.catalog()),
        Screen::Profile(view) => render_deck(view),
        Screen::Testimonials(page) => render_testimonials(page),
    }
}

fn bar(percent: f32) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn render_landing(catalog: &Catalog) -> String {
    format!(
        "{}\n{}\n\n  [ {} ]\n",
        catalog.landing.title, catalog.landing.subtitle, catalog.landing.call_to_action
    )
}

fn render_deck(view: &ProfileView) -> String {
    let deck = view.deck();
    let section = deck.current();
    let mut out = String::new();

    let _ = writeln!(out, "{} {:>5.1}%", bar(deck.progress()), deck.progress());
    let _ = writeln!(out, "{}  |  {}", deck.step_label(), section.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "{} {}", section.icon.glyph(), section.title);
    let _ = writeln!(out, "  {}", section.subtitle);
    let _ = writeln!(out, "  {}", section.content);

    match &section.body {
        SectionBody::Landing => {}
        SectionBody::Bullets { bullets } => {
            for bullet in bullets {
                let _ = writeln!(out, "  • {}", bullet);
            }
        }
        SectionBody::Traits { traits } => {
            for metric in traits {
                let _ = writeln!(
                    out,
                    "  {:<14} {:>3}% {}",
                    metric.label,
                    metric.percent(),
                    bar(metric.percent())
                );
            }
        }
        SectionBody::Testimonials { testimonials } => {
            let highlighted = view.rotation().map(|rotation| rotation.current());
            let empty = RevealTracker::new(0);
            let reveals = view.current_reveals().unwrap_or(&empty);
            for (slot, testimonial) in testimonials.iter().enumerate() {
                let marker = if highlighted == Some(slot) { ">" } else { " " };
                let tile = render_tile(testimonial, reveals, slot, view.config().reveal_style);
                let _ = writeln!(out, " {}{}", marker, tile);
            }
        }
    }

    if section.shows_image() {
        let status = deck.image_status();
        if status.shows_placeholder() {
            let state = if status == ImageStatus::Failed {
                "unavailable"
            } else {
                "loading"
            };
            let _ = writeln!(out, "  [image {} ({})]", section.image, state);
        } else {
            let _ = writeln!(out, "  [image {}]", section.image);
        }
    }

    let _ = writeln!(out);
    let previous = if deck.is_first() { "(Previous)" } else { "< Previous" };
    let next = if deck.is_last() { "(Next)" } else { "Next >" };
    let dots: String = (0..deck.len())
        .map(|i| if i == deck.index() { '●' } else { '○' })
        .collect();
    let _ = writeln!(out, "{}   {}   {}", previous, dots, next);

    match deck.next_title() {
        Some(title) => {
            let _ = writeln!(out, "Next: {}", title);
        }
        None => {
            let _ = writeln!(out, "[ View Testimonials ]");
        }
    }
    out
}

fn render_tile(
    testimonial: &Testimonial,
    reveals: &RevealTracker,
    slot: usize,
    style: RevealStyle,
) -> String {
    if reveals.is_revealed(slot) {
        return format!(
            "\"{}\" - {}, {}",
            testimonial.text, testimonial.author, testimonial.role
        );
    }
    match (style, testimonial.image.as_deref()) {
        (RevealStyle::BlurredImage, Some(image)) => format!(
            "[blurred {}] Click to reveal - Discover who's behind this testimonial",
            image
        ),
        _ => "[?] Click to reveal - Discover who's behind this testimonial".to_string(),
    }
}

fn render_testimonials(page: &TestimonialsPage) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "< Back to Profile");
    let _ = writeln!(out);
    let _ = writeln!(out, "✉ Testimonials");
    let _ = writeln!(out, "  What others say about me");
    let _ = writeln!(out);
    for (slot, testimonial) in page.testimonials().iter().enumerate() {
        let tile = render_tile(testimonial, page.reveals(), slot, page.style());
        let _ = writeln!(out, "  {}. {}", slot + 1, tile);
        if page.reveals().is_revealed(slot) {
            if let Some(image) = &testimonial.image {
                let _ = writeln!(out, "     [portrait {}]", image);
            }
        }
    }
    let reveals = page.reveals();
    if reveals.all_revealed() {
        let _ = writeln!(out, "\nAll {} testimonials revealed", reveals.len());
    } else {
        let _ = writeln!(
            out,
            "\n{} of {} revealed",
            reveals.revealed_count(),
            reveals.len()
        );
    }
    out
}
