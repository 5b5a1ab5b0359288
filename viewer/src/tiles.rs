use iced::{
    mouse,
    widget::{
        button,
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        column, image, row, text, Column, Container,
    },
    Alignment, Color, Element, Length, Point, Rectangle, Renderer, Theme,
};
use profilecore::content::Testimonial;
use profilecore::prelude::RevealStyle;

/// Placeholder art for a hidden testimonial.
#[derive(Clone)]
struct RevealPrompt {
    style: RevealStyle,
}

impl<Message> canvas::Program<Message> for RevealPrompt {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 2.0;
        let accent = Color::from_rgb(0.23, 0.51, 0.96);

        match self.style {
            RevealStyle::Glyph => {
                let ring = Path::new(|builder| builder.circle(center, radius));
                frame.stroke(&ring, Stroke::default().with_width(2.0).with_color(accent));
                frame.fill_text(canvas::Text {
                    content: "?".into(),
                    position: Point::new(center.x - radius * 0.3, center.y - radius * 0.6),
                    color: accent,
                    size: (radius * 1.2).into(),
                    ..canvas::Text::default()
                });
            }
            RevealStyle::BlurredImage => {
                for step in (1..=6).rev() {
                    let fraction = step as f32 / 6.0;
                    let disc = Path::new(|builder| builder.circle(center, radius * fraction));
                    frame.fill(
                        &disc,
                        Color::from_rgba(0.55, 0.6, 0.7, 0.12 + 0.08 * (1.0 - fraction)),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

/// One testimonial tile. Hidden tiles are the only clickable state.
pub fn tile<'a, Message: Clone + 'a>(
    testimonial: &'a Testimonial,
    revealed: bool,
    highlighted: bool,
    style: RevealStyle,
    portrait: Option<&image::Handle>,
    on_reveal: Message,
) -> Element<'a, Message> {
    if !revealed {
        let prompt = Canvas::new(RevealPrompt { style })
            .width(Length::Fixed(48.0))
            .height(Length::Fixed(48.0));
        let body = column![
            prompt,
            text("Click to reveal").size(18),
            text("Discover who's behind this testimonial").size(12),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        return button(
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fixed(180.0))
                .center_x(Length::Fill)
                .center_y(Length::Fixed(180.0)),
        )
        .on_press(on_reveal)
        .padding(12)
        .width(Length::Fill)
        .into();
    }

    let mut byline = Column::new().spacing(2).push(text(&testimonial.author).size(18));
    byline = byline.push(text(&testimonial.role).size(12));

    let header: Element<'a, Message> = match portrait {
        Some(handle) => row![
            image(handle.clone())
                .width(Length::Fixed(56.0))
                .height(Length::Fixed(56.0)),
            byline
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into(),
        None => byline.into(),
    };

    let quote = if highlighted {
        text(format!("» \"{}\"", testimonial.text)).size(15)
    } else {
        text(format!("\"{}\"", testimonial.text)).size(15)
    };

    Container::new(column![header, quote].spacing(10))
        .padding(16)
        .width(Length::Fill)
        .into()
}
