use crate::app::{FormField, FormState, TEMP_MAX_C, TEMP_MIN_C};
use crate::models::{PlantType, PotSize, Recommendation, Season, Sunlight};
use crate::ui::components::{moisture_slider, temperature_slider, InputWidget, SelectWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

fn index_of<T: PartialEq>(options: &[T], value: &T) -> usize {
    options.iter().position(|o| o == value).unwrap_or(0)
}

/// The single screen of the advisor: input form on the left, result on the right.
pub struct AdvisorScreen<'a> {
    pub form: &'a FormState,
    pub recommendation: Option<&'a Recommendation>,
    pub error_message: Option<&'a str>,
    pub status_message: Option<&'a str>,
    pub backend_url: &'a str,
    pub submitting: bool,
}

impl<'a> AdvisorScreen<'a> {
    pub fn new(form: &'a FormState, backend_url: &'a str) -> Self {
        Self {
            form,
            recommendation: None,
            error_message: None,
            status_message: None,
            backend_url,
            submitting: false,
        }
    }

    pub fn with_result(
        mut self,
        recommendation: Option<&'a Recommendation>,
        error_message: Option<&'a str>,
    ) -> Self {
        self.recommendation = recommendation;
        self.error_message = error_message;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>, submitting: bool) -> Self {
        self.status_message = status;
        self.submitting = submitting;
        self
    }
}

impl Widget for AdvisorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(23),   // Form and results (7 fields * 3 lines + borders)
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Plant Watering Advisor", Theme::title()),
            Span::styled(format!(" - {}", self.backend_url), Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);

        self.render_form(content[0], buf);
        self.render_result(content[1], buf);
        self.render_status(chunks[2], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Field ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Adjust ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Edit/Submit ", Theme::nav_label()),
            Span::styled("[Ctrl+R]", Theme::nav_key()),
            Span::styled("Submit ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl AdvisorScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Inputs")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let constraints: Vec<Constraint> = FormField::all()
            .iter()
            .map(|_| Constraint::Length(3))
            .collect();

        let field_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let inputs = &self.form.inputs;

        for (i, field) in FormField::all().iter().enumerate() {
            let focused = *field == self.form.focused_field;
            let field_area = field_areas[i];

            match field {
                FormField::SoilMoisture => {
                    moisture_slider(field.label(), inputs.soil_moisture)
                        .focused(focused)
                        .render(field_area, buf);
                }
                FormField::PlantType => {
                    SelectWidget::new(
                        field.label(),
                        PlantType::NAMES,
                        index_of(PlantType::ALL, &inputs.plant_type),
                    )
                    .focused(focused)
                    .render(field_area, buf);
                }
                FormField::PotSize => {
                    SelectWidget::new(
                        field.label(),
                        PotSize::NAMES,
                        index_of(PotSize::ALL, &inputs.pot_size),
                    )
                    .focused(focused)
                    .render(field_area, buf);
                }
                FormField::Sunlight => {
                    SelectWidget::new(
                        field.label(),
                        Sunlight::NAMES,
                        index_of(Sunlight::ALL, &inputs.sunlight),
                    )
                    .focused(focused)
                    .render(field_area, buf);
                }
                FormField::Temperature => {
                    if focused && self.form.editing {
                        InputWidget::new(field.label(), &self.form.edit_buffer)
                            .focused(true)
                            .render(field_area, buf);
                    } else {
                        temperature_slider(
                            field.label(),
                            inputs.temperature_c,
                            TEMP_MIN_C,
                            TEMP_MAX_C,
                        )
                        .focused(focused)
                        .render(field_area, buf);
                    }
                }
                FormField::Season => {
                    SelectWidget::new(
                        field.label(),
                        Season::NAMES,
                        index_of(Season::ALL, &inputs.season),
                    )
                    .focused(focused)
                    .render(field_area, buf);
                }
                FormField::Submit => {
                    let (style, border) = if focused {
                        (Theme::selected(), Theme::border_focused())
                    } else {
                        (Theme::normal(), Theme::border())
                    };
                    let label = if self.submitting {
                        "Submitting..."
                    } else {
                        field.label()
                    };
                    let button = Block::default()
                        .borders(Borders::ALL)
                        .border_style(border);
                    Paragraph::new(Span::styled(label, style))
                        .block(button)
                        .render(field_area, buf);
                }
            }
        }
    }

    #[allow(clippy::vec_init_then_push)]
    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Recommendation")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if let Some(message) = self.error_message {
            let para = Paragraph::new(Span::styled(message, Theme::error()))
                .wrap(Wrap { trim: true });
            para.render(inner, buf);
            return;
        }

        let rec = match self.recommendation {
            Some(r) => r,
            None => {
                let para = Paragraph::new(Span::styled(
                    "Fill in the form and submit to get a recommendation",
                    Theme::dim(),
                ));
                para.render(inner, buf);
                return;
            }
        };

        let mut lines = Vec::new();

        let decision_style = if rec.should_water_today {
            Theme::success()
        } else {
            Theme::warning()
        };
        lines.push(Line::from(vec![
            Span::styled("Should water today? ", Theme::dim()),
            Span::styled(rec.decision_label(), decision_style),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Recommended volume (ml): ", Theme::dim()),
            Span::styled(rec.recommended_volume_ml.to_string(), Theme::highlight()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Frequency (days): ", Theme::dim()),
            Span::styled(
                rec.recommended_frequency_days.to_string(),
                Theme::highlight(),
            ),
        ]));
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![Span::styled(
            "Why these recommendations? (Rules fired)",
            Theme::header(),
        )]));
        for rule in &rec.fired_rules {
            lines.push(Line::from(vec![Span::styled(
                format!("• {}", rule),
                Theme::normal(),
            )]));
        }
        lines.push(Line::from(vec![]));

        lines.push(Line::from(vec![Span::styled("Tips", Theme::header())]));
        for tip in &rec.tips {
            lines.push(Line::from(vec![Span::styled(
                format!("• {}", tip),
                Theme::normal(),
            )]));
        }

        let para = Paragraph::new(lines).wrap(Wrap { trim: true });
        para.render(inner, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let line = match self.status_message {
            Some(msg) => Line::from(Span::styled(msg, Theme::success())),
            None => Line::from(Span::styled(
                "Disclaimer: simple heuristics, not professional horticulture advice.",
                Theme::dim(),
            )),
        };
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_form_and_placeholder() {
        let form = FormState::new(Config::default().form.to_inputs());
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(&form, "http://127.0.0.1:8000").render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Plant Watering Advisor"));
        assert!(text.contains("succulent"));
        assert!(text.contains("Fill in the form"));
    }

    #[test]
    fn renders_recommendation() {
        let form = FormState::new(Config::default().form.to_inputs());
        let rec = Recommendation {
            should_water_today: true,
            recommended_volume_ml: 450,
            recommended_frequency_days: 1,
            tips: vec!["Check drainage".into()],
            fired_rules: vec!["Base: leafy".into()],
        };
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(&form, "http://127.0.0.1:8000")
            .with_result(Some(&rec), None)
            .render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains("Should water today? Yes"));
        assert!(text.contains("450"));
        assert!(text.contains("Base: leafy"));
        assert!(text.contains("Check drainage"));
    }

    #[test]
    fn renders_backend_error() {
        let form = FormState::new(Config::default().form.to_inputs());
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(&form, "http://127.0.0.1:8000")
            .with_result(None, Some("Backend error 422: bad"))
            .render(area, &mut buf);

        assert!(screen_text(&buf).contains("Backend error 422"));
    }
}
