use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Labelled value with a horizontal bar, used as a slider in the form.
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: f64,
    unit: &'a str,
    min: f64,
    max: f64,
    color: Color,
    precision: usize,
    focused: bool,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: f64, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            color: Theme::FG,
            precision: 1,
            focused: false,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn ratio(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let value_str = format!(
            "{:.prec$}{}",
            self.value,
            self.unit,
            prec = self.precision
        );
        let label = if self.focused {
            format!("< {} > ", value_str)
        } else {
            format!("{} ", value_str)
        };
        let label_width = label.chars().count() as u16;

        let value_style = if self.focused {
            Theme::highlight()
        } else {
            Style::default().fg(self.color)
        };
        Paragraph::new(Line::from(vec![Span::styled(label, value_style)])).render(inner, buf);

        // Bar to the right of the label
        if inner.width > label_width + 2 {
            let bar_area = Rect {
                x: inner.x + label_width,
                y: inner.y,
                width: inner.width - label_width,
                height: 1,
            };

            let filled = (bar_area.width as f64 * self.ratio()) as u16;

            for x in bar_area.x..bar_area.x + bar_area.width {
                let ch = if x < bar_area.x + filled { '█' } else { '░' };
                buf[(x, bar_area.y)].set_char(ch).set_fg(self.color);
            }
        }
    }
}

pub fn moisture_slider(title: &str, percent: i64) -> GaugeWidget<'_> {
    let value = percent as f64;
    GaugeWidget::new(title, value, "%")
        .range(0.0, 100.0)
        .precision(0)
        .color(Theme::moisture_color(value))
}

pub fn temperature_slider(title: &str, temp_c: f64, min: f64, max: f64) -> GaugeWidget<'_> {
    GaugeWidget::new(title, temp_c, "°C")
        .range(min, max)
        .precision(1)
        .color(Theme::temp_color(temp_c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_is_bounded() {
        assert_eq!(GaugeWidget::new("t", 150.0, "").ratio(), 1.0);
        assert_eq!(GaugeWidget::new("t", -5.0, "").ratio(), 0.0);
        let mid = GaugeWidget::new("t", 17.5, "").range(-10.0, 45.0).ratio();
        assert!((mid - 0.5).abs() < 1e-9);
    }

    #[test]
    fn renders_value_and_bar() {
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);
        moisture_slider("Soil", 50).render(area, &mut buf);

        let row: String = (0..30).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("50%"));
        assert!(row.contains('█'));
        assert!(row.contains('░'));
    }
}
