//! Twelve-month forecast charts and the slots that own them.
//!
//! A [`ChartSlot`] holds at most one live [`ForecastChart`]. Binding a new
//! chart releases the previous instance before the replacement goes live, so
//! two instances never coexist on one slot. The two slots (profit, revenue)
//! are independent of each other.

use finsnap_core::format::format_currency;
use finsnap_core::protocol::{FORECAST_MONTHS, MONTH_LABELS};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// One prepared chart instance: dataset points, bounds, and axis labels are
/// computed once per bind, not per frame.
#[derive(Debug, Clone)]
pub struct ForecastChart {
    title: String,
    kind: ChartKind,
    values: [f64; FORECAST_MONTHS],
    points: Vec<(f64, f64)>,
    y_bounds: [f64; 2],
}

impl ForecastChart {
    pub fn new(title: &str, kind: ChartKind, values: &[f64; FORECAST_MONTHS]) -> Self {
        let points: Vec<(f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(month, &value)| (month as f64, value))
            .collect();

        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let padding = (max - min).abs().max(1.0) * 0.1;

        Self {
            title: title.to_string(),
            kind,
            values: *values,
            points,
            y_bounds: [min - padding, max + padding],
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn values(&self) -> &[f64; FORECAST_MONTHS] {
        &self.values
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        match self.kind {
            ChartKind::Line => self.render_line(frame, area, accent),
            ChartKind::Bar => self.render_bars(frame, area, accent),
        }
    }

    fn render_line(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let dataset = Dataset::default()
            .name(self.title.clone())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(accent))
            .data(&self.points);

        let x_labels = vec![
            Span::raw(MONTH_LABELS[0]),
            Span::raw(MONTH_LABELS[FORECAST_MONTHS / 2]),
            Span::raw(MONTH_LABELS[FORECAST_MONTHS - 1]),
        ];

        let [y_min, y_max] = self.y_bounds;
        let y_labels = vec![
            Span::raw(format_currency(y_min)),
            Span::raw(format_currency((y_min + y_max) / 2.0)),
            Span::raw(format_currency(y_max)),
        ];

        let x_axis = Axis::default()
            .title("Month".dark_gray())
            .bounds([0.0, (FORECAST_MONTHS - 1) as f64])
            .labels(x_labels);

        let y_axis = Axis::default().bounds(self.y_bounds).labels(y_labels);

        let chart = Chart::new(vec![dataset])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone()),
            )
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }

    /// Bar heights for the fixed month axis. `BarChart` cannot draw below
    /// the baseline, so when any month is negative the whole series is
    /// offset by its minimum; relative heights stay truthful and the text
    /// labels carry the signed currency.
    fn bar_values(&self) -> Vec<u64> {
        let floor = self.values.iter().cloned().fold(0.0_f64, f64::min);
        self.values.iter().map(|v| (v - floor) as u64).collect()
    }

    fn render_bars(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let inner_width = area.width.saturating_sub(2);
        let bar_width = (inner_width / FORECAST_MONTHS as u16).saturating_sub(1).max(1);

        let bars: Vec<Bar> = self
            .bar_values()
            .into_iter()
            .zip(self.values.iter())
            .zip(MONTH_LABELS.iter())
            .map(|((height, &value), label)| {
                Bar::default()
                    .value(height)
                    .label(Line::from(*label))
                    .text_value(format_currency(value))
                    .style(Style::default().fg(accent))
            })
            .collect();

        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(self.title.clone()),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(1);

        frame.render_widget(chart, area);
    }
}

/// A named rendering target holding at most one live chart instance.
#[derive(Debug, Default)]
pub struct ChartSlot {
    instance: Option<ForecastChart>,
    generation: u64,
}

impl ChartSlot {
    /// Replace the slot's instance. The previous instance is released in
    /// full before the replacement is stored.
    pub fn bind(&mut self, chart: ForecastChart) {
        // release the previous instance before the replacement goes live
        self.instance = None;
        self.generation += 1;
        self.instance = Some(chart);
    }

    /// Release the slot's instance, if any.
    pub fn dispose(&mut self) {
        self.instance = None;
    }

    pub fn is_bound(&self) -> bool {
        self.instance.is_some()
    }

    pub fn instance(&self) -> Option<&ForecastChart> {
        self.instance.as_ref()
    }

    /// Monotonically increasing bind tag; bumps on every `bind`.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        if let Some(chart) = &self.instance {
            chart.render(frame, area, accent);
        }
    }
}

/// The two fixed chart slots of the dashboard.
#[derive(Debug, Default)]
pub struct ChartSlots {
    pub profit: ChartSlot,
    pub revenue: ChartSlot,
}
