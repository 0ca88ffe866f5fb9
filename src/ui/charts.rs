use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Polygon, Text};

use crate::data::aggregate::distribution_shares;
use crate::data::category::Category;
use crate::state::AppState;

const PIE_HEIGHT: f32 = 360.0;
const BAR_HEIGHT: f32 = 400.0;
/// Angle of the first wedge's leading edge, counter-clockwise from +x.
const PIE_START_DEGREES: f64 = 140.0;
/// Arc resolution: points per full turn.
const ARC_STEPS: usize = 120;
const BAR_WIDTH: f64 = 0.6;

// ---------------------------------------------------------------------------
// Pie geometry
// ---------------------------------------------------------------------------

/// One slice of the pie, angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Wedge {
    pub category: Category,
    pub percent: f64,
    pub start: f64,
    pub end: f64,
}

impl Wedge {
    /// Angle through the middle of the wedge, where labels go.
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Closed outline: centre, then the arc on the unit circle.
    pub fn outline(&self) -> Vec<[f64; 2]> {
        let sweep = self.end - self.start;
        let steps = ((sweep / TAU) * ARC_STEPS as f64).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for i in 0..=steps {
            let a = self.start + sweep * i as f64 / steps as f64;
            points.push([a.cos(), a.sin()]);
        }
        points
    }
}

/// Lay out wedges counter-clockwise from `start_degrees`, one per share.
pub fn pie_wedges(shares: &[(Category, f64)], start_degrees: f64) -> Vec<Wedge> {
    let mut angle = start_degrees.to_radians();
    shares
        .iter()
        .map(|&(category, percent)| {
            let start = angle;
            angle += TAU * percent / 100.0;
            Wedge {
                category,
                percent,
                start,
                end: angle,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Pie chart – category distribution
// ---------------------------------------------------------------------------

/// Render the share of visible articles per category.
pub fn pie_chart(ui: &mut Ui, state: &AppState) {
    let shares = distribution_shares(&state.distribution);
    if shares.is_empty() {
        ui.label("No articles match the selected categories.");
        return;
    }

    Plot::new("category_pie")
        .height(PIE_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(-1.4)
        .include_x(1.4)
        .include_y(-1.3)
        .include_y(1.3)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for wedge in pie_wedges(&shares, PIE_START_DEGREES) {
                let color = state.colors.color_for(wedge.category);
                plot_ui.polygon(
                    Polygon::new(wedge.outline())
                        .name(wedge.category.label())
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = wedge.mid();
                plot_ui.text(Text::new(
                    PlotPoint::new(0.6 * mid.cos(), 0.6 * mid.sin()),
                    format!("{:.1}%", wedge.percent),
                ));
                plot_ui.text(Text::new(
                    PlotPoint::new(1.15 * mid.cos(), 1.15 * mid.sin()),
                    wedge.category.label(),
                ));
            }
        });
}

// ---------------------------------------------------------------------------
// Stacked bar chart – category share per month
// ---------------------------------------------------------------------------

/// Label for an x-axis grid mark; only whole positions inside the month
/// range get a label.
pub fn month_axis_label(months: &[String], value: f64) -> String {
    if value.fract() != 0.0 || value < 0.0 {
        return String::new();
    }
    months.get(value as usize).cloned().unwrap_or_default()
}

/// Render one stacked bar per month, one segment per category.
pub fn monthly_bar_chart(ui: &mut Ui, state: &AppState) {
    let monthly = &state.monthly;
    if monthly.is_empty() {
        ui.label("No articles with a month match the selected categories.");
        return;
    }

    let months: Vec<_> = monthly.months().collect();
    let month_labels: Vec<String> = months.iter().map(|m| m.to_string()).collect();

    let mut charts: Vec<BarChart> = Vec::with_capacity(monthly.categories().len());
    for &category in monthly.categories() {
        let bars: Vec<Bar> = months
            .iter()
            .enumerate()
            .map(|(x, month)| {
                let percent = monthly.percent(month, category).unwrap_or(0.0);
                Bar::new(x as f64, percent)
                    .width(BAR_WIDTH)
                    .name(format!("{month} – {}", category.label()))
            })
            .collect();

        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(category.label())
            .color(state.colors.color_for(category))
            .stack_on(&below);
        charts.push(chart);
    }

    Plot::new("monthly_bars")
        .height(BAR_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Month")
        .y_axis_label("Percentage (%)")
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark, _range| month_axis_label(&month_labels, mark.value))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
