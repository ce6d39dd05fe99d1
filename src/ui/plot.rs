use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, Points};

use crate::color::marker_for;
use crate::data::model::Attribute;
use crate::state::AppState;

const BAR_COLOR: Color32 = Color32::from_rgb(0x63, 0x6E, 0xFA);
const SEABORN_COLOR: Color32 = Color32::from_rgb(0x4C, 0x72, 0xB0);

// ---------------------------------------------------------------------------
// Interactive bill-length histogram
// ---------------------------------------------------------------------------

/// Bill length of the full dataset in the user-chosen number of bins.
pub fn bill_histogram(ui: &mut Ui, state: &mut AppState) {
    let hist = state.bill_histogram();

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(hist.bin_center(i), count as f64)
                .width(hist.bin_width)
                .fill(BAR_COLOR)
        })
        .collect();

    let chart = BarChart::new(bars)
        .name(format!("{} (n = {})", Attribute::BillLength.name(), hist.total()))
        .color(BAR_COLOR)
        .highlight(true)
        .element_formatter(Box::new(|bar, _chart| {
            format!("{:.2}: {}", bar.argument, bar.value)
        }));

    Plot::new("bill_histogram")
        .x_axis_label(Attribute::BillLength.name())
        .y_axis_label("count")
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Static species-count chart
// ---------------------------------------------------------------------------

/// Count per species as a fixed, non-interactive bar chart.
pub fn species_chart(ui: &mut Ui, state: &mut AppState) {
    let counts = state.species_chart();

    let names: Vec<String> = counts.iter().map(|c| c.species.to_string()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            Bar::new(i as f64, c.count as f64)
                .name(c.species.label())
                .width(0.8)
                .fill(SEABORN_COLOR)
        })
        .collect();

    let chart = BarChart::new(bars).color(SEABORN_COLOR);

    Plot::new("species_chart")
        .x_axis_label("species")
        .y_axis_label("Count")
        .include_y(0.0)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show_x(false)
        .show_y(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

// ---------------------------------------------------------------------------
// Interactive scatter
// ---------------------------------------------------------------------------

/// Bill length vs body mass, coloured by species with one marker per sex.
/// Hovering a point shows its island.
pub fn scatter(ui: &mut Ui, state: &mut AppState) {
    let colors = state.colors.clone();
    let islands = state.scatter_islands();
    let series = state.scatter();

    let layers: Vec<Points> = series
        .iter()
        .map(|s| {
            let pts: Vec<[f64; 2]> = s.points.iter().map(|p| [p.x, p.y]).collect();
            Points::new(pts)
                .name(s.name())
                .color(colors.color_for(s.species))
                .shape(marker_for(s.sex))
                .filled(true)
                .radius(3.0)
        })
        .collect();

    let x_name = Attribute::BillLength.name();
    let y_name = Attribute::BodyMass.name();

    Plot::new("bill_vs_mass")
        .legend(Legend::default())
        .x_axis_label(x_name)
        .y_axis_label(y_name)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |name: &str, value: &PlotPoint| {
            match islands.get(name, value.x, value.y) {
                Some(island) => format!(
                    "{island}\n{name}\n{x_name}={}\n{y_name}={}",
                    value.x, value.y
                ),
                None => format!("{x_name}={:.1}\n{y_name}={:.0}", value.x, value.y),
            }
        })
        .show(ui, |plot_ui| {
            for layer in layers {
                plot_ui.points(layer);
            }
        });
}
