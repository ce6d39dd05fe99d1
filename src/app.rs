use std::sync::Arc;

use eframe::egui::{self, Align, Layout, ScrollArea, Ui};

use crate::data::model::PenguinDataset;
use crate::state::{AppState, Card};
use crate::ui::{panels, plot, table};

/// Height of a card in the two-per-row grid.
const CARD_HEIGHT: f32 = 380.0;
/// The scatter card gets a taller row of its own.
const SCATTER_HEIGHT: f32 = 640.0;
/// Space taken by a card's title row and separator.
const CARD_CHROME: f32 = 34.0;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinExplorerApp {
    pub state: AppState,
}

impl PenguinExplorerApp {
    pub fn new(dataset: PenguinDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for PenguinExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Right side panel: inputs ----
        egui::SidePanel::right("sidebar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(panels::SIDEBAR_BG))
            .default_width(260.0)
            .resizable(true)
            .show_animated(ctx, self.state.sidebar_open, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: cards ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.full_screen {
            Some(card) => {
                let height = ui.available_height();
                card_frame(ui, &mut self.state, card, height);
            }
            None => dashboard(ui, &mut self.state),
        });
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Two cards per row, then the scatter plot across the full width.
fn dashboard(ui: &mut Ui, state: &mut AppState) {
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (left, right) in [
                (Card::FilteredTable, Card::FullGrid),
                (Card::BillHistogram, Card::SpeciesChart),
            ] {
                ui.columns(2, |cols: &mut [Ui]| {
                    card_frame(&mut cols[0], state, left, CARD_HEIGHT);
                    card_frame(&mut cols[1], state, right, CARD_HEIGHT);
                });
                ui.add_space(8.0);
            }
            card_frame(ui, state, Card::Scatter, SCATTER_HEIGHT);
        });
}

fn card_frame(ui: &mut Ui, state: &mut AppState, card: Card, height: f32) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            ui.strong(card.title());
            let rows = match card {
                Card::FilteredTable => Some(state.filtered_view().len()),
                Card::FullGrid => Some(state.dataset.len()),
                _ => None,
            };
            if let Some(rows) = rows {
                ui.weak(format!("{rows} rows"));
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                let expanded = state.full_screen == Some(card);
                let (label, hint) = if expanded {
                    ("Close", "Back to the dashboard")
                } else {
                    ("Expand", "Show this card on its own")
                };
                if ui.small_button(label).on_hover_text(hint).clicked() {
                    state.toggle_full_screen(card);
                }
            });
        });
        ui.separator();

        let body = egui::vec2(ui.available_width(), (height - CARD_CHROME).max(120.0));
        ui.allocate_ui(body, |ui: &mut Ui| card_body(ui, state, card));
    });
}

fn card_body(ui: &mut Ui, state: &mut AppState, card: Card) {
    match card {
        Card::FilteredTable => {
            let view = state.filtered_view();
            let generation = state.filtered_generation();
            table::data_table(ui, "filtered_table", &view, generation, &mut state.filtered_table);
        }
        Card::FullGrid => {
            // The dataset never changes, so its generation is constant.
            let dataset = Arc::clone(&state.dataset);
            table::data_table(ui, "full_grid", &dataset, 0, &mut state.full_grid);
        }
        Card::BillHistogram => plot::bill_histogram(ui, state),
        Card::SpeciesChart => plot::species_chart(ui, state),
        Card::Scatter => plot::scatter(ui, state),
    }
}
