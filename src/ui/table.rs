use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::{Column, PenguinDataset};
use crate::state::TableState;

const ROW_HEIGHT: f32 = 18.0;
const HEADER_HEIGHT: f32 = 22.0;

// ---------------------------------------------------------------------------
// Data-frame style table
// ---------------------------------------------------------------------------

/// Render every row and column of `data` as a scrollable grid with
/// click-to-sort headers. `generation` identifies the version of `data` so
/// the sort order is only rebuilt when the rows or the sort key change.
pub fn data_table(
    ui: &mut Ui,
    id: &str,
    data: &PenguinDataset,
    generation: usize,
    table: &mut TableState,
) {
    if data.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("No rows match the current selection.");
        });
        return;
    }

    let sort = table.sort;
    let mut clicked = None;

    ui.push_id(id, |ui: &mut Ui| {
        let order = table.row_order(data, generation);
        let max_height = ui.available_height();

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(TableColumn::auto().at_least(60.0), Column::ALL.len())
            .min_scrolled_height(0.0)
            .max_scroll_height(max_height)
            .header(HEADER_HEIGHT, |mut header| {
                for column in Column::ALL {
                    header.col(|ui: &mut Ui| {
                        let arrow = match sort {
                            Some(key) if key.column == column && key.descending => " ⬇",
                            Some(key) if key.column == column => " ⬆",
                            _ => "",
                        };
                        let label = RichText::new(format!("{}{arrow}", column.name())).strong();
                        if ui.add(egui::Button::new(label).frame(false)).clicked() {
                            clicked = Some(column);
                        }
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, order.len(), |mut row| {
                    let obs = &data.observations[order[row.index()]];
                    for column in Column::ALL {
                        row.col(|ui: &mut Ui| {
                            ui.label(obs.cell(column));
                        });
                    }
                });
            });
    });

    if let Some(column) = clicked {
        table.click_header(column);
    }
}
