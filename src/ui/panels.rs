use eframe::egui::{self, Color32, DragValue, RichText, ScrollArea, Slider, Ui};

use crate::data::model::{Attribute, Species};
use crate::data::summary::MAX_BINS;
use crate::state::{AppState, SEABORN_BINS_RANGE};

/// Background of the sidebar.
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0xD2, 0xE7, 0xF2);

const REPO_URL: &str = "https://github.com/AdriannaWebb/cintel-02-data/tree/main";

// ---------------------------------------------------------------------------
// Right side panel – input controls
// ---------------------------------------------------------------------------

/// Render the sidebar controls.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Sidebar");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute selector ----
            ui.strong("Choose an attribute");
            let current = state.selection.attribute;
            egui::ComboBox::from_id_salt("selected_attribute")
                .selected_text(current.name())
                .show_ui(ui, |ui: &mut Ui| {
                    for attr in Attribute::ALL {
                        ui.selectable_value(&mut state.selection.attribute, attr, attr.name());
                    }
                });
            ui.add_space(8.0);

            // ---- Bin counts ----
            ui.strong("Number of Plotly Histogram Bins");
            ui.add(
                DragValue::new(&mut state.selection.plotly_bins)
                    .range(1..=MAX_BINS as u32)
                    .speed(1.0),
            );
            ui.add_space(8.0);

            ui.strong("Number of Seaborn Histogram Bins");
            ui.add(Slider::new(&mut state.selection.seaborn_bins, SEABORN_BINS_RANGE));
            ui.add_space(8.0);

            // ---- Species filter ----
            let n_selected = state.selection.species.len();
            ui.strong(format!(
                "Filter by Species  ({n_selected}/{})",
                Species::ALL.len()
            ));
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all();
                }
                if ui.small_button("None").clicked() {
                    state.select_none();
                }
            });
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for species in Species::ALL {
                    let mut checked = state.selection.species.contains(&species);
                    let text = RichText::new(species.label()).color(state.colors.color_for(species));
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_species(species);
                    }
                }
            });

            ui.separator();
            ui.hyperlink_to("GitHub Repository", REPO_URL);
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Webb of Data");

        ui.separator();

        let visible = state.filtered_view().len();
        ui.label(format!(
            "{} penguins loaded, {visible} in the filtered table",
            state.dataset.len()
        ));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui
                .selectable_label(state.sidebar_open, "Sidebar")
                .clicked()
            {
                state.sidebar_open = !state.sidebar_open;
            }
        });
    });
}
