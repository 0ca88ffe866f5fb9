use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Status};

// ---------------------------------------------------------------------------
// Left side panel – category filter
// ---------------------------------------------------------------------------

/// Render the category multi-select.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let observed = state.dataset.categories.clone();
    let header_text = format!("Categories  ({}/{})", state.selected.len(), observed.len());

    ui.heading("Filter");
    ui.separator();

    if observed.is_empty() {
        ui.label("No articles loaded.");
        return;
    }

    ui.strong(header_text);
    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for category in observed {
                let total = state.totals.get(&category).copied().unwrap_or(0);
                let text = RichText::new(format!("{}  ({total})", category.label()))
                    .color(state.colors.color_for(category));

                let mut checked = state.selected.contains(&category);
                if ui
                    .checkbox(&mut checked, text)
                    .on_hover_text(category.local_label())
                    .changed()
                {
                    state.set_selected(category, checked);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} articles loaded, {} visible",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        ui.separator();
        match &state.status {
            Status::Loaded(msg) => ui.label(RichText::new(msg).color(Color32::DARK_GREEN)),
            Status::Error(msg) => ui.label(RichText::new(msg).color(Color32::RED)),
        };
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Replace the dataset with a file picked by the user. On failure the current
/// dataset stays loaded and the error is shown in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open news table")
        .add_filter(
            "Supported files",
            &["xlsx", "xlsm", "xls", "xlsb", "ods", "csv", "json", "parquet", "pq"],
        )
        .add_filter("Spreadsheet", &["xlsx", "xlsm", "xls", "xlsb", "ods"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status = Status::Error(format!("Error: {e:#}"));
            }
        }
    }
}
