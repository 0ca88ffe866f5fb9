use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const TABLE_HEIGHT: f32 = 320.0;
const ROW_HEIGHT: f32 = 20.0;

/// Render the visible articles: row number, every source column, category.
pub fn article_table(ui: &mut Ui, state: &AppState) {
    let dataset = &state.dataset;
    let columns = &dataset.column_names;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .max_scroll_height(TABLE_HEIGHT)
        .column(Column::auto().at_least(32.0))
        .columns(Column::auto().at_least(60.0).clip(true), columns.len())
        .column(Column::remainder().at_least(120.0))
        .header(ROW_HEIGHT, |mut header| {
            header.col(|ui| {
                ui.strong("#");
            });
            for col in columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
            header.col(|ui| {
                ui.strong("Category");
            });
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let idx = state.visible_indices[row.index()];
                let article = &dataset.articles[idx];

                row.col(|ui| {
                    ui.label((idx + 1).to_string());
                });
                for col in columns {
                    let text = article
                        .fields
                        .get(col)
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    row.col(|ui| {
                        ui.label(text);
                    });
                }
                row.col(|ui| {
                    let color = state.colors.color_for(article.category);
                    ui.label(RichText::new(article.category.label()).color(color))
                        .on_hover_text(article.category.local_label());
                });
            });
        });
}
