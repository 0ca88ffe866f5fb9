use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, panels, table};

const TITLE: &str = "News Classification – Lampung Timur 2023";
const DESCRIPTION: &str = "Articles are grouped into categories by keyword matching on the \
headline. Below: the article table, the overall category distribution, and the category \
share per month.";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BeritaPandaApp {
    pub state: AppState,
}

impl BeritaPandaApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for BeritaPandaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: category filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    ui.heading(RichText::new(TITLE).size(22.0).strong());
                    ui.label(DESCRIPTION);
                    ui.add_space(8.0);

                    ui.heading("News articles");
                    table::article_table(ui, &self.state);
                    ui.add_space(12.0);

                    ui.heading("Category distribution");
                    charts::pie_chart(ui, &self.state);
                    ui.add_space(12.0);

                    ui.heading("Category share per month");
                    charts::monthly_bar_chart(ui, &self.state);
                });
        });
    }
}
