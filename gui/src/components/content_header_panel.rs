use egui::TopBottomPanel;

use crate::Gui;

pub fn content_header_panel(gui: &mut Gui, ctx: &egui::Context) {
    TopBottomPanel::top("top_panel").show(ctx, |ui| {
        ui.heading("HTTP Echo Server");
        ui.horizontal(|ui| {
            if ui.button("Refresh").clicked() {
                gui.request_view.refresh();
            }
            match gui.request_view.last_updated() {
                Some(at) => ui.label(format!("Last updated {}", at.format("%-I:%M:%S %p"))),
                None => ui.label("Waiting for first poll..."),
            };
        });
    });
}
