use echo_api::{HeaderRow, RecordBlock, View};
use egui::{CentralPanel, Color32, Grid, ScrollArea, TextEdit, TextStyle};

use crate::Gui;

const NO_REQUESTS: &str = echo_api::domain::view::NO_REQUESTS_PLACEHOLDER;

pub fn content_panel(gui: &mut Gui, ctx: &egui::Context) {
    CentralPanel::default().show(ctx, |ui| match gui.request_view.render().as_ref() {
        View::Error(message) => {
            ui.colored_label(Color32::RED, format!("Error: {}", message));
        }
        View::Empty => {
            ui.label(NO_REQUESTS);
        }
        View::Records(blocks) => {
            ScrollArea::vertical().show(ui, |ui| {
                for (index, block) in blocks.iter().enumerate() {
                    record_block(ui, index, block);
                    ui.add_space(8.0);
                }
            });
        }
    });
}

fn record_block(ui: &mut egui::Ui, index: usize, block: &RecordBlock) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.strong(&block.timestamp);
            if let Some(id) = block.id {
                ui.weak(format!("#{}", id));
            }
        });
        let mut body = block.body.as_str();
        ui.add(
            TextEdit::multiline(&mut body)
                .code_editor()
                .desired_rows(1)
                .desired_width(f32::INFINITY)
                .font(TextStyle::Monospace),
        );
        ui.label(egui::RichText::new("Headers").strong());
        ui.columns(2, |columns| {
            header_column(&mut columns[0], (index, "left"), &block.headers.left);
            header_column(&mut columns[1], (index, "right"), &block.headers.right);
        });
    });
}

fn header_column(ui: &mut egui::Ui, id: (usize, &str), rows: &[HeaderRow]) {
    Grid::new(id)
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            for row in rows {
                ui.strong(&row.name);
                ui.label(&row.value);
                ui.end_row();
            }
        });
}
