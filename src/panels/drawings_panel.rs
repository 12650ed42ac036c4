use crate::PaintApp;

/// Lists committed drawings and the one being edited
pub fn drawings_panel(app: &PaintApp, ctx: &egui::Context) {
    egui::SidePanel::right("drawings_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Drawings");
            ui.separator();

            let document = app.document();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for drawing in document.committed() {
                    ui.label(format!("{}: {} shapes", drawing.name(), drawing.len()));
                }

                let active = document.active();
                ui.strong(format!("{} (editing): {} shapes", active.name(), active.len()));
            });

            ui.separator();
            ui.label(format!("Gesture: {}", app.gestures().state().name()));
        });
}
