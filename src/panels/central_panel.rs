use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let frame = egui::Frame::none().fill(egui::Color32::WHITE);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        // The canvas fills the remaining space
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());

        // Handle input before painting so the frame shows the latest model
        if app.handle_canvas_input(&response) {
            ctx.request_repaint();
        }

        app.render_canvas(&painter, response.rect);
    });
}
