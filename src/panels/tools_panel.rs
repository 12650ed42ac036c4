use crate::PaintApp;
use crate::command::Command;
use crate::components::tool_button::ToolButton;
use crate::tools::{MAX_THICKNESS, MIN_THICKNESS, PALETTE, ToolKind};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let settings = *app.settings();
    let mut commands = Vec::new();
    let mut save_requested = false;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            // Tool selection buttons
            for tool in ToolKind::ALL {
                let button = ToolButton::new(tool, settings.tool() == tool);
                if button.show(ui).clicked() {
                    commands.push(Command::SelectTool(tool));
                }
            }
            ui.separator();

            if ui.selectable_label(settings.fill(), "Fill").clicked() {
                commands.push(Command::ToggleFill);
            }
            ui.separator();

            // Palette swatches plus a free color picker
            for (name, color) in PALETTE {
                let text = egui::RichText::new(name).color(color);
                if ui.selectable_label(settings.color() == color, text).clicked() {
                    commands.push(Command::SelectColor(color));
                }
            }
            let mut color = settings.color();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                commands.push(Command::SelectColor(color));
            }
            ui.separator();

            if ui.button("Erase").clicked() {
                commands.push(Command::Erase);
            }
            if ui.button("Save Image").clicked() {
                save_requested = true;
            }
            if ui.button("New Drawing").clicked() {
                commands.push(Command::NewDrawing);
            }
            ui.separator();

            ui.label("Thickness:");
            let mut thickness = settings.thickness();
            if ui
                .add(egui::Slider::new(&mut thickness, MIN_THICKNESS..=MAX_THICKNESS))
                .changed()
            {
                commands.push(Command::SetThickness(thickness));
            }
        });
    });

    let changed = !commands.is_empty();
    for command in commands {
        app.execute_command(command);
    }
    if save_requested {
        app.save_image();
    }
    if changed || save_requested {
        ctx.request_repaint();
    }
}
