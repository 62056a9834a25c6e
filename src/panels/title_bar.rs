use crate::{MapApp, Route};

pub fn title_bar(app: &mut MapApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let can_go_back = app.navigator().can_go_back();
            if ui.add_enabled(can_go_back, egui::Button::new("⬅ Back")).clicked() {
                app.navigator_mut().back();
            }
            ui.heading(app.navigator().current().title().to_owned());

            if matches!(app.navigator().current(), Route::Map) {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Reset view").clicked() {
                        app.map_view_mut().reset_view();
                    }
                });
            }
        });
    });
}
