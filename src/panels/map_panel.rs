use crate::MapApp;

pub fn map_panel(app: &mut MapApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (view, regions) = app.map_parts();
            if let Some((name, id)) = view.ui(ui, regions) {
                app.navigator_mut().navigate_to_details(&name, id.as_deref());
            }
        });
}
