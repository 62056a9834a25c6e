pub const UNKNOWN_COUNTRY: &str = "Unknown country";

/// What the details screen displays for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsContent {
    pub heading: String,
    /// Upper-cased region code, only when one was given
    pub code: Option<String>,
}

impl DetailsContent {
    pub fn new(name: Option<&str>, id: Option<&str>) -> Self {
        Self {
            heading: name.unwrap_or(UNKNOWN_COUNTRY).to_owned(),
            code: id.filter(|id| !id.is_empty()).map(str::to_uppercase),
        }
    }
}

pub fn details_panel(ctx: &egui::Context, content: &DetailsContent) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(egui::RichText::new(&content.heading).size(28.0).strong());
            if let Some(code) = &content.code {
                ui.add_space(12.0);
                ui.label(
                    egui::RichText::new(code)
                        .size(16.0)
                        .color(egui::Color32::from_gray(0x66)),
                );
            }
        });
    });
}
