use crate::app::LessonApp;
use crate::ui::layout::{hero, page_panel, section_card};
use egui::{Context, Grid, RichText};

pub fn ui_acknowledgements(app: &mut LessonApp, ctx: &Context) {
    page_panel(ctx, 680.0, |ui| {
        hero(
            ui,
            "Acknowledgements",
            "Recognizing the contributions to this educational resource.",
        );
        ui.add_space(8.0);

        let ack = &app.content.acknowledgements;

        // Presentadora
        section_card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🎓").size(30.0));
                ui.label(RichText::new("Presented By").strong().size(16.0));
                ui.add_space(4.0);
                ui.label(RichText::new(&ack.presenter).strong().size(20.0));
                ui.add_space(4.0);
                for role in &ack.roles {
                    ui.label(RichText::new(role).weak());
                }
            });
        });
        ui.add_space(8.0);

        // Datos del curso
        section_card(ui, |ui| {
            ui.label(RichText::new("📖 Course Information").strong().size(16.0));
            ui.add_space(6.0);
            Grid::new("course_info_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for fact in &ack.course {
                        ui.label(RichText::new(&fact.label).weak());
                        ui.label(RichText::new(&fact.value).strong());
                        ui.end_row();
                    }
                });
        });
        ui.add_space(8.0);

        // Referencias
        section_card(ui, |ui| {
            ui.label(RichText::new("References").strong().size(16.0));
            ui.label(RichText::new("Academic sources used in this presentation").weak().small());
            ui.add_space(4.0);
            for reference in &ack.references {
                ui.label(format!("• {reference}"));
            }
        });
        ui.add_space(8.0);

        // Gracias
        section_card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("💗").size(26.0));
                ui.label(RichText::new("Thank You").strong().size(18.0));
                ui.add_space(4.0);
                ui.label(&ack.thanks);
            });
        });
    });
}
