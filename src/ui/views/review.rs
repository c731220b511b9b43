use crate::app::LessonApp;
use crate::model::Page;
use crate::ui::layout::{hero, page_panel, section_card, two_button_row};
use egui::{Context, RichText};

pub fn ui_review(app: &mut LessonApp, ctx: &Context) {
    let mut nav: Option<Page> = None;

    page_panel(ctx, 780.0, |ui| {
        hero(
            ui,
            "Review",
            "A comprehensive summary of key concepts about memory to help you consolidate your learning.",
        );
        ui.add_space(8.0);

        let review = &app.content.review;

        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🧠").size(34.0));
            ui.label(RichText::new("Key Takeaways").strong().size(22.0));
            ui.label(RichText::new("Review these essential points about human memory").weak());
        });
        ui.add_space(10.0);

        for (i, section) in review.sections.iter().enumerate() {
            section_card(ui, |ui| {
                ui.label(
                    RichText::new(format!("{}. {}", i + 1, section.title))
                        .strong()
                        .size(16.0),
                );
                ui.add_space(4.0);
                for point in &section.points {
                    ui.label(format!("✔ {point}"));
                }
            });
            ui.add_space(8.0);
        }

        // Diagrama del modelo multialmacén
        section_card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&review.model_title).strong().size(16.0));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let total: f32 = ui.available_width();
                    ui.add_space((total - 420.0).max(0.0) / 2.0);
                    for (i, stage) in review.model_stages.iter().enumerate() {
                        if i > 0 {
                            ui.label(RichText::new("➡").weak());
                        }
                        ui.group(|ui| {
                            ui.set_width(110.0);
                            ui.vertical_centered(|ui| {
                                ui.label(RichText::new(stage).strong());
                            });
                        });
                    }
                });
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Sensory input · Attention & Rehearsal · Storage & Retrieval")
                        .weak()
                        .small(),
                );
            });
        });
        ui.add_space(8.0);

        // Cita de cierre
        section_card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&review.quote).italics());
                ui.add_space(6.0);
                ui.label(RichText::new(&review.motto).strong());
            });
        });

        ui.add_space(14.0);
        ui.vertical_centered(|ui| {
            let (teaching, practice) = two_button_row(
                ui,
                520.0,
                "📖 Review Teaching Materials",
                "🏆 Test Your Knowledge ➡",
            );
            if teaching {
                nav = Some(Page::Teaching);
            }
            if practice {
                nav = Some(Page::Practice);
            }
        });
    });

    if let Some(page) = nav {
        app.go_to(page);
    }
}
