use crate::app::LessonApp;
use crate::model::{Page, StoreFacts};
use crate::ui::layout::{page_panel, section_card, two_button_row};
use egui::{Context, RichText, Ui};

pub fn ui_intro(app: &mut LessonApp, ctx: &Context) {
    let mut nav: Option<Page> = None;

    page_panel(ctx, 860.0, |ui| {
        let intro = &app.content.intro;

        // Hero
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&intro.title).strong().size(34.0));
            ui.add_space(6.0);
            ui.label(format!("Presented by {}", intro.presenter));
            ui.label(RichText::new(&intro.school).weak());
            ui.add_space(10.0);
            ui.label(RichText::new(&intro.blurb).italics());
            ui.add_space(14.0);
            let (learn, practice) =
                two_button_row(ui, 480.0, "📖 Start Learning", "✏ Practice Exercises");
            if learn {
                nav = Some(Page::Teaching);
            }
            if practice {
                nav = Some(Page::Practice);
            }
        });

        ui.add_space(18.0);
        ui.separator();

        // ¿Qué es la memoria? Tres significados
        section_heading(ui, "What is Memory?", "Memory can be understood in three different ways");
        ui.columns(intro.meanings.len(), |cols| {
            for (col, meaning) in cols.iter_mut().zip(&intro.meanings) {
                section_card(col, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(&meaning.icon).size(26.0));
                        ui.label(RichText::new(&meaning.title).strong());
                        ui.add_space(4.0);
                        ui.label(RichText::new(&meaning.body).weak());
                    });
                });
            }
        });

        ui.add_space(18.0);

        // Tres tipos de memoria
        section_heading(
            ui,
            "Three Types of Memory",
            "Understanding how our brain categorizes and stores different kinds of information",
        );
        ui.columns(intro.memory_kinds.len(), |cols| {
            for (col, kind) in cols.iter_mut().zip(&intro.memory_kinds) {
                section_card(col, |ui| {
                    ui.label(RichText::new(&kind.icon).size(26.0));
                    ui.label(RichText::new(&kind.title).strong().size(16.0));
                    ui.label(RichText::new(&kind.description).weak());
                    ui.add_space(6.0);
                    ui.label(RichText::new("EXAMPLES:").weak().small());
                    for example in &kind.examples {
                        ui.label(format!("• {example}"));
                    }
                });
            }
        });

        ui.add_space(18.0);

        // STM vs LTM
        section_heading(
            ui,
            "Short-Term vs Long-Term Memory",
            "Based on psychology, memory is classified into two major kinds",
        );
        ui.columns(2, |cols| {
            store_card(&mut cols[0], &intro.short_term);
            store_card(&mut cols[1], &intro.long_term);
        });

        ui.add_space(18.0);

        // Por qué es esencial
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Why is Memory Essential?").strong().size(22.0));
            ui.add_space(6.0);
            ui.label(RichText::new(&intro.essential).size(15.0));
            ui.add_space(6.0);
            ui.label(RichText::new(format!("\"{}\"", intro.motto)).italics().strong());
            ui.add_space(12.0);
            if ui.button("🏆 Test Your Knowledge ➡").clicked() {
                nav = Some(Page::Practice);
            }
        });
    });

    if let Some(page) = nav {
        app.go_to(page);
    }
}

fn section_heading(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(title).strong().size(22.0));
        ui.label(RichText::new(subtitle).weak());
    });
    ui.add_space(10.0);
}

fn store_card(ui: &mut Ui, facts: &StoreFacts) {
    section_card(ui, |ui| {
        ui.label(RichText::new(&facts.title).strong().size(16.0));
        ui.add_space(6.0);
        fact_row(ui, "Duration", &facts.duration);
        fact_row(ui, "Capacity", &facts.capacity);
        fact_row(ui, "Function", &facts.function);
        fact_row(ui, &facts.extra_label, &facts.extra);
    });
}

fn fact_row(ui: &mut Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).strong().small());
    ui.label(RichText::new(value).weak());
    ui.add_space(4.0);
}
