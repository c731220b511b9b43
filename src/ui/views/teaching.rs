use crate::app::LessonApp;
use crate::model::{Page, TeachingTab};
use crate::ui::layout::{hero, page_panel, section_card};
use egui::{Color32, Context, RichText};

pub fn ui_teaching(app: &mut LessonApp, ctx: &Context) {
    let mut nav: Option<Page> = None;
    let mut switch_tab: Option<TeachingTab> = None;
    let mut toggle: Option<usize> = None;

    page_panel(ctx, 820.0, |ui| {
        hero(
            ui,
            "Teaching Materials",
            "Comprehensive learning resources covering Reading, Writing, Speaking, and Listening skills.",
        );
        ui.add_space(8.0);

        // Pestañas de destrezas
        ui.horizontal(|ui| {
            for tab in TeachingTab::ALL {
                if ui.selectable_label(app.teaching_tab == tab, tab.label()).clicked() {
                    switch_tab = Some(tab);
                }
            }
        });
        ui.add_space(10.0);

        let teaching = &app.content.teaching;
        match app.teaching_tab {
            TeachingTab::Reading => {
                ui.label(RichText::new(&teaching.reading_title).strong().size(20.0));
                ui.add_space(8.0);
                for section in &teaching.reading {
                    section_card(ui, |ui| {
                        ui.label(RichText::new(&section.heading).strong().size(16.0));
                        ui.add_space(4.0);
                        ui.label(&section.content);
                    });
                    ui.add_space(8.0);
                }
            }
            TeachingTab::Writing => {
                ui.label(RichText::new("Writing Exercises").strong().size(20.0));
                ui.add_space(8.0);
                for (i, prompt) in teaching.writing.iter().enumerate() {
                    section_card(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&prompt.title).strong().size(16.0));
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(RichText::new(format!("{}", i + 1)).weak().size(22.0));
                                },
                            );
                        });
                        ui.label(RichText::new(format!("Target: {}", prompt.word_count)).weak().small());
                        ui.add_space(4.0);
                        ui.label(&prompt.prompt);
                    });
                    ui.add_space(8.0);
                }
            }
            TeachingTab::Speaking => {
                ui.label(RichText::new("Speaking Activities").strong().size(20.0));
                ui.add_space(8.0);
                for topic in &teaching.speaking {
                    section_card(ui, |ui| {
                        ui.label(RichText::new(format!("🎙 {}", topic.topic)).strong().size(16.0));
                        ui.add_space(4.0);
                        ui.label(&topic.prompt);
                        ui.add_space(6.0);
                        ui.label(RichText::new("SPEAKING TIPS:").weak().small());
                        for tip in &topic.tips {
                            ui.label(format!("✔ {tip}"));
                        }
                    });
                    ui.add_space(8.0);
                }
            }
            TeachingTab::Listening => {
                ui.label(RichText::new(&teaching.listening_title).strong().size(20.0));
                ui.label(RichText::new(&teaching.listening_intro).weak());
                ui.add_space(8.0);
                for (i, scenario) in teaching.listening.iter().enumerate() {
                    let revealed = app.is_scenario_revealed(i);
                    section_card(ui, |ui| {
                        ui.label(RichText::new(format!("Scenario {}", i + 1)).strong().size(16.0));
                        ui.add_space(4.0);
                        ui.label(RichText::new(format!("🎧 \"{}\"", scenario.text)).italics());
                        ui.add_space(6.0);
                        let button_label = if revealed { "Hide Answer" } else { "Reveal Answer" };
                        if ui.button(button_label).clicked() {
                            toggle = Some(i);
                        }
                        if revealed {
                            ui.add_space(4.0);
                            ui.label(
                                RichText::new(&scenario.answer)
                                    .strong()
                                    .color(Color32::LIGHT_GREEN),
                            );
                            ui.label(RichText::new(&scenario.explanation).weak());
                        }
                    });
                    ui.add_space(8.0);
                }
            }
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Ready to test your knowledge?").weak());
            if ui.button("Go to Practice Exercises ➡").clicked() {
                nav = Some(Page::Practice);
            }
        });
    });

    if let Some(tab) = switch_tab {
        app.teaching_tab = tab;
    }
    if let Some(i) = toggle {
        app.toggle_scenario(i);
    }
    if let Some(page) = nav {
        app.go_to(page);
    }
}
