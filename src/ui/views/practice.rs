use crate::app::LessonApp;
use crate::engine::Response;
use crate::model::{Question, QuizKind};
use crate::ui::layout::{answer_button_pair, hero, page_panel, section_card};
use egui::{Button, Color32, Context, RichText, SelectableLabel, TextEdit, Ui};

pub fn ui_practice(app: &mut LessonApp, ctx: &Context) {
    page_panel(ctx, 780.0, |ui| {
        hero(
            ui,
            "Practice Exercises",
            "Test your understanding with Multiple Choice, True/False, and Fill-in-the-Blank exercises.",
        );
        ui.add_space(8.0);

        // Pestañas de quiz: cada una con su sesión independiente
        let infos = app.practice_tab_infos();
        let mut switch: Option<QuizKind> = None;
        ui.horizontal(|ui| {
            for info in &infos {
                if ui
                    .selectable_label(app.practice_tab == info.kind, info.label())
                    .clicked()
                {
                    switch = Some(info.kind);
                }
            }
        });
        if let Some(kind) = switch {
            app.switch_quiz(kind);
        }
        ui.add_space(10.0);

        // Aviso transitorio (envío incompleto o nota)
        if !app.message.is_empty() {
            ui.label(RichText::new(&app.message).strong().color(Color32::KHAKI));
            ui.add_space(8.0);
        }

        // Banner de nota congelada + Try Again
        let frozen_score = app.active_session().score();
        if let Some(score) = frozen_score {
            let mut try_again = false;
            section_card(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🏆").size(26.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new("Your Score").strong());
                        ui.label(RichText::new(format!("{score} correct")).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        try_again = ui.button("⟲ Try Again").clicked();
                    });
                });
            });
            if try_again {
                app.reset_active();
            }
            ui.add_space(10.0);
        }

        match app.practice_tab {
            QuizKind::MultipleChoice => choice_cards(app, ui),
            QuizKind::TrueFalse => true_false_cards(app, ui),
            QuizKind::Completion => completion_cards(app, ui),
        }

        if !app.active_session().is_submitted() {
            ui.add_space(8.0);
            let submit = ui
                .add_sized([ui.available_width(), 40.0], Button::new("Submit Answers"))
                .clicked();
            if submit {
                app.submit_active();
            }
        }
    });
}

fn choice_cards(app: &mut LessonApp, ui: &mut Ui) {
    let mut clicked: Option<(usize, usize)> = None;
    {
        let session = app.session(QuizKind::MultipleChoice);
        let submitted = session.is_submitted();

        for (qi, question) in session.questions().iter().enumerate() {
            let Question::Choice(q) = question else { continue };
            let selected = match session.response(qi) {
                Some(Response::Choice(i)) => Some(*i),
                _ => None,
            };

            section_card(ui, |ui| {
                ui.label(RichText::new(format!("{}. {}", qi + 1, q.question)).strong());
                ui.add_space(6.0);
                for (oi, option) in q.options.iter().enumerate() {
                    let letter = (b'A' + oi as u8) as char;
                    let is_selected = selected == Some(oi);
                    let mut label = format!("{letter}.  {option}");
                    if submitted {
                        if oi == q.correct_index {
                            label.push_str("  ✅");
                        } else if is_selected {
                            label.push_str("  ❌");
                        }
                    }
                    let response = ui
                        .add_enabled_ui(!submitted, |ui| {
                            ui.add(SelectableLabel::new(is_selected, label))
                        })
                        .inner;
                    if response.clicked() {
                        clicked = Some((qi, oi));
                    }
                }
                if submitted {
                    ui.add_space(6.0);
                    ui.label(RichText::new(&q.explanation).weak().italics());
                }
            });
            ui.add_space(8.0);
        }
    }
    if let Some((qi, oi)) = clicked {
        app.answer_choice(qi, oi);
    }
}

fn true_false_cards(app: &mut LessonApp, ui: &mut Ui) {
    let mut clicked: Option<(usize, bool)> = None;
    {
        let session = app.session(QuizKind::TrueFalse);
        let submitted = session.is_submitted();
        let panel_width = ui.available_width() - 24.0;

        for (qi, question) in session.questions().iter().enumerate() {
            let Question::Boolean(q) = question else { continue };
            let selected = match session.response(qi) {
                Some(Response::Boolean(v)) => Some(*v),
                _ => None,
            };

            section_card(ui, |ui| {
                ui.label(RichText::new(format!("{}. {}", qi + 1, q.statement)).strong());
                ui.add_space(6.0);

                let mut true_label = "TRUE".to_string();
                let mut false_label = "FALSE".to_string();
                if submitted {
                    if q.is_true {
                        true_label.push_str("  ✅");
                    } else {
                        false_label.push_str("  ✅");
                    }
                    if selected != Some(q.is_true) {
                        match selected {
                            Some(true) => true_label.push_str("  ❌"),
                            Some(false) => false_label.push_str("  ❌"),
                            None => {}
                        }
                    }
                }

                let (t, f) = answer_button_pair(
                    ui,
                    panel_width,
                    (&true_label, selected == Some(true)),
                    (&false_label, selected == Some(false)),
                    !submitted,
                );
                if t {
                    clicked = Some((qi, true));
                }
                if f {
                    clicked = Some((qi, false));
                }

                if submitted {
                    ui.add_space(6.0);
                    ui.label(RichText::new(&q.explanation).weak().italics());
                }
            });
            ui.add_space(8.0);
        }
    }
    if let Some((qi, value)) = clicked {
        app.answer_true_false(qi, value);
    }
}

fn completion_cards(app: &mut LessonApp, ui: &mut Ui) {
    let session = app.session(QuizKind::Completion);
    let submitted = session.is_submitted();

    // Copias baratas para poder prestar los inputs como &mut más abajo
    let questions: Vec<_> = session
        .questions()
        .iter()
        .filter_map(|q| match q {
            Question::Completion(c) => Some(c.clone()),
            _ => None,
        })
        .collect();
    let corrects: Vec<Option<bool>> = (0..questions.len()).map(|i| session.is_correct(i)).collect();

    let mut changed: Option<usize> = None;
    for (qi, q) in questions.iter().enumerate() {
        section_card(ui, |ui| {
            ui.label(RichText::new(format!("{}. Fill in the blank:", qi + 1)).strong());
            if let Some(hint) = &q.hint {
                ui.label(RichText::new(format!("Hint: {hint}")).weak().small());
            }
            ui.add_space(6.0);

            let (before, after) = q.parts();
            ui.horizontal_wrapped(|ui| {
                ui.label(before);
                let edit = TextEdit::singleline(&mut app.completion_inputs[qi])
                    .desired_width(140.0)
                    .hint_text("...");
                let response = ui.add_enabled(!submitted, edit);
                if response.changed() {
                    changed = Some(qi);
                }
                ui.label(after);
            });

            if submitted {
                ui.add_space(6.0);
                match corrects[qi] {
                    Some(true) => {
                        ui.label(RichText::new("✅ Correct!").color(Color32::LIGHT_GREEN));
                    }
                    _ => {
                        ui.label(
                            RichText::new(format!("❌ The correct answer is: {}", q.answer))
                                .color(Color32::LIGHT_RED),
                        );
                    }
                }
            }
        });
        ui.add_space(8.0);
    }

    if let Some(qi) = changed {
        app.answer_text(qi);
    }
}
