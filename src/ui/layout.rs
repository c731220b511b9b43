use crate::app::LessonApp;
use crate::model::Page;
use egui::{CentralPanel, Context, Frame, Margin, RichText, ScrollArea, SelectableLabel, Ui, Visuals};

pub fn top_panel(app: &mut LessonApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("🧠 Memory").strong().size(18.0));
            ui.label(RichText::new("Unit 3 · Grade 11").weak().small());
            ui.separator();

            let mut nav = None;
            for page in Page::ALL {
                let label = format!("{} {}", page.icon(), page.label());
                if ui.selectable_label(app.page == page, label).clicked() {
                    nav = Some(page);
                }
            }
            if let Some(page) = nav {
                app.go_to(page);
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("© 2024 Memory Learning Platform · Grade 11 · Unit 3")
                    .weak()
                    .small(),
            );
            // ----------- BOTONES DE TEMA -----------
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            });
        });
    });
}

/// Panel de página: columna centrada con scroll y anchura máxima.
pub fn page_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical().show(ui, |ui| {
            let w = ui.available_width().min(max_width);
            let side = ((ui.available_width() - w) / 2.0).max(0.0);
            ui.horizontal_top(|ui| {
                ui.add_space(side);
                ui.vertical(|ui| {
                    ui.set_width(w);
                    inner(ui);
                });
            });
            ui.add_space(24.0);
        });
    });
}

/// Cabecera de página: título grande + subtítulo.
pub fn hero(ui: &mut Ui, title: &str, subtitle: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(title).strong().size(28.0));
    ui.label(RichText::new(subtitle).weak().size(15.0));
    ui.add_space(8.0);
    ui.separator();
}

/// Tarjeta con borde y margen interior, al estilo de las cards de la web.
pub fn section_card(ui: &mut Ui, inner: impl FnOnce(&mut Ui)) {
    Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui);
        });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], egui::Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], egui::Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Fila de dos botones con estado de selección (p. ej. TRUE / FALSE).
/// `enabled == false` bloquea ambos sin ocultar la selección.
pub fn answer_button_pair(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
    enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled_ui(enabled, |ui| {
                ui.add_sized([btn_w, 36.0], SelectableLabel::new(left.1, left.0))
            })
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(enabled, |ui| {
                ui.add_sized([btn_w, 36.0], SelectableLabel::new(right.1, right.0))
            })
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
