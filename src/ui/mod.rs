pub mod layout;
pub mod views;

use crate::app::LessonApp;
use crate::model::Page;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for LessonApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Navegación superior y pie con el cambio de tema
        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por página a las funciones en views/
        match self.page {
            Page::Intro => views::intro::ui_intro(self, ctx),
            Page::Teaching => views::teaching::ui_teaching(self, ctx),
            Page::Practice => views::practice::ui_practice(self, ctx),
            Page::Review => views::review::ui_review(self, ctx),
            Page::Acknowledgements => views::acknowledgements::ui_acknowledgements(self, ctx),
        }
    }
}
