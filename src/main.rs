use memory_lesson::LessonApp;

const APP_TITLE: &str = "Understanding Memory · Unit 3 · Grade 11";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 780.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(LessonApp::new()))),
    )
}

// Entrada para el build WASM: engancha el runner al canvas de la página
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("sin window")
            .document()
            .expect("sin document");
        let canvas = document
            .get_element_by_id("lesson_canvas")
            .expect("falta el elemento #lesson_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("#lesson_canvas no es un canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(LessonApp::new()))),
            )
            .await
            .expect("no se pudo arrancar el runner web");
    });
}
