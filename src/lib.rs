// ============================================================================
// GESTIÓN DE CASOS - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// Arquitectura:
// - Views: copian el FormView al DOM (sin lógica)
// - ViewModels: FormView + Orquestador (reglas del formulario)
// - Services: SOLO comunicación API (trait CasosApi)
// - State: Rc<RefCell> + notificaciones + tickets de generación
// - Models: estructuras compartidas con el backend
// ============================================================================
// Todo lo que no toca el navegador compila y se prueba de forma nativa.
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    // Variable estática global para mantener la instancia de App
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        // Inicializar panic hook para mejor debugging
        console_error_panic_hook::set_once();

        if let Some(level) = CONFIG.log_level() {
            wasm_logger::init(wasm_logger::Config::new(level));
        }
        log::info!("🚀 Gestión de Casos - Rust + WASM ({})", CONFIG.environment);
        log::info!("✓ API Base URL: {}", CONFIG.api_base_url());

        let app = App::new()?;
        app.render()?;
        app.verificar_backend();

        APP.with(|app_cell| {
            *app_cell.borrow_mut() = Some(app);
        });

        Ok(())
    }

    /// Re-render completo desde el estado actual
    pub fn rerender_app() {
        APP.with(|app_cell| match app_cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
        });
    }
}
