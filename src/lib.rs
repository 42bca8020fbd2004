// ============================================================================
// GESTIÓN WEB - COMPORTAMIENTOS DE PÁGINA EN RUST PURO (WASM)
// ============================================================================
// Las páginas las renderiza el servidor; este módulo solo engancha
// comportamientos sobre el DOM existente:
// - Views: lógica de UI sobre el DOM renderizado
// - Services: SOLO comunicación API
// - Models: estructuras compartidas con el backend
// El DOM es la única fuente de verdad: no se cachea estado entre eventos.
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if CONFIG.enable_logging {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Gestión Web - frontend iniciado");

    let app = App::new()?;
    app.attach()
}

/// Inicializa el recálculo automático del formulario de reservas.
///
/// El porcentaje de comisión del ejecutivo se inyecta desde la plantilla
/// como parámetro; si la plantilla no lo pasa se usa el valor por defecto
/// de configuración.
#[wasm_bindgen]
pub fn init_reserva_form(porcentaje_comision_ejecutivo: Option<f64>) -> Result<(), JsValue> {
    let porcentaje =
        porcentaje_comision_ejecutivo.unwrap_or(CONFIG.porcentaje_comision_defecto);
    views::reserva_form::init_reserva_form(porcentaje)
}
