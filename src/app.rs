// ============================================================================
// APP - Wiring de comportamientos sobre la página actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{document, get_element_by_id};
use crate::views;

/// Punto de montaje de los comportamientos de página.
///
/// No renderiza nada: detecta qué secciones existen en el DOM servido
/// y registra los listeners que correspondan.
pub struct App {
    document: Document,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
        Ok(Self { document })
    }

    /// Registra los comportamientos que apliquen a la página actual.
    pub fn attach(&self) -> Result<(), JsValue> {
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("No body"))?;

        // El puente de autosave se registra siempre: en páginas sin campos
        // de opinión/postventa simplemente nunca dispara.
        views::autosave::register_autosave(&body)?;

        if get_element_by_id("tabla-balance-mensual").is_some() {
            views::balance::init_balance_mensual(&self.document)?;
        }

        if get_element_by_id("pendientes-js").is_some() {
            views::pendientes::init_pendientes(&self.document)?;
        }

        Ok(())
    }
}
