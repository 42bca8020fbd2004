// ============================================================================
// PENDIENTES - Conteo de reservas pendientes en control de gestión
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom::{get_element_by_id, query_selector_all, set_text_content};

/// Cuenta las filas pendientes y escribe el total en `#pendientes-js`.
/// Se ejecuta una sola vez al cargar la página.
pub fn init_pendientes(document: &Document) -> Result<(), JsValue> {
    let filas = query_selector_all(document, "table.table tbody tr")?;
    let pendientes = filas.iter().filter(|fila| fila_pendiente_dom(fila)).count();

    if let Some(contador) = get_element_by_id("pendientes-js") {
        set_text_content(&contador, &pendientes.to_string());
    }

    log::info!("📋 [PENDIENTES] {} reservas pendientes", pendientes);
    Ok(())
}

/// Las filas sin alguna de las tres celdas de estado no cuentan.
fn fila_pendiente_dom(fila: &Element) -> bool {
    let estado_pago = texto_celda(fila, "[data-estado-pago]");
    let venta_cobrada = texto_celda(fila, "[data-venta-cobrada]");
    let venta_emitida = texto_celda(fila, "[data-venta-emitida]");

    match (estado_pago, venta_cobrada, venta_emitida) {
        (Some(estado), Some(cobrada), Some(emitida)) => {
            fila_pendiente(&estado, &cobrada, &emitida)
        }
        _ => false,
    }
}

fn texto_celda(fila: &Element, selector: &str) -> Option<String> {
    fila.query_selector(selector).ok().flatten()?.text_content()
}

/// Una reserva está pendiente salvo que esté simultáneamente pagada,
/// cobrada y emitida.
pub fn fila_pendiente(estado_pago: &str, venta_cobrada: &str, venta_emitida: &str) -> bool {
    !(estado_pago.trim() == "Pagado"
        && venta_cobrada.trim() == "Cobrada"
        && venta_emitida.trim() == "Emitida")
}
