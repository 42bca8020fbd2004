// ============================================================================
// BALANCE MENSUAL - Formateo y recálculo de la tabla de balance
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::dom::{control_value, on_blur, on_input, query_selector_all, set_text_content};
use crate::models::balance::FilaBalance;
use crate::utils::format::{formato_miles, parse_miles};

/// Registra el formateo y recálculo en vivo de `#tabla-balance-mensual`.
///
/// Los inputs `.input-miles` se reformatean al cargar y al perder foco;
/// cada tecleo recalcula la fila que los contiene.
pub fn init_balance_mensual(document: &Document) -> Result<(), JsValue> {
    for input in query_selector_all(document, ".input-miles")? {
        if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
            formatear_input(html_input);
        }

        {
            let input_clone = input.clone();
            on_input(&input, move |_| {
                if let Ok(Some(fila)) = input_clone.closest("tr") {
                    actualizar_fila(&fila);
                }
            })?;
        }

        {
            let input_clone = input.clone();
            on_blur(&input, move |_| {
                if let Some(html_input) = input_clone.dyn_ref::<HtmlInputElement>() {
                    formatear_input(html_input);
                }
                if let Ok(Some(fila)) = input_clone.closest("tr") {
                    actualizar_fila(&fila);
                }
            })?;
        }
    }

    let filas = query_selector_all(document, "#tabla-balance-mensual tbody tr")?;
    for fila in &filas {
        actualizar_fila(fila);
    }

    log::info!("📊 [BALANCE] Tabla inicializada ({} filas)", filas.len());
    Ok(())
}

/// Recalcula ganancia y margen de una fila a partir de sus celdas vivas.
fn actualizar_fila(fila: &Element) {
    let balance = leer_fila(fila);

    if let Ok(Some(celda)) = fila.query_selector(".ganancia-perdida") {
        set_text_content(&celda, &format!("${}", formato_miles(balance.ganancia())));
    }
    if let Ok(Some(celda)) = fila.query_selector(".margen-porcentaje") {
        set_text_content(&celda, &format!("{:.1}%", balance.margen_porcentaje()));
    }
}

fn leer_fila(fila: &Element) -> FilaBalance {
    FilaBalance {
        ingresos_agentes: leer_celda_texto(fila, ".ingresos-agentes"),
        ingresos_externos: leer_celda_input(fila, ".ingresos-externos"),
        egresos_comision: leer_celda_texto(fila, ".egresos-comision"),
        egresos_administracion: leer_celda_input(fila, ".egresos-administracion"),
        otros_egresos: leer_celda_input(fila, ".otros-egresos"),
    }
}

/// Monto de una celda de solo lectura (texto con '$')
fn leer_celda_texto(fila: &Element, selector: &str) -> i64 {
    fila.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|celda| celda.text_content())
        .map(|texto| parse_miles(&texto.replace('$', "")))
        .unwrap_or(0)
}

/// Monto de una celda editable
fn leer_celda_input(fila: &Element, selector: &str) -> i64 {
    fila.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|celda| control_value(&celda))
        .map(|valor| parse_miles(&valor))
        .unwrap_or(0)
}

fn formatear_input(input: &HtmlInputElement) {
    input.set_value(&formato_miles(parse_miles(&input.value())));
}
