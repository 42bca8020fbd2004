// ============================================================================
// RESERVA FORM - Cálculo automático de importes del formulario de reservas
// ============================================================================
// Misma fórmula que aplica el backend al guardar; aquí solo se refleja en
// vivo mientras el usuario escribe.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::dom::{control_value, get_element_by_id, on_input};
use crate::models::venta::{calcular_reserva, ImportesReserva};
use crate::utils::format::safe_float;

/// Campos de importe que disparan el recálculo
const CAMPOS_IMPORTE: [&str; 9] = [
    "precio_venta_total",
    "hotel_neto",
    "vuelo_neto",
    "traslado_neto",
    "seguro_neto",
    "circuito_neto",
    "crucero_neto",
    "excursion_neto",
    "paquete_neto",
];

/// Registra el recálculo en vivo del formulario de reservas.
///
/// El porcentaje de comisión del ejecutivo es un parámetro de
/// inicialización: lo inyecta la plantilla, no vive en estado global.
pub fn init_reserva_form(porcentaje_comision_ejecutivo: f64) -> Result<(), JsValue> {
    for id in CAMPOS_IMPORTE {
        if let Some(campo) = get_element_by_id(id) {
            on_input(&campo, move |_| recalcular(porcentaje_comision_ejecutivo))?;
        }
    }

    log::info!(
        "🧮 [RESERVA] Formulario inicializado (comisión ejecutivo: {:.0}%)",
        porcentaje_comision_ejecutivo * 100.0
    );
    Ok(())
}

fn recalcular(porcentaje_comision_ejecutivo: f64) {
    let importes = leer_importes();
    let calculo = calcular_reserva(&importes, porcentaje_comision_ejecutivo);

    escribir_campo("precio_venta_neto", calculo.precio_venta_neto);
    escribir_campo("ganancia_total", calculo.ganancia_total);
    escribir_campo("comision_ejecutivo", calculo.comision_ejecutivo);
    escribir_campo("comision_agencia", calculo.comision_agencia);
}

fn leer_importes() -> ImportesReserva {
    ImportesReserva {
        precio_venta_total: leer_campo("precio_venta_total"),
        hotel_neto: leer_campo("hotel_neto"),
        vuelo_neto: leer_campo("vuelo_neto"),
        traslado_neto: leer_campo("traslado_neto"),
        seguro_neto: leer_campo("seguro_neto"),
        circuito_neto: leer_campo("circuito_neto"),
        crucero_neto: leer_campo("crucero_neto"),
        excursion_neto: leer_campo("excursion_neto"),
        paquete_neto: leer_campo("paquete_neto"),
    }
}

fn leer_campo(id: &str) -> f64 {
    get_element_by_id(id)
        .and_then(|campo| control_value(&campo))
        .map(|valor| safe_float(&valor))
        .unwrap_or(0.0)
}

fn escribir_campo(id: &str, valor: f64) {
    if let Some(campo) = get_element_by_id(id) {
        if let Some(input) = campo.dyn_ref::<HtmlInputElement>() {
            input.set_value(&format!("{:.2}", valor));
        }
    }
}
