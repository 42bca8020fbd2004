// ============================================================================
// AUTOSAVE - Guardado automático de opinión/postventa por fila
// ============================================================================
// Cada edición dispara un request independiente: no hay dedupe, cancelación
// ni orden garantizado entre guardados solapados; la respuesta de un guardado
// lento puede llegar después de la de uno posterior y pisar la marca visual.
// No se reintenta: ante un fallo el usuario vuelve a editar el campo.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::dom::{add_class, alert, control_value, delegate, remove_class};
use crate::models::reserva::{reserva_id_from_name, FieldKind, RowSnapshot};
use crate::services::ApiClient;
use crate::utils::constants::{CSS_INVALID, CSS_VALID, INVALID_FEEDBACK_MS, VALID_FEEDBACK_MS};

/// Evento que dispara el guardado de un control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    /// `change` burbujea hasta body
    Change,
    /// `blur` no burbujea: se observa en fase de captura
    Blur,
}

/// Registro explícito (evento, selector): todos despachan al mismo handler.
pub struct FieldBinding {
    pub kind: FieldKind,
    pub event: TriggerEvent,
    pub selector: &'static str,
}

pub static BINDINGS: [FieldBinding; 5] = [
    FieldBinding {
        kind: FieldKind::Opinion,
        event: TriggerEvent::Change,
        selector: r#"select[name^="opinion_"]"#,
    },
    FieldBinding {
        kind: FieldKind::Postventa,
        event: TriggerEvent::Change,
        selector: r#"select[name^="postventa_"]"#,
    },
    FieldBinding {
        kind: FieldKind::EstadoPostventa,
        event: TriggerEvent::Change,
        selector: r#"select[name^="estado_postventa_"]"#,
    },
    FieldBinding {
        kind: FieldKind::Experiencia,
        event: TriggerEvent::Blur,
        selector: r#"input[name^="experiencia_"]"#,
    },
    FieldBinding {
        kind: FieldKind::Seguimiento,
        event: TriggerEvent::Blur,
        selector: r#"input[name^="seguimiento_"]"#,
    },
];

/// Registra la delegación de eventos del puente de autosave sobre body.
pub fn register_autosave(body: &HtmlElement) -> Result<(), JsValue> {
    delegate(body, "change", false, |target| {
        dispatch(TriggerEvent::Change, &target)
    })?;
    delegate(body, "blur", true, |target| {
        dispatch(TriggerEvent::Blur, &target)
    })?;

    log::info!("🔌 [AUTOSAVE] Puente de opinión/postventa registrado");
    Ok(())
}

fn dispatch(event: TriggerEvent, target: &Element) {
    let reconocido = BINDINGS
        .iter()
        .filter(|binding| binding.event == event)
        .any(|binding| target.matches(binding.selector).unwrap_or(false));

    if reconocido {
        submit_row_update(target);
    }
}

/// Construye la instantánea de la fila del control y la envía al backend,
/// reflejando el resultado sobre el propio control.
pub fn submit_row_update(trigger: &Element) {
    let name = match trigger.get_attribute("name") {
        Some(name) => name,
        None => return,
    };
    let reserva_id = reserva_id_from_name(&name).to_string();

    let row = trigger.closest("tr").ok().flatten();
    let snapshot = capture_row_snapshot(reserva_id, row.as_ref());

    let trigger = trigger.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.update_reserva_opinion_postventa(&snapshot).await {
            Ok(resp) if resp.success => {
                log::info!("✅ [AUTOSAVE] Reserva {} guardada", snapshot.reserva_id);
                flash(&trigger, CSS_VALID, VALID_FEEDBACK_MS);
            }
            Ok(resp) => {
                log::warn!(
                    "⚠️ [AUTOSAVE] Backend rechazó la reserva {}: {:?}",
                    snapshot.reserva_id,
                    resp.message
                );
                flash(&trigger, CSS_INVALID, INVALID_FEEDBACK_MS);
                alert(&format!(
                    "Error al guardar: {}",
                    resp.message.unwrap_or_default()
                ));
            }
            Err(e) => {
                log::error!(
                    "❌ [AUTOSAVE] Error de red guardando la reserva {}: {}",
                    snapshot.reserva_id,
                    e
                );
                flash(&trigger, CSS_INVALID, INVALID_FEEDBACK_MS);
                alert("Error de red al guardar.");
            }
        }
    });
}

/// Instantánea con los valores vivos de todos los campos hermanos de la fila.
/// Sin fila contenedora, la instantánea lleva solo el identificador.
pub fn capture_row_snapshot(reserva_id: String, row: Option<&Element>) -> RowSnapshot {
    let mut snapshot = RowSnapshot::new(reserva_id);

    if let Some(row) = row {
        for kind in FieldKind::TODOS {
            if let Ok(Some(control)) = row.query_selector(kind.selector()) {
                if let Some(valor) = control_value(&control) {
                    snapshot.set(kind, valor);
                }
            }
        }
    }

    snapshot
}

/// Marca visual transitoria sobre el control que disparó el guardado.
fn flash(element: &Element, css_class: &'static str, duration_ms: u32) {
    let _ = add_class(element, css_class);

    let element = element.clone();
    Timeout::new(duration_ms, move || {
        let _ = remove_class(&element, css_class);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hay_un_binding_por_campo() {
        for kind in FieldKind::TODOS {
            assert_eq!(
                BINDINGS.iter().filter(|b| b.kind == kind).count(),
                1,
                "{:?} debe tener exactamente un binding",
                kind
            );
        }
    }

    #[test]
    fn los_selects_guardan_en_change_y_los_inputs_en_blur() {
        for binding in &BINDINGS {
            if binding.selector.starts_with("select") {
                assert_eq!(binding.event, TriggerEvent::Change);
            } else {
                assert!(binding.selector.starts_with("input"));
                assert_eq!(binding.event, TriggerEvent::Blur);
            }
        }
    }

    #[test]
    fn los_selectores_de_disparo_usan_el_prefijo_del_campo() {
        // El selector de disparo debe coincidir con el selector de fila del
        // mismo campo (el de fila además acepta textarea para texto libre)
        for binding in &BINDINGS {
            let row_selector = binding.kind.selector();
            assert!(
                row_selector.contains(binding.selector),
                "{} no aparece en {}",
                binding.selector,
                row_selector
            );
        }
    }
}
