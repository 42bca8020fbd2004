// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Para listeners en elementos del DOM: cuando el elemento se destruye, el
//   navegador limpia los listeners asociados, por lo que closure.forget() es
//   seguro para listeners locales.
// - Los listeners delegados sobre body se registran UNA sola vez al arrancar
//   la app; no hay riesgo de acumulación.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, FocusEvent, InputEvent};

/// Listener delegado: se registra sobre `target` (normalmente body) y entrega
/// al handler el elemento que originó el evento. `capture` permite observar
/// eventos que no burbujean (p.ej. blur).
pub fn delegate<F>(
    target: &EventTarget,
    event_type: &str,
    capture: bool,
    mut handler: F,
) -> Result<(), JsValue>
where
    F: FnMut(Element) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            handler(element);
        }
    }) as Box<dyn FnMut(Event)>);

    target.add_event_listener_with_callback_and_bool(
        event_type,
        closure.as_ref().unchecked_ref(),
        capture,
    )?;
    // closure.forget() mantiene el closure vivo durante toda la vida de la página
    closure.forget();
    Ok(())
}

/// Helper para crear input handler simple
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear blur handler simple
pub fn on_blur<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(FocusEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(FocusEvent)>);
    element.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
