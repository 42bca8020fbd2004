//! Tests de integración sobre DOM real (requieren target wasm32:
//! `wasm-pack test --headless --firefox`).
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::Element;

use gestion_web::dom::control_value;
use gestion_web::views::capture_row_snapshot;

wasm_bindgen_test_configure!(run_in_browser);

fn fila_con(html: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let fila = document.create_element("tr").unwrap();
    fila.set_inner_html(html);
    fila
}

#[wasm_bindgen_test]
fn snapshot_incluye_solo_los_campos_presentes() {
    let fila = fila_con(
        r#"<td><select name="opinion_7"><option value="Buena" selected>Buena</option></select></td>
           <td><input name="experiencia_7" value="Todo perfecto"></td>"#,
    );

    let snapshot = capture_row_snapshot("7".to_string(), Some(&fila));

    assert_eq!(snapshot.reserva_id, "7");
    assert_eq!(snapshot.opinion.as_deref(), Some("Buena"));
    assert_eq!(snapshot.experiencia.as_deref(), Some("Todo perfecto"));
    assert!(snapshot.postventa.is_none());
    assert!(snapshot.estado_postventa.is_none());
    assert!(snapshot.seguimiento.is_none());
}

#[wasm_bindgen_test]
fn snapshot_toma_todos_los_hermanos_de_la_fila() {
    let fila = fila_con(
        r#"<td><select name="opinion_12"><option value="Mala" selected>Mala</option></select></td>
           <td><select name="postventa_12"><option value="Si" selected>Si</option></select></td>
           <td><select name="estado_postventa_12"><option value="Contactado" selected>Contactado</option></select></td>
           <td><input name="experiencia_12" value="Regular"></td>
           <td><textarea name="seguimiento_12">Llamar el lunes</textarea></td>"#,
    );

    let snapshot = capture_row_snapshot("12".to_string(), Some(&fila));

    assert_eq!(snapshot.opinion.as_deref(), Some("Mala"));
    assert_eq!(snapshot.postventa.as_deref(), Some("Si"));
    assert_eq!(snapshot.estado_postventa.as_deref(), Some("Contactado"));
    assert_eq!(snapshot.experiencia.as_deref(), Some("Regular"));
    assert_eq!(snapshot.seguimiento.as_deref(), Some("Llamar el lunes"));
}

#[wasm_bindgen_test]
fn snapshot_sin_fila_lleva_solo_el_identificador() {
    let snapshot = capture_row_snapshot("99".to_string(), None);

    assert_eq!(snapshot.reserva_id, "99");
    assert!(snapshot.opinion.is_none());
    assert!(snapshot.postventa.is_none());
    assert!(snapshot.experiencia.is_none());
    assert!(snapshot.estado_postventa.is_none());
    assert!(snapshot.seguimiento.is_none());
}

#[wasm_bindgen_test]
fn control_value_cubre_input_select_y_textarea() {
    let document = web_sys::window().unwrap().document().unwrap();

    let input = document.create_element("input").unwrap();
    input.set_attribute("value", "abc").unwrap();
    assert_eq!(control_value(&input).as_deref(), Some("abc"));

    let select = document.create_element("select").unwrap();
    select.set_inner_html(r#"<option value="x" selected>x</option>"#);
    assert_eq!(control_value(&select).as_deref(), Some("x"));

    let textarea = document.create_element("textarea").unwrap();
    textarea.set_inner_html("nota");
    assert_eq!(control_value(&textarea).as_deref(), Some("nota"));

    let div = document.create_element("div").unwrap();
    assert!(control_value(&div).is_none());
}
