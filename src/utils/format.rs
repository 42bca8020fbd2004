// ============================================================================
// FORMAT - Parseo y formateo numérico de los formularios
// ============================================================================
// Helpers hoja, sin estado. Replican la semántica tolerante de
// parseFloat/parseInt: toman el prefijo numérico y caen a 0 ante basura.

/// Float tolerante: acepta coma decimal, toma el prefijo numérico y
/// devuelve 0 para vacío o basura.
pub fn safe_float(valor: &str) -> f64 {
    let normalizado = valor.trim().replace(',', ".");
    prefijo_float(&normalizado).parse().unwrap_or(0.0)
}

/// Prefijo de `s` con forma `[+-]?digitos[.digitos]`
fn prefijo_float(s: &str) -> &str {
    let mut fin = 0;
    let mut punto_visto = false;
    for (i, c) in s.char_indices() {
        match c {
            '+' | '-' if i == 0 => fin = i + 1,
            '.' if !punto_visto => {
                punto_visto = true;
                fin = i + 1;
            }
            c if c.is_ascii_digit() => fin = i + 1,
            _ => break,
        }
    }
    &s[..fin]
}

/// Formatea un entero con separador de miles '.' (estilo es-CL)
pub fn formato_miles(num: i64) -> String {
    let digitos = num.unsigned_abs().to_string();
    let mut grupos = Vec::new();
    let bytes = digitos.as_bytes();
    let mut fin = bytes.len();
    while fin > 3 {
        grupos.push(&digitos[fin - 3..fin]);
        fin -= 3;
    }
    grupos.push(&digitos[..fin]);
    grupos.reverse();

    let cuerpo = grupos.join(".");
    if num < 0 {
        format!("-{}", cuerpo)
    } else {
        cuerpo
    }
}

/// Inverso de `formato_miles`: descarta puntos y cualquier carácter no
/// numérico, con la semántica de prefijo de parseInt; 0 ante basura.
pub fn parse_miles(texto: &str) -> i64 {
    let filtrado: String = texto
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    let (signo, resto) = match filtrado.strip_prefix('-') {
        Some(resto) => (-1, resto),
        None => (1, filtrado.as_str()),
    };
    let digitos: String = resto.chars().take_while(|c| c.is_ascii_digit()).collect();
    digitos.parse::<i64>().map(|n| signo * n).unwrap_or(0)
}
