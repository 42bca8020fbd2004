use serde::{Deserialize, Serialize};

/// Campos editables de seguimiento de cliente dentro de una fila de reserva.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Opinion,
    Postventa,
    Experiencia,
    EstadoPostventa,
    Seguimiento,
}

impl FieldKind {
    pub const TODOS: [FieldKind; 5] = [
        FieldKind::Opinion,
        FieldKind::Postventa,
        FieldKind::Experiencia,
        FieldKind::EstadoPostventa,
        FieldKind::Seguimiento,
    ];

    /// Selector del control de este campo dentro de una fila.
    ///
    /// Los campos de texto libre aceptan input o textarea: el markup usa
    /// ambos según la página.
    pub fn selector(&self) -> &'static str {
        match self {
            FieldKind::Opinion => r#"select[name^="opinion_"]"#,
            FieldKind::Postventa => r#"select[name^="postventa_"]"#,
            FieldKind::EstadoPostventa => r#"select[name^="estado_postventa_"]"#,
            FieldKind::Experiencia => {
                r#"input[name^="experiencia_"], textarea[name^="experiencia_"]"#
            }
            FieldKind::Seguimiento => {
                r#"input[name^="seguimiento_"], textarea[name^="seguimiento_"]"#
            }
        }
    }
}

/// Instantánea efímera de los campos editables de una fila, construida en el
/// momento de guardar y descartada al resolver el request.
///
/// Solo llevan clave los campos cuyo control existe en la fila: un campo
/// ausente en el DOM se omite, no se manda con valor por defecto.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowSnapshot {
    pub reserva_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opinion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postventa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experiencia: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_postventa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seguimiento: Option<String>,
}

impl RowSnapshot {
    pub fn new(reserva_id: impl Into<String>) -> Self {
        Self {
            reserva_id: reserva_id.into(),
            opinion: None,
            postventa: None,
            experiencia: None,
            estado_postventa: None,
            seguimiento: None,
        }
    }

    pub fn set(&mut self, kind: FieldKind, value: String) {
        match kind {
            FieldKind::Opinion => self.opinion = Some(value),
            FieldKind::Postventa => self.postventa = Some(value),
            FieldKind::Experiencia => self.experiencia = Some(value),
            FieldKind::EstadoPostventa => self.estado_postventa = Some(value),
            FieldKind::Seguimiento => self.seguimiento = Some(value),
        }
    }

    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Opinion => self.opinion.as_deref(),
            FieldKind::Postventa => self.postventa.as_deref(),
            FieldKind::Experiencia => self.experiencia.as_deref(),
            FieldKind::EstadoPostventa => self.estado_postventa.as_deref(),
            FieldKind::Seguimiento => self.seguimiento.as_deref(),
        }
    }
}

/// Respuesta del endpoint de guardado de opinión/postventa
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateReservaResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Identificador de fila: sufijo tras el último '_' del atributo name
/// (p.ej. "estado_postventa_42" → "42").
pub fn reserva_id_from_name(name: &str) -> &str {
    name.rsplit('_').next().unwrap_or(name)
}
