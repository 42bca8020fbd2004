/// Ruta del endpoint de guardado de opinión/postventa
pub const UPDATE_OPINION_POSTVENTA_PATH: &str = "/api/update_reserva_opinion_postventa";

/// Marca visual de guardado correcto y su duración
pub const CSS_VALID: &str = "is-valid";
pub const VALID_FEEDBACK_MS: u32 = 1_000;

/// Marca visual de guardado fallido y su duración
pub const CSS_INVALID: &str = "is-invalid";
pub const INVALID_FEEDBACK_MS: u32 = 2_000;
