// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use gloo_net::http::Request;

use crate::config::CONFIG;
use crate::models::reserva::{RowSnapshot, UpdateReservaResponse};
use crate::utils::constants::UPDATE_OPINION_POSTVENTA_PATH;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
        }
    }

    /// Guardar los campos de opinión/postventa de una reserva.
    ///
    /// Cualquier respuesta con cuerpo JSON parseable se entrega al caller,
    /// sea cual sea el status HTTP; fallo de red o de parseo es Err.
    pub async fn update_reserva_opinion_postventa(
        &self,
        snapshot: &RowSnapshot,
    ) -> Result<UpdateReservaResponse, String> {
        let url = format!("{}{}", self.base_url, UPDATE_OPINION_POSTVENTA_PATH);

        log::info!(
            "📝 Guardando opinión/postventa de la reserva: {}",
            snapshot.reserva_id
        );

        let response = Request::post(&url)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(snapshot)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        response
            .json::<UpdateReservaResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
