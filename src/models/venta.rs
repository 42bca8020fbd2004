/// Importes capturados en el formulario de reservas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImportesReserva {
    pub precio_venta_total: f64,
    pub hotel_neto: f64,
    pub vuelo_neto: f64,
    pub traslado_neto: f64,
    pub seguro_neto: f64,
    pub circuito_neto: f64,
    pub crucero_neto: f64,
    pub excursion_neto: f64,
    pub paquete_neto: f64,
}

impl ImportesReserva {
    /// Precio venta neto: suma de todos los netos
    pub fn precio_venta_neto(&self) -> f64 {
        self.hotel_neto
            + self.vuelo_neto
            + self.traslado_neto
            + self.seguro_neto
            + self.circuito_neto
            + self.crucero_neto
            + self.excursion_neto
            + self.paquete_neto
    }
}

/// Campos derivados del formulario de reserva.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculoReserva {
    pub precio_venta_neto: f64,
    pub ganancia_total: f64,
    pub comision_ejecutivo: f64,
    pub comision_agencia: f64,
}

/// Misma fórmula que aplica el backend al guardar la reserva.
pub fn calcular_reserva(
    importes: &ImportesReserva,
    porcentaje_comision_ejecutivo: f64,
) -> CalculoReserva {
    let precio_venta_neto = importes.precio_venta_neto();
    let ganancia_total = importes.precio_venta_total - precio_venta_neto;
    let comision_ejecutivo = ganancia_total * porcentaje_comision_ejecutivo;
    let comision_agencia = ganancia_total - comision_ejecutivo;

    CalculoReserva {
        precio_venta_neto,
        ganancia_total,
        comision_ejecutivo,
        comision_agencia,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn importes_ejemplo() -> ImportesReserva {
        ImportesReserva {
            precio_venta_total: 1500.0,
            hotel_neto: 500.0,
            vuelo_neto: 300.0,
            traslado_neto: 50.0,
            seguro_neto: 30.0,
            circuito_neto: 0.0,
            crucero_neto: 0.0,
            excursion_neto: 70.0,
            paquete_neto: 50.0,
        }
    }

    #[test]
    fn neto_es_la_suma_de_todos_los_netos() {
        assert_eq!(importes_ejemplo().precio_venta_neto(), 1000.0);
    }

    #[test]
    fn calculo_con_comision_del_diez_por_ciento() {
        let calculo = calcular_reserva(&importes_ejemplo(), 0.10);
        assert_eq!(calculo.precio_venta_neto, 1000.0);
        assert_eq!(calculo.ganancia_total, 500.0);
        assert_eq!(calculo.comision_ejecutivo, 50.0);
        assert_eq!(calculo.comision_agencia, 450.0);
    }

    #[test]
    fn comisiones_siempre_suman_la_ganancia() {
        for porcentaje in [0.0, 0.05, 0.10, 0.25, 1.0] {
            let calculo = calcular_reserva(&importes_ejemplo(), porcentaje);
            assert!(
                (calculo.comision_ejecutivo + calculo.comision_agencia - calculo.ganancia_total)
                    .abs()
                    < 1e-9
            );
        }
    }

    #[test]
    fn formulario_vacio_da_todo_en_cero() {
        let calculo = calcular_reserva(&ImportesReserva::default(), 0.10);
        assert_eq!(calculo.precio_venta_neto, 0.0);
        assert_eq!(calculo.ganancia_total, 0.0);
        assert_eq!(calculo.comision_ejecutivo, 0.0);
        assert_eq!(calculo.comision_agencia, 0.0);
    }

    #[test]
    fn venta_bajo_el_neto_da_ganancia_negativa() {
        let mut importes = importes_ejemplo();
        importes.precio_venta_total = 800.0;
        let calculo = calcular_reserva(&importes, 0.10);
        assert_eq!(calculo.ganancia_total, -200.0);
        assert_eq!(calculo.comision_ejecutivo, -20.0);
    }
}
