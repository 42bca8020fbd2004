/// Fila de la tabla de balance mensual. Montos enteros en pesos, tal como se
/// muestran (sin decimales).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilaBalance {
    pub ingresos_agentes: i64,
    pub ingresos_externos: i64,
    pub egresos_comision: i64,
    pub egresos_administracion: i64,
    pub otros_egresos: i64,
}

impl FilaBalance {
    pub fn ingresos(&self) -> i64 {
        self.ingresos_agentes + self.ingresos_externos
    }

    pub fn egresos(&self) -> i64 {
        self.egresos_comision + self.egresos_administracion + self.otros_egresos
    }

    /// Ganancia/Pérdida de la fila
    pub fn ganancia(&self) -> i64 {
        self.ingresos() - self.egresos()
    }

    /// % Margen: `100 - (egresos/ingresos * 100)`; 0.0 salvo que haya
    /// ingresos y egresos positivos.
    pub fn margen_porcentaje(&self) -> f64 {
        let ingresos = self.ingresos();
        let egresos = self.egresos();
        if egresos > 0 && ingresos > 0 {
            100.0 - ((egresos as f64 / ingresos as f64) * 100.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fila_ejemplo() -> FilaBalance {
        FilaBalance {
            ingresos_agentes: 1_000_000,
            ingresos_externos: 200_000,
            egresos_comision: 300_000,
            egresos_administracion: 250_000,
            otros_egresos: 50_000,
        }
    }

    #[test]
    fn ganancia_es_ingresos_menos_egresos() {
        assert_eq!(fila_ejemplo().ganancia(), 600_000);
    }

    #[test]
    fn margen_sobre_fila_con_movimiento() {
        // egresos 600.000 sobre ingresos 1.200.000 → margen 50%
        assert!((fila_ejemplo().margen_porcentaje() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn margen_cero_sin_egresos_o_sin_ingresos() {
        let sin_egresos = FilaBalance {
            ingresos_agentes: 100,
            ..Default::default()
        };
        assert_eq!(sin_egresos.margen_porcentaje(), 0.0);

        let sin_ingresos = FilaBalance {
            otros_egresos: 100,
            ..Default::default()
        };
        assert_eq!(sin_ingresos.margen_porcentaje(), 0.0);

        assert_eq!(FilaBalance::default().margen_porcentaje(), 0.0);
    }

    #[test]
    fn fila_deficitaria_da_ganancia_negativa_y_margen_negativo() {
        let fila = FilaBalance {
            ingresos_agentes: 100_000,
            egresos_administracion: 150_000,
            ..Default::default()
        };
        assert_eq!(fila.ganancia(), -50_000);
        assert!(fila.margen_porcentaje() < 0.0);
    }
}
