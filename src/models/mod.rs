pub mod balance;
pub mod reserva;
pub mod venta;

pub use balance::FilaBalance;
pub use reserva::{reserva_id_from_name, FieldKind, RowSnapshot, UpdateReservaResponse};
pub use venta::{calcular_reserva, CalculoReserva, ImportesReserva};
