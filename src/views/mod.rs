pub mod autosave;
pub mod balance;
pub mod pendientes;
pub mod reserva_form;

pub use autosave::{capture_row_snapshot, register_autosave, submit_row_update};
pub use balance::init_balance_mensual;
pub use pendientes::init_pendientes;
pub use reserva_form::init_reserva_form;
