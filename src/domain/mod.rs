//! Domain layer: loan inputs, calculation outcomes, audit records and the
//! ports the application depends on.

pub mod calculation;
pub mod loan;
pub mod ports;
pub mod record;
