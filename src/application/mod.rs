//! Application layer: the amortization calculator and the service that
//! pairs each calculation with its audit record.

pub mod calculator;
pub mod service;
