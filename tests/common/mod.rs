#![allow(dead_code)]

use mortgage_calculator::application::calculator::AmortizationCalculator;
use mortgage_calculator::application::service::MortgageService;
use mortgage_calculator::infrastructure::in_memory::InMemoryAuditSink;
use assert_cmd::cargo_bin;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

pub type Sink = InMemoryAuditSink;

/// Service wired to a fresh in-memory sink; the returned sink shares its log.
pub fn in_memory_service() -> (MortgageService, Sink) {
    let sink = InMemoryAuditSink::new();
    let service = MortgageService::new(
        Arc::new(AmortizationCalculator::new()),
        Box::new(sink.clone()),
    );
    (service, sink)
}

/// `calc` invocation with the given raw arguments.
pub fn calc_command(loan: &str, interest: &str, payments: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("mortgage-calculator"));
    cmd.args([
        "calc",
        "--loan",
        loan,
        "--interest",
        interest,
        "--payments",
        payments,
    ]);
    cmd
}

/// `calc` invocation that appends to a CSV audit file.
pub fn audited_calc_command(audit_csv: &Path, loan: &str, interest: &str, payments: &str) -> Command {
    let mut cmd = Command::new(cargo_bin!("mortgage-calculator"));
    cmd.arg("--audit-csv").arg(audit_csv).args([
        "calc",
        "--loan",
        loan,
        "--interest",
        interest,
        "--payments",
        payments,
    ]);
    cmd
}
