use clap::Parser;
use miette::{IntoDiagnostic, Result};
use mortgage_calculator::application::calculator::AmortizationCalculator;
use mortgage_calculator::application::service::MortgageService;
use mortgage_calculator::config::{Cli, Command};
use mortgage_calculator::domain::calculation::CalculationResult;
use mortgage_calculator::interfaces::csv::record_writer::RecordWriter;
use mortgage_calculator::interfaces::http;
use mortgage_calculator::interfaces::http::params::MortgageParams;
use mortgage_calculator::logging;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

/// Exit code for rejected input, the CLI counterpart of HTTP 400.
const EXIT_BAD_REQUEST: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    let audit_sink = cli.audit_sink().into_diagnostic()?;
    let service = MortgageService::new(Arc::new(AmortizationCalculator::new()), audit_sink);

    match cli.command {
        Command::Serve { addr } => {
            http::serve(&addr, service).await.into_diagnostic()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Calc {
            loan,
            interest,
            payments,
        } => {
            let params = MortgageParams {
                loan: Some(loan),
                interest: Some(interest),
                n_payments: Some(payments),
            };
            let request = match params.into_request() {
                Ok(request) => request,
                Err(e) => {
                    tracing::error!(field = e.field(), "{}", e);
                    eprintln!("{}", e);
                    return Ok(ExitCode::from(EXIT_BAD_REQUEST));
                }
            };

            match service.calculate(request).await {
                CalculationResult::Succeeded { value } => {
                    println!("{}", value);
                    Ok(ExitCode::SUCCESS)
                }
                CalculationResult::Failed(error) => {
                    eprintln!("{}: {}", error.code, error.message);
                    Ok(ExitCode::from(EXIT_BAD_REQUEST))
                }
            }
        }
        Command::Export => {
            let records = service.history().await.into_diagnostic()?;

            let stdout = io::stdout();
            let mut writer = RecordWriter::new(stdout.lock());
            writer.write_records(records).into_diagnostic()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
