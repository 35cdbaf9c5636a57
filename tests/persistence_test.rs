use assert_cmd::cargo_bin;
use std::process::Command;
use tempfile::tempdir;

mod common;

#[test]
fn test_csv_audit_persistence() {
    let dir = tempdir().unwrap();
    let audit = dir.path().join("executions.csv");

    // 1. First run: a successful calculation
    let output1 = common::audited_calc_command(&audit, "100000", "6.0", "360")
        .output()
        .expect("Failed to execute command");
    assert!(output1.status.success());

    // 2. Second run: a rejected calculation is still recorded
    let output2 = common::audited_calc_command(&audit, "10000", "5.0", "0")
        .output()
        .expect("Failed to execute command");
    assert_eq!(output2.status.code(), Some(2));

    // 3. Export reads both records back from the same file
    let output3 = Command::new(cargo_bin!("mortgage-calculator"))
        .arg("--audit-csv")
        .arg(&audit)
        .arg("export")
        .output()
        .expect("Failed to execute command");
    assert!(output3.status.success());

    let stdout = String::from_utf8_lossy(&output3.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,timestamp,loan,annual_interest_rate,number_of_payments,monthly_rate,succeeded,error_code"
    );
    assert!(lines[1].ends_with(",100000,6.0,360,599.55,true,"));
    assert!(lines[2].ends_with(",10000,5.0,0,,false,InvalidPaymentCount"));
}

#[test]
fn test_export_without_records_prints_header() {
    let dir = tempdir().unwrap();
    let audit = dir.path().join("missing.csv");

    let output = Command::new(cargo_bin!("mortgage-calculator"))
        .arg("--audit-csv")
        .arg(&audit)
        .arg("export")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[cfg(feature = "storage-rocksdb")]
#[test]
fn test_rocksdb_persistence_recovery() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    for (loan, interest, payments) in [("50000", "0", "100"), ("0", "5", "12")] {
        Command::new(cargo_bin!("mortgage-calculator"))
            .arg("--audit-db")
            .arg(&db_path)
            .args(["calc", "--loan", loan, "--interest", interest, "--payments", payments])
            .output()
            .expect("Failed to execute command");
    }

    let output = Command::new(cargo_bin!("mortgage-calculator"))
        .arg("--audit-db")
        .arg(&db_path)
        .arg("export")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains(",100,500.00,true,"));
    assert!(stdout.contains(",false,InvalidLoanAmount"));
}
