use predicates::str::contains;

mod common;
use common::{Sandbox, as_str};

#[test]
fn test_analyze_empty_reports_no_data() {
    let sb = Sandbox::new();

    sb.wl()
        .arg("analyze")
        .assert()
        .success()
        .stdout(contains("No data to analyze."));
}

#[test]
fn test_analyze_totals_and_months() {
    let sb = Sandbox::new();
    sb.add("2024-02-01", "08:00", "12:00");
    sb.add("2024-01-01", "08:00", "16:00");
    sb.add("2024-01-15", "08:00", "10:00");

    let out = sb.wl().arg("analyze").output().expect("run analyze");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(stdout.contains("Total work time:   14.00h"));
    assert!(stdout.contains("Average per entry: 4.67h"));

    // months appear in first-seen order
    let feb = stdout.find("2024-02").expect("february row");
    let jan = stdout.find("2024-01").expect("january row");
    assert!(feb < jan);
    assert!(stdout.contains("10.00"));
}

#[test]
fn test_plot_writes_pdf() {
    let sb = Sandbox::new();
    sb.add("2024-01-02", "08:00", "12:00");
    sb.add("2024-01-01", "08:00", "16:00");
    sb.add("2024-01-02", "13:00", "15:00");
    let chart = sb.path("chart.pdf");

    let out = sb
        .wl()
        .args(["plot", "--file", as_str(&chart)])
        .output()
        .expect("run plot");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    let first = stdout.find("2024-01-01").expect("first day");
    let second = stdout.find("2024-01-02").expect("second day");
    assert!(first < second);
    assert!(stdout.contains("6.00"));

    let bytes = std::fs::read(&chart).expect("chart written");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_plot_without_data_writes_nothing() {
    let sb = Sandbox::new();
    let chart = sb.path("chart.pdf");

    sb.wl()
        .args(["plot", "--file", as_str(&chart)])
        .assert()
        .success()
        .stdout(contains("No data to plot."));

    assert!(!chart.exists());
}

#[test]
fn test_plot_default_path_creates_config_dir() {
    let sb = Sandbox::new();
    sb.add("2024-01-01", "08:00", "16:00");
    let chart = sb.path(".worklog").join("work_plot.pdf");
    assert!(!chart.exists());

    sb.wl()
        .arg("plot")
        .assert()
        .success()
        .stdout(contains("Chart export completed"));

    let bytes = std::fs::read(&chart).expect("chart written to default path");
    assert!(bytes.starts_with(b"%PDF-"));
}
