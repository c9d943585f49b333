//! Text, tab-separated, CSV and JSON rendering of planner and schedule output
//!
//! Formatting is pure: every value is rendered with an explicit precision.

use std::io::Write;

use serde::Serialize;

use crate::amortization::{AmortizationSchedule, ScheduleSummary};
use crate::config::DisplayOptions;
use crate::error::Result;
use crate::planner::ScenarioReport;

/// Header of the tab-separated schedule table
pub const SCHEDULE_HEADER: [&str; 5] = ["Period", "Payment", "Interest", "Principal", "Remaining Balance"];

/// Header of the planner CSV export
pub const PLANNER_HEADER: [&str; 8] = [
    "Scenario",
    "Nominal %",
    "Inflation %",
    "Real %",
    "Present Value",
    "Monthly Contribution",
    "Nominal Present Value",
    "Total Contributions",
];

/// Fixed-point rendering with `precision` decimal places
pub fn format_fixed(value: f64, precision: usize) -> String {
    // Avoid printing "-0.00" for values that round to zero
    let rendered = format!("{:.*}", precision, value);
    if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}

/// Render one block per scenario
pub fn render_planner_report(reports: &[ScenarioReport], display: &DisplayOptions) -> String {
    let rate = |v: f64| format_fixed(v, display.rate_precision);
    let amount = |v: f64| format_fixed(v, display.amount_precision);

    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("====== Scenario: {} ======\n", report.label));
        out.push_str(&format!("Nominal return: {}%\n", rate(report.annual_nominal_pct)));
        out.push_str(&format!("Inflation rate: {}%\n", rate(report.annual_inflation_pct)));
        out.push_str(&format!("Real return: {}%\n", rate(report.annual_real_pct)));
        out.push_str(&format!("Target present value: {}\n", amount(report.present_value)));
        out.push_str(&format!("Monthly savings contribution: {}\n", amount(report.monthly_contribution)));
        out.push_str(&format!(
            "Present value ignoring inflation: {}\n",
            amount(report.nominal_present_value)
        ));
        out.push_str(&format!("Total contributions: {}\n\n", amount(report.total_contributions)));
    }
    out
}

/// Write one CSV row per scenario, rates and amounts at display precision
pub fn write_planner_csv<W: Write>(
    writer: W,
    reports: &[ScenarioReport],
    display: &DisplayOptions,
) -> Result<()> {
    let rate = |v: f64| format_fixed(v, display.rate_precision);
    let amount = |v: f64| format_fixed(v, display.amount_precision);

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(PLANNER_HEADER)?;
    for report in reports {
        csv_writer.write_record([
            report.label.clone(),
            rate(report.annual_nominal_pct),
            rate(report.annual_inflation_pct),
            rate(report.annual_real_pct),
            amount(report.present_value),
            amount(report.monthly_contribution),
            amount(report.nominal_present_value),
            amount(report.total_contributions),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the schedule as a tab-separated table with a header row
pub fn write_schedule_tsv<W: Write + ?Sized>(
    writer: &mut W,
    schedule: &AmortizationSchedule,
    amount_precision: usize,
) -> Result<()> {
    writeln!(writer, "{}", SCHEDULE_HEADER.join("\t"))?;
    for row in schedule {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            row.period,
            format_fixed(row.total_payment, amount_precision),
            format_fixed(row.interest_portion, amount_precision),
            format_fixed(row.principal_portion, amount_precision),
            format_fixed(row.remaining_balance, amount_precision),
        )?;
    }
    Ok(())
}

/// Write the schedule as CSV with the same columns as the table
pub fn write_schedule_csv<W: Write>(
    writer: W,
    schedule: &AmortizationSchedule,
    amount_precision: usize,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(SCHEDULE_HEADER)?;
    for row in schedule {
        csv_writer.write_record([
            row.period.to_string(),
            format_fixed(row.total_payment, amount_precision),
            format_fixed(row.interest_portion, amount_precision),
            format_fixed(row.principal_portion, amount_precision),
            format_fixed(row.remaining_balance, amount_precision),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Short totals block printed after a schedule
pub fn render_schedule_summary(summary: &ScheduleSummary, amount_precision: usize) -> String {
    let amount = |v: f64| format_fixed(v, amount_precision);
    format!(
        "Periods: {}\nPayment: {}\nTotal paid: {}\nTotal interest: {}\nTotal principal: {}\n",
        summary.periods,
        amount(summary.payment),
        amount(summary.total_paid),
        amount(summary.total_interest),
        amount(summary.total_principal),
    )
}

/// Pretty-printed JSON of any serializable output
pub fn write_json<W: Write + ?Sized, T: Serialize + ?Sized>(writer: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
