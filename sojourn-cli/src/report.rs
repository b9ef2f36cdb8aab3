//! Text and JSON rendering of trip plans.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use sojourn_core::{Comparison, Itinerary, ItineraryMetrics, PlanningRequest};
use sojourn_planner::{SearchReport, TripPlan};

use crate::CliError;

/// Output format for command reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ReportFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// One visit as it appears in a report.
#[derive(Debug, Serialize)]
struct StepReport<'a> {
    position: usize,
    site_id: u64,
    name: &'a str,
    fee: f64,
    duration_hours: f64,
    tags: Vec<&'a str>,
    start_hour: f64,
    start: String,
    end_hour: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    rationale: Option<&'a str>,
}

/// Serialised form of a [`TripPlan`].
#[derive(Debug, Serialize)]
struct PlanReport<'a> {
    request: &'a PlanningRequest,
    greedy: Vec<StepReport<'a>>,
    exhaustive: Vec<StepReport<'a>>,
    comparison: &'a Comparison,
    search: &'a SearchReport,
}

fn step_reports<'a>(itinerary: &'a Itinerary<'_>) -> Vec<StepReport<'a>> {
    itinerary
        .steps()
        .into_iter()
        .map(|step| StepReport {
            position: step.position,
            site_id: step.site.id(),
            name: step.site.name(),
            fee: step.site.fee(),
            duration_hours: step.site.visit_hours(),
            tags: step.site.tags().iter().map(String::as_str).collect(),
            start_hour: step.start_hour,
            start: format_clock(step.start_hour),
            end_hour: step.end_hour,
            rationale: step.rationale,
        })
        .collect()
}

/// Format a fractional clock hour as `HH:MM`, rounding to the minute.
#[expect(
    clippy::float_arithmetic,
    reason = "splits fractional hours into hours and minutes"
)]
pub(crate) fn format_clock(hour: f64) -> String {
    let minutes = (hour * 60.0).round();
    let hours = (minutes / 60.0).floor();
    format!("{:02.0}:{:02.0}", hours, minutes - hours * 60.0)
}

/// Write `plan` to `writer` in the requested format.
pub(crate) fn write_report(
    writer: &mut dyn Write,
    format: ReportFormat,
    request: &PlanningRequest,
    plan: &TripPlan<'_>,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Text => write_text(writer, plan).map_err(CliError::WriteOutput),
        ReportFormat::Json => write_json(writer, request, plan),
    }
}

fn write_json(
    writer: &mut dyn Write,
    request: &PlanningRequest,
    plan: &TripPlan<'_>,
) -> Result<(), CliError> {
    let report = PlanReport {
        request,
        greedy: step_reports(&plan.greedy),
        exhaustive: step_reports(&plan.exhaustive),
        comparison: &plan.comparison,
        search: &plan.search,
    };
    let payload = serde_json::to_string_pretty(&report).map_err(CliError::SerializeReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)
}

fn write_text(writer: &mut dyn Write, plan: &TripPlan<'_>) -> io::Result<()> {
    writeln!(writer, "Greedy itinerary")?;
    write_itinerary(writer, &plan.greedy)?;

    writeln!(writer)?;
    writeln!(
        writer,
        "Exhaustive itinerary (first {} sites, {} orderings checked)",
        plan.search.sites_considered, plan.search.orderings_evaluated
    )?;
    if !plan.search.completed {
        writeln!(
            writer,
            "  search stopped at its deadline; showing the best plan found"
        )?;
    }
    write_itinerary(writer, &plan.exhaustive)?;

    writeln!(writer)?;
    write_comparison(writer, &plan.comparison)?;

    writeln!(writer)?;
    writeln!(writer, "Why each greedy site was selected")?;
    for step in plan.greedy.steps() {
        writeln!(writer, "  {}. {}", step.position, step.site.name())?;
        if let Some(rationale) = step.rationale {
            writeln!(writer, "     -> {rationale}")?;
        }
    }
    Ok(())
}

fn write_itinerary(writer: &mut dyn Write, itinerary: &Itinerary<'_>) -> io::Result<()> {
    if itinerary.is_empty() {
        return writeln!(writer, "  no feasible sites");
    }
    writeln!(
        writer,
        "  {:<3} {:<28} {:<9} {:<9} {:<26} Start",
        "#", "Site", "Fee", "Duration", "Tags"
    )?;
    for step in itinerary.steps() {
        let tags: Vec<&str> = step.site.tags().iter().map(String::as_str).collect();
        let fee = format!("Rs.{}", step.site.fee());
        let duration = format!("{}h", step.site.visit_hours());
        writeln!(
            writer,
            "  {:<3} {:<28} {:<9} {:<9} {:<26} {}",
            step.position,
            step.site.name(),
            fee,
            duration,
            tags.join(", "),
            format_clock(step.start_hour)
        )?;
    }
    Ok(())
}

fn write_comparison(writer: &mut dyn Write, comparison: &Comparison) -> io::Result<()> {
    let rows: [(&str, fn(&ItineraryMetrics) -> String); 4] = [
        ("Sites visited", |m| m.site_count.to_string()),
        ("Total cost", |m| format!("Rs. {}", m.total_fee)),
        ("Time used", |m| format!("{:.1} hrs", m.time_used_hours)),
        ("Interest match", |m| format!("{} tags", m.interest_match)),
    ];
    writeln!(writer, "Greedy vs exhaustive")?;
    writeln!(writer, "  {:<18} {:<20} Exhaustive", "Metric", "Greedy")?;
    writeln!(writer, "  {}", "-".repeat(50))?;
    for (label, render) in rows {
        writeln!(
            writer,
            "  {:<18} {:<20} {}",
            label,
            render(&comparison.greedy),
            render(&comparison.exhaustive)
        )?;
    }
    Ok(())
}
