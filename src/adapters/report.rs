use crate::core::allocator::Allocation;
use crate::core::summary::Summary;
use crate::domain::model::GroupId;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

pub use crate::domain::ports::ReportFormat;

/// Label used for riders no driver could take.
pub const UNASSIGNED_LABEL: &str = "NULL";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub show_fill_ratio: bool,
}

pub fn write_report<W: Write>(
    allocation: &Allocation,
    options: &ReportOptions,
    writer: W,
) -> Result<()> {
    match options.format {
        ReportFormat::Text => write_text(allocation, options.show_fill_ratio, writer),
        ReportFormat::Json => write_json(allocation, writer),
        ReportFormat::Csv => write_csv(allocation, writer),
    }
}

/// Renders a report to a string, mainly for tests and logging.
pub fn render_report(allocation: &Allocation, options: &ReportOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_report(allocation, options, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_text<W: Write>(allocation: &Allocation, show_fill_ratio: bool, mut w: W) -> Result<()> {
    writeln!(w)?;
    for driver in &allocation.drivers {
        if show_fill_ratio {
            writeln!(w, "{} (fill ratio {:.2}):", driver.name, driver.fill_ratio())?;
        } else {
            writeln!(w, "{}:", driver.name)?;
        }

        if driver.assigned_riders.is_empty() {
            writeln!(w, "  No Riders Assigned")?;
        } else {
            for rider in &driver.assigned_riders {
                writeln!(w, "  {}", rider)?;
            }
        }
        writeln!(w)?;
    }

    if !allocation.unassigned.is_empty() {
        writeln!(w, "{}:", UNASSIGNED_LABEL)?;
        for rider in &allocation.unassigned {
            writeln!(w, "  {}", rider.name)?;
        }
        writeln!(w)?;
    }

    let summary = &allocation.summary;
    writeln!(w, "Summary:")?;
    writeln!(w, "  Total Capacity Used: {}", summary.total_capacity_used)?;
    writeln!(w, "  Total Empty Seats Remaining: {}", summary.total_empty_seats)?;
    writeln!(w, "  Total Riders Unassigned: {}", summary.total_unassigned)?;
    w.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct DriverReport<'a> {
    name: &'a str,
    initial_capacity: u32,
    remaining_capacity: u32,
    group_affinity: Option<GroupId>,
    riders: &'a [String],
    fill_ratio: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    drivers: Vec<DriverReport<'a>>,
    unassigned: Vec<&'a str>,
    summary: &'a Summary,
}

fn write_json<W: Write>(allocation: &Allocation, mut w: W) -> Result<()> {
    let report = JsonReport {
        drivers: allocation
            .drivers
            .iter()
            .map(|d| DriverReport {
                name: &d.name,
                initial_capacity: d.initial_capacity,
                remaining_capacity: d.capacity,
                group_affinity: d.group_affinity,
                riders: &d.assigned_riders,
                fill_ratio: d.fill_ratio(),
            })
            .collect(),
        unassigned: allocation
            .unassigned
            .iter()
            .map(|r| r.name.as_str())
            .collect(),
        summary: &allocation.summary,
    };

    serde_json::to_writer_pretty(&mut w, &report)?;
    writeln!(w)?;
    Ok(())
}

fn write_csv<W: Write>(allocation: &Allocation, w: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(w);
    csv.write_record(["driver", "rider"])?;

    for driver in &allocation.drivers {
        for rider in &driver.assigned_riders {
            csv.write_record([driver.name.as_str(), rider.as_str()])?;
        }
    }
    for rider in &allocation.unassigned {
        csv.write_record([UNASSIGNED_LABEL, rider.name.as_str()])?;
    }

    csv.flush()?;
    Ok(())
}
