use std::fmt::{Display, Write as _};

use nis_core::dates::DateFormat;
use nis_core::{ItemKind, SpaceItem, Vehicle};

use crate::cli::{OutputFormat, Verbosity};

const INDENT: &str = "    ";

/// Render items as a string in the requested format.
///
/// `verbosity` only affects `text`; JSON output always carries every field.
pub fn render(
    items: &[SpaceItem],
    format: OutputFormat,
    verbosity: Verbosity,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(items, verbosity)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Raw => Ok(serde_json::to_string(items)?),
    }
}

/// Print items to stdout. An empty text listing prints nothing.
pub fn output(
    items: &[SpaceItem],
    format: OutputFormat,
    verbosity: Verbosity,
) -> anyhow::Result<()> {
    let rendered = render(items, format, verbosity)?;
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end_matches('\n'));
    }
    Ok(())
}

fn render_text(items: &[SpaceItem], verbosity: Verbosity) -> String {
    items
        .iter()
        .map(|item| render_item(item, verbosity))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_item(item: &SpaceItem, verbosity: Verbosity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.name().unwrap_or("Name Unavailable"));
    let _ = writeln!(out, "{}", item.location().unwrap_or("Location Unavailable"));
    let _ = writeln!(out, "{INDENT}{}", item.date());

    let kind = match item.kind() {
        ItemKind::Event => "Event",
        ItemKind::Launch => "Launch",
    };
    match item.category() {
        Some(category) => {
            let _ = writeln!(out, "{INDENT}{kind} Type: {category}");
        }
        None => {
            let _ = writeln!(out, "{INDENT}{kind} Type Unavailable");
        }
    }

    if verbosity == Verbosity::Quiet {
        return out;
    }

    if verbosity == Verbosity::Verbose && item.kind() == ItemKind::Launch {
        out.push('\n');
        match item.vehicle() {
            Some(vehicle) => render_vehicle(&mut out, vehicle),
            None => {
                let _ = writeln!(out, "{INDENT}Vehicle Unavailable");
            }
        }
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{INDENT}{}",
        item.description().unwrap_or("Description Unavailable")
    );
    out
}

fn render_vehicle(out: &mut String, vehicle: &Vehicle) {
    let _ = writeln!(
        out,
        "{INDENT}Vehicle: {}",
        vehicle.name.as_deref().unwrap_or("Name Unavailable")
    );

    let maiden_flight = vehicle
        .maiden_flight_date
        .to_utc_string(DateFormat::Calendar)
        .unwrap_or_else(|| "Unavailable".to_string());

    let rows = [
        (
            side("Height", vehicle.height, " m"),
            side("Mass to LEO", vehicle.leo_payload_capacity, " kg"),
        ),
        (
            side("Max Stages", vehicle.max_stages, ""),
            side("Liftoff Thrust", vehicle.liftoff_thrust, " kN"),
        ),
        (
            side("Mass to GTO", vehicle.gto_payload_capacity, " kg"),
            side("Liftoff Mass", vehicle.liftoff_mass, " Tonnes"),
        ),
        (
            side("Launch Successes", vehicle.successful_launch_count, ""),
            format!("Maiden Flight: {maiden_flight}"),
        ),
        (
            side(
                "Consecutive Successes",
                vehicle.consecutive_successful_launch_count,
                "",
            ),
            side("Failed Launches", vehicle.failed_launch_count, ""),
        ),
    ];

    for (left, right) in rows {
        let _ = writeln!(out, "{INDENT}  {left:<32}{right}");
    }
}

fn side<T: Display>(label: &str, value: Option<T>, unit: &str) -> String {
    value.map_or_else(
        || format!("{label}: Unavailable"),
        |value| format!("{label}: {value}{unit}"),
    )
}
