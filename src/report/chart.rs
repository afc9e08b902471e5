//! Grouped bar chart of self ratings against targets
//!
//! One pair of bars per skill in the role's target table, drawn in canonical
//! target order. A target-table skill the user never rated gets a zero bar;
//! a rated skill missing from the target table is excluded entirely.

use crate::catalog::TargetLevels;
use crate::core::error::{Result, SkillGapError};
use crate::core::types::UserRecord;
use plotters::prelude::*;
use std::path::Path;

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 500;

/// Render the chart PNG for a record, overwriting any previous file
pub fn render_chart(record: &UserRecord, targets: &TargetLevels, path: &Path) -> Result<()> {
    let row = targets.for_role(&record.aspiring_role);
    let names: Vec<&str> = row.iter().map(|(skill, _)| skill.as_str()).collect();
    let n = row.len().max(1);

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Skill Gap: {}", record.aspiring_role),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(70)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..n as f64, 0.0..10.0f64)
        .map_err(chart_err)?;

    // Each skill owns the band [i, i+1); the formatter maps any tick inside
    // the band back to the skill name.
    let label_for = |x: &f64| -> String {
        let i = x.floor();
        if i >= 0.0 && (i as usize) < names.len() {
            names[i as usize].to_string()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&label_for)
        .y_desc("Rating")
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(row.iter().enumerate().map(|(i, (skill, _))| {
            let rating = record.rating_or_zero(skill) as f64;
            Rectangle::new(
                [(i as f64 + 0.1, 0.0), (i as f64 + 0.45, rating)],
                BLUE.filled(),
            )
        }))
        .map_err(chart_err)?
        .label("You")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], BLUE.filled()));

    chart
        .draw_series(row.iter().enumerate().map(|(i, (_, target))| {
            Rectangle::new(
                [(i as f64 + 0.55, 0.0), (i as f64 + 0.9, *target as f64)],
                RED.filled(),
            )
        }))
        .map_err(chart_err)?
        .label("Target")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 12, y + 4)], RED.filled()));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %path.display(), skills = row.len(), "saved skill gap chart");
    Ok(())
}

fn chart_err<E: std::fmt::Display>(e: E) -> SkillGapError {
    SkillGapError::Chart(e.to_string())
}
