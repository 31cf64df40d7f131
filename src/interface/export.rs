use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::models::Plan;

const HEADER: [&str; 7] = ["day", "slot", "meal", "calories", "protein", "carbs", "fats"];

/// Write a plan as CSV, one row per meal.
pub fn write_plan_csv<W: Write>(plan: &Plan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(HEADER)?;

    for day in &plan.days {
        for meal in &day.meals {
            wtr.write_record([
                day.index.to_string(),
                meal.slot.to_string(),
                meal.name.clone(),
                format!("{:.0}", meal.calories),
                format!("{:.1}", meal.protein),
                format!("{:.1}", meal.carbs),
                format!("{:.1}", meal.fats),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write a plan as CSV to `path`.
pub fn export_plan_csv(plan: &Plan, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(plan, file)
}
