// Small dev utility: print the iCalendar export for one nurse and month.
//
// Usage:
//   cargo run --bin export_staff_ics -- <month> <year> <staff name>
//
// Example:
//   cargo run --bin export_staff_ics -- Janeiro 2026 "Ana Silva"
//
// This is intentionally lightweight and does not start the UI shell.

use nurse_roster_planner::app::{get_default_data_path, AppState};
use nurse_roster_planner::resolve_month_label;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let month_arg = args.next().ok_or("missing <month> argument")?;
    let year: i32 = args.next().ok_or("missing <year> argument")?.parse()?;
    let name = args.next().ok_or("missing <staff name> argument")?;

    let month = resolve_month_label(&month_arg)
        .ok_or_else(|| format!("unknown month: {}", month_arg))?;

    let state = AppState::new(get_default_data_path())?;
    let ics = state.roster_api.staff_calendar(month, year, &name)?;

    print!("{}", ics);
    Ok(())
}
