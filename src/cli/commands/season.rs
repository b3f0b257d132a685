use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::season::resolve_season;
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::work_time::LunchWindow;
use crate::ui::messages;
use crate::utils::colors::paint_season;
use crate::utils::date::{months_of_year, parse_date};
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Handle the `season` command
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Season { date, year } = cmd {
        if let Some(y) = year {
            return print_year(*y, cfg);
        }

        let day = match date {
            Some(d) => parse_date(d)?,
            None => clock.now().date(),
        };
        print_day(day, cfg);
    }

    Ok(())
}

fn print_day(day: NaiveDate, cfg: &Config) {
    let info = resolve_season(&day);
    let window = LunchWindow::for_day(day);
    let label = cfg.season_labels.label(info.season);

    messages::info(format!(
        "{}: {}",
        day,
        paint_season(info.season, label, cfg.color)
    ));
    println!(
        "   lunch {} - {} ({} min break)",
        window.start.format("%H:%M"),
        window.end.format("%H:%M"),
        info.break_duration_minutes()
    );
}

fn print_year(year: i32, cfg: &Config) -> AppResult<()> {
    messages::header(format!("Lunch schedule {}", year));

    let mut table = Table::new(&["Month", "Season", "Lunch", "Break"]);
    for first in months_of_year(year)? {
        let info = resolve_season(&first);
        let window = LunchWindow::for_day(first);

        table.add_row(vec![
            first.format("%B").to_string(),
            cfg.season_labels.label(info.season).to_string(),
            format!(
                "{} - {}",
                window.start.format("%H:%M"),
                window.end.format("%H:%M")
            ),
            format!("{} min", info.break_duration_minutes()),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
