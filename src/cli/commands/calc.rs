use crate::cli::parser::Commands;
use crate::config::{Config, OutputFormat};
use crate::core::calculator::duration::WorkDurationCalculator;
use crate::core::clock::Clock;
use crate::errors::AppResult;
use crate::models::work_time::{LunchWindow, WorkDurationBreakdown, WorkTimeReport};
use crate::utils::colors::{dim, paint_minutes, paint_season};
use crate::utils::formatting::{bold, instant_readable, work_time_readable};
use crate::utils::time::{format_minutes, parse_clock_time};
use serde::Serialize;

#[derive(Serialize)]
struct DetailedReport<'a> {
    #[serde(flatten)]
    report: WorkTimeReport,
    details: &'a WorkDurationBreakdown,
}

/// Handle the `calc` command
pub fn handle(cmd: &Commands, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    if let Commands::Calc {
        start,
        end,
        crossing,
        json,
        details,
    } = cmd
    {
        let work_start = parse_clock_time(start)?;
        let work_end = parse_clock_time(end)?;

        let calculator = WorkDurationCalculator::new(clock);
        let breakdown = calculator.compute_breakdown(work_start, work_end, *crossing);
        let report = WorkTimeReport::new(&breakdown.result, &cfg.season_labels);

        if *json || cfg.output == OutputFormat::Json {
            let out = if *details {
                serde_json::to_string_pretty(&DetailedReport {
                    report,
                    details: &breakdown,
                })?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{}", out);
            return Ok(());
        }

        print_report(&report, &breakdown, cfg);
        if *details {
            print_details(&breakdown, cfg);
        }
    }

    Ok(())
}

fn window_readable(w: &LunchWindow) -> String {
    format!("{} → {}", instant_readable(&w.start), w.end.format("%H:%M"))
}

fn print_report(report: &WorkTimeReport, breakdown: &WorkDurationBreakdown, cfg: &Config) {
    let season = breakdown.result.season_info;
    let worked = work_time_readable(&report.work_time);

    println!(
        "🕘 {} {}",
        bold("Work time:", cfg.color),
        paint_minutes(breakdown.worked_minutes, &worked, cfg.color)
    );
    println!(
        "🍽️  {} {} (lunch break {} min)",
        bold("Season:   ", cfg.color),
        paint_season(season.season, &report.season_info.season_text, cfg.color),
        season.break_duration_minutes()
    );

    if breakdown.worked_minutes < 0 {
        println!("{}", dim("   end is before the effective start", cfg.color));
    }
}

fn print_details(b: &WorkDurationBreakdown, cfg: &Config) {
    let rows = [
        (
            "requested",
            format!(
                "{} → {}",
                instant_readable(&b.raw.start),
                instant_readable(&b.raw.end)
            ),
        ),
        (
            "clipped",
            format!(
                "{} → {}",
                instant_readable(&b.clipped.start),
                instant_readable(&b.clipped.end)
            ),
        ),
        ("lunch (start day)", window_readable(&b.today_lunch)),
        ("lunch (end day)", window_readable(&b.next_day_lunch)),
        ("elapsed", format_minutes(b.total_minutes)),
        ("lunch break", format_minutes(b.break_minutes)),
        ("second lunch break", format_minutes(b.extra_break_minutes)),
        ("worked", format_minutes(b.worked_minutes)),
    ];

    println!();
    for (label, value) in rows {
        println!("   {} {}", dim(&format!("{:<20}", label), cfg.color), value);
    }
}
