use crate::aggregator::{filter_flights_by_period, flights_by_period};
use crate::config::{ResolvedConfig, ResolvedConfigFile};
use crate::constants::{MAX_CHART_WIDTH, PERIOD_HELP_TEXT};
use crate::errors::{AppError, AppResult};
use crate::logbook::{load_flights, LogbookSummary};
use crate::logging::{init_logging, Verbosity};
use crate::models::{ChartPeriod, FlightRecord};
use crate::ui::{render_flight_table, render_series};
use crate::utils::format_centesimal;
use chrono::{Local, NaiveDate};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the command tree.
///
/// - `cli`: report on a logbook using command-line flags
/// - `toml`: report on a logbook described by a TOML file
pub fn build_command() -> Command<'static> {
    Command::new("pilotlog")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("cli")
                .about("Summarize a logbook export and chart flights per week or month")
                .after_help("Example:\n  pilotlog cli flights.json --period month -s 2024 --list")
                .arg(
                    Arg::new("logbook")
                        .help("Path to the logbook JSON export")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("period")
                        .short('p')
                        .long("period")
                        .help("Chart granularity: 'week' (w) or 'month' (m)")
                        .default_value("week")
                        .value_parser(clap::value_parser!(String))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("start")
                        .short('s')
                        .long("start")
                        .help(PERIOD_HELP_TEXT)
                        .value_parser(clap::value_parser!(String))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("end")
                        .short('e')
                        .long("end")
                        .help(PERIOD_HELP_TEXT)
                        .value_parser(clap::value_parser!(String))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("chart_width")
                        .short('w')
                        .long("width")
                        .help("Width of the longest chart bar (1-500)")
                        .value_parser(clap::value_parser!(u16).range(1..=MAX_CHART_WIDTH as i64))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the chart series as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("list_flights")
                        .short('l')
                        .long("list")
                        .help("List every flight before the chart")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("verbose")
                        .short('v')
                        .long("verbose")
                        .help("Log skipped records and other details")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("quiet")
                        .short('q')
                        .long("quiet")
                        .help("Only log errors")
                        .conflicts_with("verbose")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("toml")
                .about("Run using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

/// Parses command-line arguments and prints the requested report.
///
/// Both subcommands run the same workflow:
/// 1. Load the logbook JSON export
/// 2. Keep the flights inside the requested period range
/// 3. Print the summary, the optional flight list and the weekly or monthly chart
///
/// # Errors
///
/// Returns an error if the logbook or config cannot be read, a period bound is
/// invalid, or the report cannot be written to stdout.
pub fn cli() -> AppResult<()> {
    let cmd = build_command();
    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("cli", sub)) => {
            let verbosity = if flag(sub, "verbose") {
                Verbosity::Verbose
            } else if flag(sub, "quiet") {
                Verbosity::Quiet
            } else {
                Verbosity::Normal
            };
            init_logging(verbosity);

            let logbook = sub
                .get_one::<PathBuf>("logbook")
                .ok_or_else(|| AppError::InvalidInput("Missing logbook path".into()))?;
            let mut output = ResolvedConfig::default();
            if let Some(period) = sub.get_one::<String>("period") {
                output.period = period.clone();
            }
            if let Some(&width) = sub.get_one::<u16>("chart_width") {
                output.chart_width = usize::from(width);
            }
            output.json = flag(sub, "json");
            output.list_flights = flag(sub, "list_flights");

            run_workflow(
                logbook,
                sub.get_one::<String>("start").map(|s| s.as_str()),
                sub.get_one::<String>("end").map(|s| s.as_str()),
                &output,
            )?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .ok_or_else(|| AppError::InvalidInput("Missing config path".into()))?;

            let file_config = ResolvedConfigFile::from_toml_file(config_path)?;
            init_logging(Verbosity::from(file_config.output.verbosity.as_str()));

            run_workflow(
                &file_config.logbook,
                file_config.start.as_deref(),
                file_config.end.as_deref(),
                &file_config.output,
            )?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

fn run_workflow(
    logbook: &Path,
    start_period: Option<&str>,
    end_period: Option<&str>,
    output: &ResolvedConfig,
) -> AppResult<()> {
    print_report_info(logbook, start_period, end_period, output);

    let flights = load_flights(logbook)?;
    let today = Local::now().date_naive();
    let report = render_report(&flights, start_period, end_period, output, today)?;
    print!("{report}");

    info!(flights = flights.len(), "Report completed");
    Ok(())
}

/// Renders the report for `flights` as it is printed to stdout.
///
/// With `output.json` set, only the chart series is printed, as a JSON array of
/// `{"date", "flights"}` objects ready for a charting front end.
///
/// # Errors
///
/// Returns an error if a period bound is invalid or the series cannot be serialized.
pub fn render_report(
    flights: &[FlightRecord],
    start_period: Option<&str>,
    end_period: Option<&str>,
    output: &ResolvedConfig,
    today: NaiveDate,
) -> AppResult<String> {
    let selected = filter_flights_by_period(flights, start_period, end_period)?;
    let period = ChartPeriod::from(output.period.as_str());
    let series = flights_by_period(&selected, period, today);

    if output.json {
        let mut json = serde_json::to_string_pretty(&series)?;
        json.push('\n');
        return Ok(json);
    }

    let summary = LogbookSummary::from_flights(&selected);
    let mut report = String::new();
    report.push_str(&format!("Flights: {}\n", summary.flights));
    report.push_str(&format!(
        "Total hours: {}\n",
        format_centesimal(summary.total_hours)
    ));
    if let (Some(first), Some(last)) = (summary.first_flight, summary.last_flight) {
        report.push_str(&format!(
            "Span: {} - {}\n",
            first.format("%d/%m/%Y"),
            last.format("%d/%m/%Y")
        ));
    }

    if output.list_flights && !selected.is_empty() {
        report.push('\n');
        report.push_str(&render_flight_table(&selected));
    }

    report.push('\n');
    report.push_str(&format!("{} flights\n", period.display_name()));
    report.push_str(&render_series(&series, output.chart_width));
    Ok(report)
}

fn print_report_info(
    logbook: &Path,
    start_period: Option<&str>,
    end_period: Option<&str>,
    output: &ResolvedConfig,
) {
    let start_text = start_period.unwrap_or("first flight");
    let end_text = end_period.unwrap_or("last flight");
    info!(
        logbook = %logbook.display(),
        period = output.period.as_str(),
        start_period = start_text,
        end_period = end_text,
        "Building report"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_flights() -> Vec<FlightRecord> {
        vec![
            FlightRecord::new("2024-01-10", "09:00", "10:27").with_total("1:27"),
            FlightRecord::new("2024-03-02", "14:00", "14:30").with_total("0:30"),
            FlightRecord::new("2024-03-20", "08:00", "09:00"),
        ]
    }

    #[test]
    fn cli_command_parses_defaults() {
        let matches = build_command()
            .try_get_matches_from(vec!["pilotlog", "cli", "flights.json"])
            .unwrap();
        let sub = matches.subcommand_matches("cli").unwrap();
        assert_eq!(
            sub.get_one::<PathBuf>("logbook"),
            Some(&PathBuf::from("flights.json"))
        );
        assert_eq!(sub.get_one::<String>("period").map(|s| s.as_str()), Some("week"));
        assert!(!flag(sub, "json"));
        assert!(sub.get_one::<String>("start").is_none());
    }

    #[test]
    fn cli_command_parses_flags() {
        let matches = build_command()
            .try_get_matches_from(vec![
                "pilotlog", "cli", "flights.json", "-p", "month", "-s", "2024", "-e", "202406",
                "-w", "20", "--json", "--list",
            ])
            .unwrap();
        let sub = matches.subcommand_matches("cli").unwrap();
        assert_eq!(sub.get_one::<String>("period").map(|s| s.as_str()), Some("month"));
        assert_eq!(sub.get_one::<String>("start").map(|s| s.as_str()), Some("2024"));
        assert_eq!(sub.get_one::<u16>("chart_width"), Some(&20));
        assert!(flag(sub, "json"));
        assert!(flag(sub, "list_flights"));
    }

    #[test]
    fn chart_width_out_of_range_is_rejected() {
        for width in ["0", "501", "18446744073709551615"] {
            let result = build_command()
                .try_get_matches_from(vec!["pilotlog", "cli", "flights.json", "-w", width]);
            assert!(result.is_err(), "width {width} should be rejected");
        }
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = build_command().try_get_matches_from(vec![
            "pilotlog", "cli", "flights.json", "-v", "-q",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn toml_command_requires_path() {
        let result = build_command().try_get_matches_from(vec!["pilotlog", "toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn monthly_text_report() {
        let output = ResolvedConfig {
            period: "month".to_string(),
            chart_width: 4,
            ..ResolvedConfig::default()
        };
        let report = render_report(&sample_flights(), None, None, &output, day(2024, 3, 25)).unwrap();

        assert!(report.contains("Flights: 3"));
        assert!(report.contains("Total hours: 2.0"));
        assert!(report.contains("Span: 10/01/2024 - 20/03/2024"));
        assert!(report.contains("Monthly flights"));
        assert!(report.contains("01/2024 | ## 1"));
        assert!(report.contains("03/2024 | #### 2"));
        assert!(!report.contains("02/2024"));
    }

    #[test]
    fn period_range_limits_report() {
        let output = ResolvedConfig::default();
        let report =
            render_report(&sample_flights(), Some("202403"), None, &output, day(2024, 3, 25)).unwrap();
        assert!(report.contains("Flights: 2"));
        assert!(report.contains("Total hours: 0.5"));
        assert!(report.contains("Weekly flights"));
    }

    #[test]
    fn list_flights_adds_table() {
        let output = ResolvedConfig {
            list_flights: true,
            ..ResolvedConfig::default()
        };
        let report = render_report(&sample_flights(), None, None, &output, day(2024, 3, 25)).unwrap();
        assert!(report.contains("2024-01-10  09:00 a 10:27  1h 27m"));
        assert!(report.contains("2024-03-20  08:00 a 09:00  Sin duración"));
    }

    #[test]
    fn json_report_is_series_only() {
        let output = ResolvedConfig {
            period: "m".to_string(),
            json: true,
            ..ResolvedConfig::default()
        };
        let report = render_report(&sample_flights(), None, None, &output, day(2024, 3, 25)).unwrap();
        let series: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(
            series,
            serde_json::json!([
                { "date": "01/2024", "flights": 1 },
                { "date": "03/2024", "flights": 2 }
            ])
        );
    }

    #[test]
    fn invalid_period_bound_errors() {
        let output = ResolvedConfig::default();
        let result = render_report(&sample_flights(), Some("2024x"), None, &output, day(2024, 3, 25));
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
