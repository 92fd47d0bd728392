use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use ziwei_base::{SolarDate, TargetDate, to_bazi_params, validate_birth};
use ziwei_calendar::{CalendarOracle, Gender, LocalTime, hour_branch, time_branch_index};
use ziwei_chart::{Palace, TimePeriods, ZiweiChart, ZiweiEngine};

#[derive(Parser)]
#[command(name = "ziwei", about = "Purple Star (紫微斗数) chart calculator")]
struct Cli {
    /// TOML config file (falls back to $ZIWEI_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log calculation steps to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Birth {
    /// Civil birth date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    date: TargetDate,
    /// Birth hour 0-23
    #[arg(long)]
    hour: u32,
    /// male or female
    #[arg(long, value_parser = parse_gender)]
    gender: Gender,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Periods in force on a target date
    Periods {
        #[command(flatten)]
        birth: Birth,
        /// Target date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        target: TargetDate,
    },
    /// Four pillars and BaZi decade fortunes
    Bazi {
        #[command(flatten)]
        birth: Birth,
    },
    /// Lunar date of a civil date
    Lunar {
        /// Civil date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: TargetDate,
        /// Hour 0-23
        #[arg(long, default_value = "12")]
        hour: u32,
    },
    /// Time branch of an hour
    HourBranch {
        /// Hour 0-23
        hour: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ziwei_config::resolve(cli.config.as_deref())?;
    let engine = ZiweiEngine::new(config);

    match cli.command {
        Commands::Chart { birth } => {
            let chart = chart_for(&engine, &birth)?;
            if birth.json {
                print_json(&chart)?;
            } else {
                print_chart(&chart);
            }
        }

        Commands::Periods { birth, target } => {
            let chart = chart_for(&engine, &birth)?;
            let periods = engine.compute_time_periods(&chart, target)?;
            if birth.json {
                print_json(&periods)?;
            } else {
                print_periods(&periods);
            }
        }

        Commands::Bazi { birth } => {
            let d = birth.date;
            let params = to_bazi_params(
                engine.oracle(),
                SolarDate::new(d.year, d.month, d.day, birth.hour),
                birth.gender,
                engine.config(),
            )?;
            if birth.json {
                print_json(&params)?;
            } else {
                println!("{} {} {} {}", params.year, params.month, params.day, params.hour);
                println!(
                    "起运 {}年{}月{}日, {}",
                    params.qiyun.years,
                    params.qiyun.months,
                    params.qiyun.days,
                    if params.fortune_forward { "顺行" } else { "逆行" }
                );
                for p in &params.major_periods {
                    println!(
                        "{:>2}. {} {:>3}-{:<3} {}-{}",
                        p.ordinal, p.ganzhi, p.start_age, p.end_age, p.start_year, p.end_year
                    );
                }
                if params.is_degraded() {
                    println!("(calendar unavailable: 甲子 placeholders)");
                }
            }
        }

        Commands::Lunar { date, hour } => {
            validate_birth(date.year, date.month, date.day, hour)?;
            let instant = LocalTime::new(date.year, date.month, date.day, hour, 0, 0.0)
                .with_offset(engine.config().utc_offset_minutes);
            let reading = engine.oracle().read(&instant, Gender::Male)?;
            let leap = if reading.lunar.is_leap { " (闰)" } else { "" };
            println!("{}{leap}", reading.lunar);
            let p = reading.pillars;
            println!("{} {} {} {}", p.year, p.month, p.day, p.hour);
        }

        Commands::HourBranch { hour } => match (hour_branch(hour), time_branch_index(hour)) {
            (Some(branch), Some(index)) => println!("{branch} ({index})"),
            _ => return Err(format!("hour {hour} is outside 0..=23").into()),
        },
    }
    Ok(())
}

fn chart_for(
    engine: &ZiweiEngine,
    birth: &Birth,
) -> Result<ZiweiChart, ziwei_base::ZiweiError> {
    let d = birth.date;
    engine.generate_chart(d.year, d.month, d.day, birth.hour, birth.gender)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_chart(chart: &ZiweiChart) {
    let p = &chart.params;
    println!(
        "{}-{:02}-{:02} {:02}h {}  {} {} {} {}",
        p.solar.year,
        p.solar.month,
        p.solar.day,
        p.solar.hour,
        p.gender.name(),
        p.year,
        p.month,
        p.day,
        p.hour
    );
    println!(
        "农历 {}年{}{}月{}日 {}时  {}  命主 {}  身主 {}  来因 {}  斗君 {}",
        p.lunar_year,
        if p.is_leap_month { "闰" } else { "" },
        p.lunar_month,
        p.lunar_day,
        p.time_branch,
        chart.bureau,
        chart.masters.life,
        chart.masters.body,
        chart.laiyin_palace,
        chart.dou_jun
    );
    if chart.is_degraded() {
        println!("(calendar unavailable: 甲子 placeholders)");
    }
    println!();
    for palace in &chart.palaces {
        println!("{}", palace_line(palace));
    }
}

fn palace_line(palace: &Palace) -> String {
    let mut line = format!(
        "{}{} {:<4}{}",
        palace.stem,
        palace.branch,
        palace.role.name(),
        if palace.is_body_palace { " 身" } else { "   " }
    );
    if let Some(span) = palace.decade {
        line.push_str(&format!(" [{:>3}-{:<3}]", span.start_age, span.end_age));
    } else {
        line.push_str("          ");
    }
    for star in &palace.stars {
        line.push(' ');
        line.push_str(star.name.name());
        line.push('(');
        line.push_str(star.brightness.name());
        if let Some(role) = star.birth_sihua {
            line.push_str(role.name());
        }
        for m in &star.self_transforms {
            line.push(m.kind.marker());
            line.push_str(m.role.name());
        }
        line.push(')');
    }
    line
}

fn print_periods(p: &TimePeriods) {
    println!(
        "{}-{:02}-{:02}  农历 {}年{}{}月  周岁 {}  虚岁 {}",
        p.target.year,
        p.target.month,
        p.target.day,
        p.lunar_year,
        if p.is_leap_month { "闰" } else { "" },
        p.lunar_month,
        p.western_age,
        p.nominal_age
    );
    match &p.decade_period {
        Some(d) => println!(
            "大限 {}{} {} {}-{}岁 ({}-{})",
            d.stem,
            d.branch,
            d.role.name(),
            d.start_age,
            d.end_age,
            d.start_year,
            d.end_year
        ),
        None => println!("大限 -"),
    }
    let y = &p.fleeting_year;
    println!("流年 {} {} 斗君 {}", y.ganzhi, y.role.name(), y.dou_jun);
    let m = &p.fleeting_month;
    println!("流月 {} {}", m.ganzhi, m.role.name());
    println!("小限 {} {}", p.minor_limit.branch, p.minor_limit.role.name());
}

fn parse_date(s: &str) -> Result<TargetDate, String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    Ok(TargetDate::new(year, month, day))
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_lowercase().as_str() {
        "male" | "m" | "男" => Ok(Gender::Male),
        "female" | "f" | "女" => Ok(Gender::Female),
        _ => Err(format!("invalid gender: {s} (male or female)")),
    }
}
