//! Command-line front end for the weekline calendar operations.
//!
//! Every subcommand reads datetimes in the fixed 19-character
//! `yyyy-MM-dd HH:mm:ss` form and prints results in the same form;
//! `day --json` emits the bounds as RFC 3339 JSON instead.

use anyhow::Result;
use clap::{Parser, Subcommand};
use weekline::CalendarContext;

#[derive(Parser)]
#[command(
    name = "weekline",
    version,
    about = "Day and week boundary arithmetic over fixed-format dates"
)]
struct Cli {
    /// IANA timezone for the calendar context
    #[arg(long, global = true, default_value = "GMT")]
    timezone: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate and normalize a fixed-format datetime
    Parse {
        /// Datetime in `yyyy-MM-dd HH:mm:ss` form (longer input is truncated)
        datetime: String,
    },
    /// Print the start, end, and next start of the datetime's calendar day
    Day {
        datetime: String,
        /// Emit the bounds as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the Sunday that ends the datetime's week
    WeekEnd { datetime: String },
    /// Shift the datetime by a number of calendar days
    AddDays {
        datetime: String,
        /// Days to add; negative shifts backwards
        #[arg(allow_negative_numbers = true)]
        days: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CalendarContext::from_name(&cli.timezone)?;

    match cli.command {
        Command::Parse { datetime } => {
            let instant = ctx.parse_full_date(&datetime)?;
            println!("{}", ctx.format_full_date(instant));
        }
        Command::Day { datetime, json } => {
            let instant = ctx.parse_full_date(&datetime)?;
            let bounds = ctx.day_bounds(instant);
            if json {
                println!("{}", serde_json::to_string_pretty(&bounds)?);
            } else {
                println!("start      {}", ctx.format_full_date(bounds.start));
                println!("end        {}", ctx.format_full_date(bounds.end));
                println!("next start {}", ctx.format_full_date(bounds.next_start));
            }
        }
        Command::WeekEnd { datetime } => {
            let instant = ctx.parse_full_date(&datetime)?;
            println!("{}", ctx.format_full_date(ctx.next_sunday(instant)));
        }
        Command::AddDays { datetime, days } => {
            let instant = ctx.parse_full_date(&datetime)?;
            println!("{}", ctx.format_full_date(ctx.add_days(instant, days)));
        }
    }
    Ok(())
}
