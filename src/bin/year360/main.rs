mod cli;
mod logging;
mod prompt;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use year360::calendar::INTERCALARIS;
use year360::Year360Date;

use crate::cli::{Cli, Command, DateArgs};
use crate::prompt::Prompt;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    if let Err(e) = run(cli.command.unwrap_or(Command::Today), &mut prompt) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run<R: BufRead, W: Write>(
    command: Command,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    match command {
        Command::Today => {
            let today = Year360Date::today().context("cannot determine today's date")?;
            writeln!(prompt.output(), "{today}")?;
        }
        Command::FromGregorian(args) => {
            greet_if_interactive(&args, prompt)?;
            let year = prompt.or_ask(args.year, "Enter Gregorian year (C.E.): ")?;
            let month = prompt.or_ask(args.month, "Enter Gregorian month (1-12): ")?;
            let day = prompt.or_ask(args.day, "Enter Gregorian day (1-31): ")?;
            info!("converting Gregorian {year}-{month}-{day}");

            let date = Year360Date::from_gregorian(year, month, day)
                .context("invalid Gregorian date")?;
            debug!("epoch day {}", date.to_epoch_day());
            writeln!(prompt.output(), "{date}")?;
        }
        Command::ToGregorian(args) => {
            greet_if_interactive(&args, prompt)?;
            let year = prompt.or_ask(args.year, "Enter Year360 year: ")?;
            let month = prompt.or_ask(args.month, "Enter Year360 month (0-12): ")?;
            let day = prompt.or_ask(args.day, "Enter Year360 day (0-29): ")?;
            info!("converting Year360 {year}-{month}-{day}");

            let date = year360_date(year, month, day).context("invalid Year360 date")?;
            debug!("epoch day {}", date.to_epoch_day());
            let gregorian = date.to_gregorian().context("cannot convert to Gregorian")?;
            writeln!(prompt.output(), "{gregorian}")?;
        }
    }
    Ok(())
}

fn year360_date(year: i32, month: u8, day: u8) -> Result<Year360Date, year360::Error> {
    if month == INTERCALARIS {
        Year360Date::intercalary(year, day)
    } else {
        Year360Date::new(year, month, day)
    }
}

/// Shows today's date before asking for input, unless every component was
/// passed on the command line.
fn greet_if_interactive<R: BufRead, W: Write>(
    args: &DateArgs,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<()> {
    if args.year.is_none() || args.month.is_none() || args.day.is_none() {
        let today = Year360Date::today().context("cannot determine today's date")?;
        writeln!(prompt.output(), "Today is {today}.\n")?;
    }
    Ok(())
}
