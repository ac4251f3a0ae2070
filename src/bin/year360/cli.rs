use clap::{Parser, Subcommand};

/// Converts dates between the Gregorian and Year360 calendars.
#[derive(Parser)]
#[command(name = "year360", version, about = "Gregorian <-> Year360 date converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run. Prints today's date when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print today's Year360 date.
    Today,
    /// Convert a Gregorian date to Year360. Missing components are prompted for.
    FromGregorian(DateArgs),
    /// Convert a Year360 date to Gregorian. Missing components are prompted for.
    ToGregorian(DateArgs),
}

/// Date components, in calendar order.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Year, may be negative.
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Month: 1-12 for Gregorian dates, 0-12 for Year360 dates (12 is Intercalaris).
    pub month: Option<u8>,

    /// Day: 1-31 for Gregorian dates, 0-29 for Year360 dates.
    pub day: Option<u8>,
}
