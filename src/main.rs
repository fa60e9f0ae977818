use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use pair_color_code::Error;
use pair_color_code::harness;
use pair_color_code::manual::{self, Format, ManualOptions};
use pair_color_code::{color_from_pair_number, pair_number_from_colors};

#[derive(Parser)]
#[command(name = "pair-color-code", version,
          about = "25-pair color code lookup and reference manual")]
struct Cli {
    /// Without a command, run the self-check then print the manual.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the conversion self-check.
    Check,
    /// Print the reference manual.
    Manual {
        /// Render as an HTML page with color swatches.
        #[arg(long)]
        html: bool,
        #[arg(long)]
        title: Option<String>,
    },
    /// Print the colors of a pair number.
    Number {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Print the pair number of a major and a minor color.
    Pair { major: String, minor: String },
}

fn status(ok: bool) -> ExitCode {
    if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn fail(e: Error) -> ExitCode {
    eprintln!("pair-color-code: {e}");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .init();
    let cli = Cli::parse();
    match cli.command {
        None => {
            let report = harness::run_all_tests();
            print!("{report}");
            println!("\n{}", manual::format_reference_manual());
            println!("Done :)");
            status(report.is_success())
        }
        Some(Command::Check) => {
            let report = harness::run_all_tests();
            print!("{report}");
            status(report.is_success())
        }
        Some(Command::Manual { html, title }) => {
            let mut options = ManualOptions::new();
            if html { options = options.format(Format::Html) }
            if let Some(title) = title { options = options.title(&title) }
            print!("{}", options.render());
            ExitCode::SUCCESS
        }
        Some(Command::Number { number }) => {
            match color_from_pair_number(number) {
                Ok(pair) => { println!("{pair}"); ExitCode::SUCCESS }
                Err(e) => fail(e),
            }
        }
        Some(Command::Pair { major, minor }) => {
            match pair_number_from_colors(&major, &minor) {
                Ok(n) => { println!("{n}"); ExitCode::SUCCESS }
                Err(e) => fail(e),
            }
        }
    }
}
