use crate::prelude::*;
use crate::runner::{Day, Part};
use clap::Parser;
use std::path::PathBuf;

mod day1;
mod day2;
mod day3;
mod error;
mod logging;
mod md;
mod prelude;
mod runner;

#[derive(Debug, clap::Parser)]
#[command(version, about = "Advent of Code 2024 solutions")]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,
}

#[derive(Debug, clap::Subcommand)]
pub enum SubCommands {
    /// Solve one day's puzzle and print the answers
    Run(RunArgs),

    /// Convert a saved puzzle page to Markdown
    HtmlToMd(ConvertArgs),
}

#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Day to solve: `day01`, `day1`, `01` or `1`
    day: Day,

    /// Only solve this part (1 or 2)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: Option<u8>,

    /// Read `day<N>test<T>.in` instead of `day<N>.in`
    #[arg(long)]
    test: Option<u32>,

    /// Directory holding the input files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Explicit input file, overriding `--input-dir` and `--test`
    #[arg(long)]
    input: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    #[arg(long, default_value = "problem.html")]
    input: PathBuf,

    #[arg(long, default_value = "problem.md")]
    output: PathBuf,
}

fn run(args: RunArgs) -> Result<()> {
    let parts = match args.part {
        Some(n) => vec![Part::try_from(n)?],
        None => Part::BOTH.to_vec(),
    };
    let path = args.input.unwrap_or_else(|| runner::input_path(&args.input_dir, args.day, args.test));
    for line in runner::run(args.day, &parts, &path)? {
        println!("{line}");
    }
    Ok(())
}

fn html_to_md(args: ConvertArgs) -> Result<()> {
    md::convert_file(&args.input, &args.output)?;
    println!("Conversion complete!");
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Run(args) => run(args),
        SubCommands::HtmlToMd(args) => html_to_md(args),
    }
}
