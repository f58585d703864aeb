use clap::{Parser, Subcommand};

use self::{cycle::CycleArg, density::DensityArg, risk::RiskArg, summarize::SummarizeArg};

mod cycle;
mod density;
mod risk;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What to compute
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Boxplot statistics per platform for a metric column
    Summarize(#[clap(flatten)] SummarizeArg),
    /// Kernel density curves per platform for a metric column
    Density(#[clap(flatten)] DensityArg),
    /// Risk score and band for questionnaire rows
    Risk(#[clap(flatten)] RiskArg),
    /// Anxiety-cycle outcome shares and coping score per age bracket
    Cycle(#[clap(flatten)] CycleArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Summarize(arg) => summarize::run(&arg)?,
        Mode::Density(arg) => density::run(&arg)?,
        Mode::Risk(arg) => risk::run(&arg)?,
        Mode::Cycle(arg) => cycle::run(&arg)?,
    }
    Ok(())
}
