use std::{fmt::Display, fs, str::FromStr};

use clap::Parser;
use nfa_determinize::{
    automaton::{dfa::DfaDescription, spec::NfaSpec, Automaton},
    logger::{LogLevel, Logger},
};

/// The output format to emit the converted DFA in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Dot,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Format::Dot),
            "json" => Ok(Format::Json),
            _ => Err(format!("Invalid format: {}", s)),
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Dot => write!(f, "dot"),
            Format::Json => write!(f, "json"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "NFA Determinization Tool")]
#[command(version = "0.1")]
#[command(about = "Convert an NFA with epsilon transitions into an equivalent DFA", long_about = None)]
struct Args {
    /// Path to the textual NFA description.
    file: String,

    #[arg(short, long, default_value_t = Format::Dot)]
    format: Format,

    #[arg(short, long, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let logger = Logger::new(args.log_level, "Determinize".into());

    let input = fs::read_to_string(&args.file)?;
    let spec = NfaSpec::parse(&input)?;
    let nfa = spec.to_nfa()?;

    logger.info(&format!(
        "parsed NFA with {} states and {} regular symbols",
        nfa.state_count(),
        nfa.alphabet().len()
    ));

    let dfa = nfa.determinize();

    logger.info(&format!(
        "DFA has {} states and {} transitions",
        dfa.state_count(),
        dfa.edge_count()
    ));

    let description = DfaDescription::from(&dfa);

    match args.format {
        Format::Dot => println!("{}", description.to_graphviz()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&description)?),
    }

    Ok(())
}
