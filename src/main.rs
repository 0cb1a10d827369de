use clap::{Parser, Subcommand};
use panchayat_vote::commands::{regions, run, validate};
use panchayat_vote::election::validator::VoterField;
use std::path::PathBuf;

#[derive(Parser)]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run an election scenario and print the report.
    Run {
        /// Scenario JSON file
        scenario: PathBuf,
        /// Write the report as JSON to this path
        #[clap(long)]
        output: Option<PathBuf>,
    },
    /// Sum the votes of a nested region tree.
    Regions {
        /// Region tree JSON file
        tree: PathBuf,
    },
    /// Check voter applications against a rule set.
    Validate {
        /// Applications JSON file (an array; entries may be null or partial)
        applications: PathBuf,
        /// Minimum age rule
        #[clap(long, default_value_t = 18)]
        min_age: u32,
        /// Required field (id, name or age); may be given more than once
        #[clap(long = "require", value_name = "FIELD")]
        required_fields: Vec<VoterField>,
    },
}

fn main() {
    let opts = Opts::parse();

    let outcome = match opts.command {
        Command::Run { scenario, output } => run(&scenario, output.as_deref()),
        Command::Regions { tree } => regions(&tree),
        Command::Validate {
            applications,
            min_age,
            required_fields,
        } => validate(&applications, min_age, required_fields),
    };

    if let Err(err) = outcome {
        eprintln!("❌ {}", err);
        std::process::exit(1);
    }
}
