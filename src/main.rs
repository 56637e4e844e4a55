use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use tracing::error;

use bank_statement_normalizer::config::DEFAULT_ACCOUNT_TYPE;
use bank_statement_normalizer::logging::{LogHandle, LogOptions};
use bank_statement_normalizer::{Settings, StatementProcessor};

#[derive(Parser)]
#[command(
    name = "stmt",
    version,
    about = "Normalize bank statement CSV exports",
    long_about = "Normalizes Chase and Bank of America credit card CSV exports: \
                  drops bank-specific columns, splits Amount into Credit and Debit, \
                  removes rows without a value and sorts by date. Without \
                  --output-file, each result is written next to its input as \
                  {bank}-{account type}-{year}-{month}-{hash}.csv."
)]
struct Cli {
    /// Statement CSV files, processed one after another
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Path to the output CSV file (single input only)
    #[arg(short, long, alias = "output_file")]
    output_file: Option<PathBuf>,

    /// Directory for generated output files
    #[arg(short = 'd', long, env = "STMT_OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Account type used in generated file names
    #[arg(short, long, env = "STMT_ACCOUNT_TYPE", default_value = DEFAULT_ACCOUNT_TYPE)]
    account_type: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Also write JSON logs to this file
    #[arg(long, env = "STMT_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn settings(&self) -> Settings {
        let settings = Settings::new().with_account_type(&self.account_type);
        match &self.output_dir {
            Some(dir) => settings.with_output_dir(dir),
            None => settings,
        }
    }
}

/// Returns the number of inputs that failed.
fn process_all(cli: &Cli, settings: &Settings) -> usize {
    let mut failures = 0;

    for input in &cli.inputs {
        let mut processor = StatementProcessor::new().input(input).settings(settings);
        if let Some(output) = &cli.output_file {
            processor = processor.output_file(output);
        }

        match processor.process() {
            Ok(processed) => println!("File saved to {}", processed.output_path.display()),
            Err(err) => {
                error!(file = %input.display(), error = %err, "failed to process statement");
                eprintln!("Error: {err}");
                failures += 1;
            }
        }
    }

    failures
}

fn run(cli: Cli) -> Result<ExitCode> {
    if cli.output_file.is_some() && cli.inputs.len() > 1 {
        bail!("--output-file can only be used with a single input file");
    }

    let settings = cli.settings();
    settings.validate()?;

    let logging = LogHandle::new(&LogOptions {
        verbosity: cli.verbose,
        log_file: cli.log_file.clone(),
    })?;

    let failures = logging.in_scope(|| process_all(&cli, &settings));
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
