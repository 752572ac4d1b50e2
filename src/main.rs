use anyhow::{Context, Result};
use batchdiff::areas::comparator::BatchComparator;
use batchdiff::areas::run_log::{LOG_DIR_NAME, RunLog};
use batchdiff::artifacts::pairs::pairing_rule::{
    DEFAULT_EXTENSIONS, DEFAULT_FILE1, DEFAULT_FILE2, PairingRule,
};
use batchdiff::commands::report::write_summary;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use is_terminal::IsTerminal;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "batchdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Batch line-level comparison of file pairs",
    long_about = "Compares a pair of files inside every sub-folder of a root folder. \
    Pairs are selected either by two fixed file names or by extension, \
    and every difference is written to a timestamped run log.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Print diagnostics to stderr (-v info, -vv debug)"
    )]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "by-name",
        about = "Compare two fixed file names in every sub-folder",
        long_about = "This command compares <FILE1> against <FILE2> inside every immediate \
        sub-folder of the root. Folders missing either file are reported and skipped."
    )]
    ByName {
        #[arg(index = 1, help = "The folder whose sub-folders are compared")]
        root: PathBuf,
        #[arg(long, default_value = DEFAULT_FILE1, help = "Name of the first file")]
        file1: String,
        #[arg(long, default_value = DEFAULT_FILE2, help = "Name of the second file")]
        file2: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    #[command(
        name = "by-ext",
        about = "Compare the first two files of each extension in every sub-folder",
        long_about = "This command groups the files of every immediate sub-folder by extension \
        (case-insensitive) and compares the first two files of each group in name order. \
        A group with a single file is reported and skipped."
    )]
    ByExt {
        #[arg(index = 1, help = "The folder whose sub-folders are compared")]
        root: PathBuf,
        #[arg(
            short = 'e',
            long = "ext",
            help = "Extension to pair on, may be repeated (default: .nc, .txt)"
        )]
        extensions: Vec<String>,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long, help = "Directory for the run log (default: <root>/../file_diff_logs)")]
    log_dir: Option<PathBuf>,
    #[arg(long, help = "Do not write a log file, only echo to stderr")]
    no_log_file: bool,
    #[arg(long, help = "Print the summary as JSON")]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::init_from_env(Env::default().default_filter_or(filter));
    colored::control::set_override(std::io::stdout().is_terminal());

    let (root, rule, output) = match cli.command {
        Commands::ByName {
            root,
            file1,
            file2,
            output,
        } => (root, PairingRule::by_name(file1, file2), output),
        Commands::ByExt {
            root,
            extensions,
            output,
        } => {
            let rule = if extensions.is_empty() {
                PairingRule::by_extension(DEFAULT_EXTENSIONS)
            } else {
                PairingRule::by_extension(extensions)
            };
            (root, rule, output)
        }
    };

    let root = root
        .canonicalize()
        .with_context(|| format!("Root folder {} does not exist", root.display()))?;
    if !root.is_dir() {
        anyhow::bail!("Root {} is not a folder", root.display());
    }
    let log = open_run_log(&root, &output)?;
    log::info!("comparing sub-folders of {} {}", root.display(), rule);

    let comparator = BatchComparator::new(&root, rule, log)?;
    let summary = comparator.run();
    comparator.into_log().finish()?;

    let Some(summary) = summary? else {
        anyhow::bail!("Nothing was compared in {}", root.display());
    };

    let mut stdout = std::io::stdout();
    if output.json {
        serde_json::to_writer_pretty(&mut stdout, &summary)?;
        writeln!(stdout)?;
    } else {
        write_summary(&mut stdout, &summary)?;
    }

    Ok(())
}

fn open_run_log(root: &Path, output: &OutputArgs) -> Result<RunLog> {
    let log = RunLog::new(vec![Box::new(std::io::stderr()) as Box<dyn Write>]);
    if output.no_log_file {
        return Ok(log);
    }

    let dir = match &output.log_dir {
        Some(dir) => dir.clone(),
        None => root.parent().unwrap_or(root).join(LOG_DIR_NAME),
    };

    log.with_file_in(&dir)
}
