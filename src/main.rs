use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use lintsweep::checker::{Checker, LineChecker};
use lintsweep::cli::{CheckArgs, Cli, Commands, WatchArgs};
use lintsweep::options::{OptionOverlay, OptionSet};
use lintsweep::report::{CheckProgress, ErrorReport, HtmlReportWriter, RunSummary};
use lintsweep::runner::{FileCheckRunner, FileOutcome, TreeRunner};
use lintsweep::scanner::{DirectoryScanner, TypeFilter};
use lintsweep::watch::WatchRegistry;
use lintsweep::{
    EXIT_CHECKER_UNAVAILABLE, EXIT_CONFIG_ERROR, EXIT_LINT_ERRORS, EXIT_SUCCESS, LintSweepError,
    REPORT_DIR,
};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Watch(args) => run_watch(args, &cli),
    };

    std::process::exit(exit_code);
}

const fn error_exit_code(error: &LintSweepError) -> i32 {
    match error {
        LintSweepError::CheckerUnavailable(_) => EXIT_CHECKER_UNAVAILABLE,
        _ => EXIT_CONFIG_ERROR,
    }
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            error_exit_code(&e)
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> lintsweep::Result<i32> {
    // 1. Bring up the checker before touching any file; an unavailable
    //    checker aborts the whole run.
    let checker: Arc<dyn Checker> = Arc::new(LineChecker::new()?);
    if !cli.quiet {
        println!("Using checker edition {}", checker.edition());
    }

    // 2. Build the layered option set once for the whole run
    let options = build_options(
        args.config.clone(),
        &args.enable,
        &args.disable,
        args.max_errors,
        args.max_length,
        &args.globals,
    );

    // 3. Wire the file filter, scanner, and runner
    let filter = TypeFilter::new(&args.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let runner = FileCheckRunner::new(checker, options.clone());
    let tree = TreeRunner::new(runner, scanner);

    let html = args
        .html
        .then(|| HtmlReportWriter::new(REPORT_DIR, args.paths.len() > 1, &options));
    let report = ErrorReport::new(cli.color.into(), !args.show_path);

    // 4. Start every walk before draining any of them, so discovery and
    //    checking overlap across roots
    if !cli.quiet {
        for path in &args.paths {
            println!("Scheduled to check: {}", path.display());
        }
    }
    let walks: Vec<_> = args.paths.iter().map(|path| tree.start(path)).collect();

    let progress = CheckProgress::new(cli.quiet || !args.html);
    let mut summary = RunSummary::new();
    let mut scheduled: u64 = 0;

    for walk in walks {
        let verbose = cli.verbose;
        let tree_report = walk.drive_with_totals(
            |total| {
                // Grow the bar as each root's discovery reports its count,
                // so the fraction is live while checks are still running.
                scheduled += total as u64;
                progress.set_total(scheduled);
            },
            |path, outcome, root| {
                progress.inc();
                match outcome {
                    FileOutcome::Checked(result) => {
                        if let Some(writer) = &html {
                            if let Err(e) = writer.save(result, root, path) {
                                eprintln!("Warning: {e}");
                            }
                        } else if result.num_errors() > 0 || verbose > 0 {
                            report.print_result(result, path);
                        }
                    }
                    FileOutcome::Skipped(reason) => {
                        eprintln!("Warning: cannot check {}: {reason}", path.display());
                    }
                }
            },
        );

        summary.fold(&tree_report);

        // The summary is rewritten as each root finishes so an interrupted
        // run still leaves the latest totals behind.
        if args.summary
            && let Err(e) = summary.save()
        {
            eprintln!("Warning: {e}");
        }
    }
    progress.finish();

    if !cli.quiet {
        println!("Completed checking all paths provided");
        println!("{}", summary.record());
    }
    if args.summary
        && let Err(e) = summary.save()
    {
        eprintln!("Warning: {e}");
    }

    if summary.total_errors > 0 {
        Ok(EXIT_LINT_ERRORS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn run_watch(args: &WatchArgs, cli: &Cli) -> i32 {
    match run_watch_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            error_exit_code(&e)
        }
    }
}

fn run_watch_impl(args: &WatchArgs, cli: &Cli) -> lintsweep::Result<i32> {
    let checker: Arc<dyn Checker> = Arc::new(LineChecker::new()?);
    if !cli.quiet {
        println!("Using checker edition {}", checker.edition());
        println!("Watching {} (Ctrl-C to stop)", args.path.display());
    }

    let options = build_options(
        args.config.clone(),
        &args.enable,
        &args.disable,
        args.max_errors,
        args.max_length,
        &args.globals,
    );

    let runner = FileCheckRunner::new(checker, options);
    let report = ErrorReport::new(cli.color.into(), !args.show_path);

    let registry = WatchRegistry::new();
    registry.watch(&args.path, move |path| match runner.check_file(path) {
        FileOutcome::Checked(result) => report.print_result(&result, path),
        FileOutcome::Skipped(reason) => {
            eprintln!("Error: failed to check {}: {reason}", path.display());
        }
    })?;

    // The watch thread does all further work; park until the process is
    // interrupted.
    loop {
        std::thread::park();
    }
}

fn build_options(
    config: Option<PathBuf>,
    enable: &[String],
    disable: &[String],
    max_errors: Option<usize>,
    max_length: Option<usize>,
    globals: &[String],
) -> OptionSet {
    OptionOverlay::new()
        .with_base_file(config)
        .with_enabled(enable.to_vec())
        .with_disabled(disable.to_vec())
        .with_max_errors(max_errors)
        .with_max_length(max_length)
        .with_predef(globals.to_vec())
        .load()
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
