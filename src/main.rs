use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rayon::prelude::*;
use std::path::PathBuf;

use sortkeys::{
    config::{LintOptions, SortingOrder, SortingPolicy},
    diagnostic::Diagnostic,
    file_handler::FileHandler,
    fix_source, lint_source,
    rules::RuleKind,
};

#[derive(Parser)]
#[command(name = "sortkeys")]
#[command(version)]
#[command(about = "A TypeScript sorted-keys linter with autofix", long_about = None)]
struct Cli {
    #[arg(help = "Files, directories, or glob patterns to lint")]
    paths: Vec<PathBuf>,

    #[arg(long, help = "Apply fixes instead of only reporting")]
    fix: bool,

    #[arg(long, help = "Print fixed output to stdout instead of writing to file")]
    stdout: bool,

    #[arg(long, help = "Skip creating backups of original files")]
    no_backup: bool,

    #[arg(long, default_value = "asc", help = "Expected key order (asc or desc)")]
    order: SortingOrder,

    #[arg(long, help = "Compare keys case-insensitively")]
    insensitive: bool,

    #[arg(long, help = "Compare keys in natural order (digit runs by value)")]
    natural: bool,

    #[arg(long, help = "Expect required members before optional ones")]
    required_first: bool,

    #[arg(long = "rule", help = "Rule to run (repeatable, defaults to all rules)")]
    rules: Vec<RuleKind>,
}

struct FileReport {
    diagnostics: Vec<Diagnostic>,
    changed: bool,
    converged: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.paths.is_empty() {
        eprintln!("{}", "Error: No files or directories specified".red());
        std::process::exit(1);
    }

    let kinds: Vec<RuleKind> = if cli.rules.is_empty() {
        RuleKind::ALL.to_vec()
    } else {
        cli.rules.clone()
    };
    let policy = SortingPolicy {
        order: cli.order,
        case_sensitive: !cli.insensitive,
        natural: cli.natural,
        required_first: cli.required_first,
    };
    let options = LintOptions::with_policy(&kinds, policy);

    let file_handler = FileHandler::new(!cli.no_backup);
    let files = file_handler.find_typescript_files(&cli.paths)?;

    if files.is_empty() {
        println!("{}", "No TypeScript files found".yellow());
        return Ok(());
    }

    // Process files in parallel for better performance
    let results: Vec<_> = files
        .par_iter()
        .map(|file| process_file(&file_handler, file, &cli, &options))
        .collect();

    let mut problem_count = 0;
    let mut fixed_count = 0;
    let mut had_errors = false;

    for (file, result) in files.iter().zip(results.iter()) {
        match result {
            Ok(report) => {
                for diagnostic in &report.diagnostics {
                    problem_count += 1;
                    println!(
                        "{}:{}:{} {} {} {}",
                        file.display(),
                        diagnostic.line,
                        diagnostic.col,
                        "warning".yellow(),
                        diagnostic.message,
                        format!("[{}]", diagnostic.rule).dimmed(),
                    );
                }
                if report.changed {
                    fixed_count += 1;
                    println!("{} {}", "✓".green(), file.display());
                }
                if !report.converged {
                    had_errors = true;
                    eprintln!(
                        "{} {}: fixes did not converge within the pass budget",
                        "✗".red(),
                        file.display()
                    );
                }
            }
            Err(e) => {
                had_errors = true;
                eprintln!("{} {}: {}", "✗".red(), file.display(), e);
            }
        }
    }

    if cli.fix && fixed_count > 0 {
        println!("\n{} {} files", "Fixed".green(), fixed_count);
    }

    if had_errors {
        std::process::exit(1);
    }
    if !cli.fix && problem_count > 0 {
        eprintln!(
            "\n{}",
            format!("Found {} problems", problem_count).red()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn process_file(
    file_handler: &FileHandler,
    path: &PathBuf,
    cli: &Cli,
    options: &LintOptions,
) -> Result<FileReport> {
    let content = file_handler.read_file(path)?;
    let filename = path.to_str().unwrap_or("unknown.ts");

    if cli.fix {
        let outcome = fix_source(&content, filename, options)?;
        let changed = outcome.code != content;

        if changed {
            if cli.stdout {
                println!("{}", outcome.code);
            } else {
                file_handler.write_file(path, &outcome.code)?;
            }
        }

        Ok(FileReport {
            diagnostics: outcome.diagnostics,
            changed,
            converged: outcome.converged,
        })
    } else {
        Ok(FileReport {
            diagnostics: lint_source(&content, filename, options)?,
            changed: false,
            converged: true,
        })
    }
}
