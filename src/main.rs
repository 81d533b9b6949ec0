use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use rayon::prelude::*;
use tracing::{debug, info};

use semi_guard::cli::{CheckArgs, Cli, Commands, InitArgs};
use semi_guard::config::{Config, ConfigLoader, DEFAULT_CONFIG_TEMPLATE, FileConfigLoader};
use semi_guard::lint::{LintReport, Linter};
use semi_guard::output::{JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use semi_guard::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use semi_guard::{
    EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS, SemiGuardError, init_tracing,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> semi_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // 3. Scan paths
    let files = collect_files(&args.paths, &config)?;
    info!(files = files.len(), fix = args.fix, "linting");

    // 4. Lint each file (parallel with rayon)
    let linter = Linter::from_config(&config)?;
    let outcomes: Vec<semi_guard::Result<LintReport>> = files
        .par_iter()
        .map(|path| linter.lint_file(path, args.fix))
        .collect();

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut had_errors = false;
    for outcome in outcomes {
        match outcome {
            Ok(report) => reports.push(report),
            Err(e) => {
                eprintln!("Error: {e}");
                had_errors = true;
            }
        }
    }

    // 5. Write fixes back
    if args.fix {
        write_fixes(&reports)?;
    }

    // 6. Format and write output
    let output = format_output(args.format, &reports, cli)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Determine exit code
    let has_invalid_options = reports.iter().any(|r| r.report.has_invalid_options());
    let has_violations = reports.iter().any(|r| r.report.has_violations());

    if had_errors || has_invalid_options {
        Ok(EXIT_CONFIG_ERROR)
    } else if has_violations {
        Ok(EXIT_VIOLATIONS)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> semi_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
}

fn collect_files(paths: &[PathBuf], config: &Config) -> semi_guard::Result<Vec<PathBuf>> {
    let filter = GlobFilter::new(config.scanner.extensions.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);

    let mut files = Vec::new();
    for path in paths {
        files.extend(scanner.scan(path)?);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn write_fixes(reports: &[LintReport]) -> semi_guard::Result<()> {
    for report in reports {
        let Some(fixed) = &report.report.output else {
            continue;
        };
        fs::write(&report.path, fixed).map_err(|source| SemiGuardError::FileWrite {
            path: report.path.clone(),
            source,
        })?;
        debug!(path = %report.path.display(), fixed = report.report.fixed, "wrote fixes");
    }
    Ok(())
}

fn format_output(
    format: OutputFormat,
    reports: &[LintReport],
    cli: &Cli,
) -> semi_guard::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(reports)
        }
        OutputFormat::Json => JsonFormatter.format(reports),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> semi_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content).map_err(|source| SemiGuardError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> semi_guard::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SemiGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, DEFAULT_CONFIG_TEMPLATE).map_err(|source| {
        SemiGuardError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}
