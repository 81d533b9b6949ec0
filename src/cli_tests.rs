use std::path::PathBuf;

use clap::Parser;

use super::*;

fn check_args(args: &[&str]) -> CheckArgs {
    let mut argv = vec!["semi-guard", "check"];
    argv.extend_from_slice(args);
    match Cli::parse_from(argv).command {
        Commands::Check(args) => args,
        Commands::Init(_) => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_default_path() {
    let args = check_args(&[]);
    assert_eq!(args.paths, vec![PathBuf::from(".")]);
    assert!(!args.fix);
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn cli_check_with_paths() {
    let args = check_args(&["styles", "theme.css"]);
    assert_eq!(
        args.paths,
        vec![PathBuf::from("styles"), PathBuf::from("theme.css")]
    );
}

#[test]
fn cli_check_with_config_and_fix() {
    let args = check_args(&["--config", "custom.toml", "--fix"]);
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert!(args.fix);
}

#[test]
fn cli_check_with_extensions() {
    let args = check_args(&["--ext", "css,less"]);
    assert_eq!(args.ext, Some(vec!["css".to_string(), "less".to_string()]));
}

#[test]
fn cli_check_with_excludes() {
    let args = check_args(&["-x", "**/vendor/**", "--exclude", "*.min.css"]);
    assert_eq!(args.exclude, vec!["**/vendor/**", "*.min.css"]);
}

#[test]
fn cli_check_with_format_and_output() {
    let args = check_args(&["--format", "json", "-o", "report.json"]);
    assert_eq!(args.format, OutputFormat::Json);
    assert_eq!(args.output, Some(PathBuf::from("report.json")));
}

#[test]
fn cli_check_rejects_unknown_format() {
    let result = Cli::try_parse_from(["semi-guard", "check", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["semi-guard", "check", "-vv", "--quiet", "--color", "never", "--no-config"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["semi-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".semi-guard.toml"));
            assert!(!args.force);
        }
        Commands::Check(_) => panic!("Expected Init command"),
    }
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}
