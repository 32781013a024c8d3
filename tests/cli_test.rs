use clap::Parser;
use promptforge::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("promptforge")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_default_args() {
    let args = make_args(&[]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.target, None);
    assert_eq!(parsed.config, PathBuf::from("promptforge.yaml"));
    assert!(!parsed.clean);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--target",
        ".github",
        "--clean",
        "--config",
        "custom.yaml",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.target.as_deref(), Some(".github"));
    assert_eq!(parsed.config, PathBuf::from("custom.yaml"));
    assert!(parsed.clean);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-t", ".opencode", "-c", "other.yaml", "-v"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.target.as_deref(), Some(".opencode"));
    assert_eq!(parsed.config, PathBuf::from("other.yaml"));
    assert!(parsed.verbose);
}

#[test]
fn test_unexpected_positional_arg() {
    let args = make_args(&["extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
