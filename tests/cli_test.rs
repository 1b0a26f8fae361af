use clap::Parser;
use pingen::cli::Args;
use pingen::constants::{FIXED_OUTPUT, FIXED_TEMPLATE_DIR, FIXED_TEMPLATE_NAME};
use pingen::loader::TemplateSource;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("pingen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_defaults() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.config, PathBuf::from("config.yaml"));
    assert_eq!(parsed.root, PathBuf::from("."));
    assert!(parsed.exclude.is_empty());
    assert!(!parsed.fixed);
    assert!(!parsed.verbose);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--config",
        "board.yaml",
        "--root",
        "lib",
        "--exclude",
        "vendor/**",
        "-e",
        "**/*.h.j2",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.config, PathBuf::from("board.yaml"));
    assert_eq!(parsed.root, PathBuf::from("lib"));
    assert_eq!(parsed.exclude, vec!["vendor/**", "**/*.h.j2"]);
    assert!(parsed.verbose);
}

#[test]
fn test_recursive_source() {
    let parsed = Args::try_parse_from(make_args(&["-r", "lib"])).unwrap();
    match parsed.template_source().unwrap() {
        TemplateSource::Tree { root, .. } => assert_eq!(root, PathBuf::from("lib")),
        other => panic!("Expected Tree source, got {:?}", other),
    }
}

#[test]
fn test_fixed_source_defaults_to_designated_artifact() {
    let parsed = Args::try_parse_from(make_args(&["--fixed"])).unwrap();
    match parsed.template_source().unwrap() {
        TemplateSource::File { template, output } => {
            assert_eq!(template, Path::new(FIXED_TEMPLATE_DIR).join(FIXED_TEMPLATE_NAME));
            assert_eq!(output, Some(PathBuf::from(FIXED_OUTPUT)));
        }
        other => panic!("Expected File source, got {:?}", other),
    }
}

#[test]
fn test_fixed_template_override_derives_output() {
    let parsed =
        Args::try_parse_from(make_args(&["--fixed", "-t", "board/templates/pins.c.j2"])).unwrap();
    match parsed.template_source().unwrap() {
        TemplateSource::File { template, output } => {
            assert_eq!(template, PathBuf::from("board/templates/pins.c.j2"));
            assert_eq!(output, None);
        }
        other => panic!("Expected File source, got {:?}", other),
    }
}

#[test]
fn test_fixed_output_override() {
    let parsed = Args::try_parse_from(make_args(&["--fixed", "-o", "out/setup.c"])).unwrap();
    match parsed.template_source().unwrap() {
        TemplateSource::File { template, output } => {
            assert_eq!(template, Path::new(FIXED_TEMPLATE_DIR).join(FIXED_TEMPLATE_NAME));
            assert_eq!(output, Some(PathBuf::from("out/setup.c")));
        }
        other => panic!("Expected File source, got {:?}", other),
    }
}

#[test]
fn test_template_requires_fixed() {
    assert!(Args::try_parse_from(make_args(&["--template", "x.c.j2"])).is_err());
    assert!(Args::try_parse_from(make_args(&["--output", "x.c"])).is_err());
}

#[test]
fn test_fixed_conflicts_with_root() {
    assert!(Args::try_parse_from(make_args(&["--fixed", "--root", "lib"])).is_err());
}

#[test]
fn test_invalid_exclude_pattern() {
    let parsed = Args::try_parse_from(make_args(&["-e", "lib/[a"])).unwrap();
    assert!(parsed.template_source().is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["extra"])).is_err());
}
