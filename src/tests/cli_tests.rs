//! Command-line argument and input handling tests.

use crate::{parse_args, read_input, Options};
use pedometer_lib::{config::PipelineConfig, report::Report, Parser};
use std::fs;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn no_arguments_reads_stdin_as_json() {
    assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
}

#[test]
fn all_options_parse() {
    let options = parse_args(args(&["--ascii", "--config", "cfg.toml", "walk.txt"])).unwrap();
    assert!(options.ascii);
    assert_eq!(options.config, Some(PathBuf::from("cfg.toml")));
    assert_eq!(options.input, Some(PathBuf::from("walk.txt")));
}

#[test]
fn bad_arguments_are_rejected() {
    assert!(parse_args(args(&["--config"])).is_err());
    assert!(parse_args(args(&["--verbose"])).is_err());
    assert!(parse_args(args(&["a.txt", "b.txt"])).is_err());
}

#[test]
fn input_file_round_trip_to_report() {
    let file = NamedTempFile::new().expect("Should create temp file");
    fs::write(file.path(), "1,0,0|0,0,1;0,0,2|0,0,1;0,0,3|0,0,1\n").expect("Should write blob");

    let raw = read_input(Some(&file.path().to_path_buf())).expect("Should read blob");
    let parser = Parser::with_config(raw, &PipelineConfig::default()).expect("Should parse");
    let report = Report::from(&parser);

    assert_eq!(report.dot_product, vec![0.0, 2.0, 3.0]);
    assert_eq!(report.filtered.len(), 3);
}

#[test]
fn missing_input_file_is_an_error() {
    let missing = PathBuf::from("/nonexistent/blob.txt");
    let err = read_input(Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("blob.txt"));
}

#[test]
fn config_file_limits_input_size() {
    let file = NamedTempFile::new().expect("Should create temp file");
    fs::write(file.path(), "[parser]\nmax_input_bytes = 4\n").expect("Should write config");

    let config = PipelineConfig::load_from_path(file.path());
    assert_eq!(config.parser.max_input_bytes, Some(4));
    assert!(Parser::with_config("1,1,1", &config).is_err());
}
