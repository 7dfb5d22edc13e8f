//! Tests for the hourly log file writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::TempDir;
use tracing_subscriber::fmt::writer::MakeWriter;

use maintctl::config::LogConfig;
use maintctl::logging::HourlyFileWriter;

fn log_config(root: &Path) -> LogConfig {
    LogConfig {
        root: root.to_path_buf(),
        subdir: "maintenance".to_string(),
        variant: "Enable",
    }
}

/// Everything written to any hourly file under the log directory
fn collected_output(config: &LogConfig) -> String {
    let mut content = String::new();
    for entry in fs::read_dir(config.directory()).unwrap() {
        content.push_str(&fs::read_to_string(entry.unwrap().path()).unwrap());
    }
    content
}

#[test]
fn creates_the_log_directory_tree() {
    let tmp = TempDir::new().unwrap();
    let config = log_config(&tmp.path().join("logs"));

    let writer = HourlyFileWriter::new(&config).unwrap();

    assert!(config.directory().is_dir());

    let path = writer.current_path();
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("Enable_"), "unexpected file name {}", name);
    assert!(name.ends_with(".log"), "unexpected file name {}", name);
}

#[test]
fn consecutive_writes_append_to_the_same_hourly_file() {
    let tmp = TempDir::new().unwrap();
    let config = log_config(&tmp.path().join("logs"));
    let writer = HourlyFileWriter::new(&config).unwrap();

    writer.make_writer().write_all(b"first run\n").unwrap();
    writer.make_writer().write_all(b"second run\n").unwrap();

    let content = collected_output(&config);
    assert!(content.contains("first run"));
    assert!(content.contains("second run"));
}

#[test]
fn recreates_the_directory_if_it_disappears() {
    let tmp = TempDir::new().unwrap();
    let config = log_config(&tmp.path().join("logs"));
    let writer = HourlyFileWriter::new(&config).unwrap();

    fs::remove_dir_all(config.directory()).unwrap();
    writer.make_writer().write_all(b"after removal\n").unwrap();

    assert!(collected_output(&config).contains("after removal"));
}

#[test]
fn an_unwritable_destination_drops_lines_instead_of_failing() {
    let tmp = TempDir::new().unwrap();
    let config = log_config(&tmp.path().join("logs"));
    let writer = HourlyFileWriter::new(&config).unwrap();

    // Block the log directory path with a plain file
    fs::remove_dir_all(config.directory()).unwrap();
    fs::write(config.directory(), b"not a directory").unwrap();

    writer.make_writer().write_all(b"dropped\n").unwrap();
}

#[test]
fn variant_drives_the_file_name() {
    let tmp = TempDir::new().unwrap();
    let config = LogConfig {
        root: tmp.path().to_path_buf(),
        subdir: "maintenance".to_string(),
        variant: "Disable",
    };
    let writer = HourlyFileWriter::new(&config).unwrap();

    let name = writer.current_path();
    let name = name.file_name().unwrap().to_str().unwrap().to_string();
    assert!(name.starts_with("Disable_"));
}
