//! Console plus hourly-file logging.
//!
//! Each run appends to `<root>/<subdir>/<Variant>_<YYYY-MM-DD>_<HH>.log`.
//! The file name is re-resolved on every write, so a run crossing an hour
//! boundary rolls over to the next file; append mode keeps consecutive runs
//! in one file. A line that cannot be written is dropped rather than
//! failing the run.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::fmt::writer::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Fixed-width line marking the start and end of every run in the log.
pub const RUN_SEPARATOR: &str =
    "============================================================";

#[derive(Clone)]
pub struct HourlyFileWriter {
    directory: PathBuf,
    variant: &'static str,
}

impl HourlyFileWriter {
    pub fn new(config: &LogConfig) -> io::Result<Self> {
        let directory = config.directory();
        fs::create_dir_all(&directory)?;

        Ok(Self {
            directory,
            variant: config.variant,
        })
    }

    /// Path of the file a write issued right now would land in.
    pub fn current_path(&self) -> PathBuf {
        let now = Local::now();
        self.directory.join(format!(
            "{}_{}_{}.log",
            self.variant,
            now.format("%Y-%m-%d"),
            now.format("%H")
        ))
    }

    fn open(&self) -> io::Result<File> {
        fs::create_dir_all(&self.directory)?;
        OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.current_path())
    }
}

pub enum LogSink {
    File(File),
    Discard,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(file) => file.write(buf),
            LogSink::Discard => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(file) => file.flush(),
            LogSink::Discard => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for HourlyFileWriter {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.open() {
            Ok(file) => LogSink::File(file),
            Err(_) => LogSink::Discard,
        }
    }
}

/// Install the global subscriber: stdout plus the hourly log file.
pub fn init(config: &LogConfig) -> Result<()> {
    let writer = HourlyFileWriter::new(config)?;

    let env_filter = EnvFilter::from_default_env()
        .add_directive("maintctl=info".parse()?)
        .add_directive("opsmgr=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();

    Ok(())
}
