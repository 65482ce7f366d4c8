use std::str::FromStr;
use std::time::Instant;

use dashmap::DashMap;
use tracing::Level;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
	fmt::{self, format::FmtSpan},
	layer::SubscriberExt,
	util::SubscriberInitExt,
	EnvFilter, Layer,
};

use crate::constants::file;
use crate::error::{Result, SrganError};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
	pub level: Level,
	pub format: LogFormat,
	/// Also write JSON logs to a daily rolling file in this directory.
	pub log_directory: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
	Compact,
	Pretty,
	Json,
}

impl LogFormat {
	pub fn from_label(label: &str) -> Result<Self> {
		match label {
			"compact" => Ok(LogFormat::Compact),
			"pretty" => Ok(LogFormat::Pretty),
			"json" => Ok(LogFormat::Json),
			_ => Err(SrganError::InvalidParameter(format!(
				"Unknown log format: {}. Use compact, pretty or json",
				label
			))),
		}
	}
}

impl Default for LogConfig {
	fn default() -> Self {
		LogConfig {
			level: Level::INFO,
			format: LogFormat::Compact,
			log_directory: None,
		}
	}
}

impl LogConfig {
	pub fn from_labels(level: &str, format: &str, log_directory: Option<String>) -> Result<Self> {
		let level = Level::from_str(level)
			.map_err(|_| SrganError::InvalidParameter(format!("Unknown log level: {}", level)))?;
		Ok(LogConfig {
			level,
			format: LogFormat::from_label(format)?,
			log_directory,
		})
	}
}

/// Initialize the logging system.
///
/// When file logging is enabled the returned guard must be held until exit, or buffered lines
/// are lost.
pub fn init_logging(config: LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
	let env_filter = EnvFilter::from_default_env().add_directive(config.level.into());

	let fmt_layer = match config.format {
		LogFormat::Compact => fmt::layer()
			.compact()
			.with_writer(std::io::stderr)
			.with_span_events(FmtSpan::CLOSE)
			.boxed(),
		LogFormat::Pretty => fmt::layer()
			.pretty()
			.with_writer(std::io::stderr)
			.with_span_events(FmtSpan::CLOSE)
			.boxed(),
		LogFormat::Json => fmt::layer()
			.json()
			.with_writer(std::io::stderr)
			.with_span_events(FmtSpan::CLOSE)
			.boxed(),
	};

	let subscriber = tracing_subscriber::registry().with(env_filter).with(fmt_layer);

	match config.log_directory {
		Some(log_dir) => {
			std::fs::create_dir_all(&log_dir)?;
			let file_appender = rolling::daily(&log_dir, file::LOG_FILE_NAME);
			let (writer, guard) = non_blocking(file_appender);
			let file_layer = fmt::layer().json().with_writer(writer);

			subscriber.with(file_layer).try_init()?;
			Ok(Some(guard))
		},
		None => {
			subscriber.try_init()?;
			Ok(None)
		},
	}
}

/// Operation logger for tracking individual operations
pub struct OperationLogger {
	operation_id: String,
	start_time: Instant,
	metadata: DashMap<String, String>,
}

impl OperationLogger {
	pub fn new(operation_id: impl Into<String>) -> Self {
		let operation_id = operation_id.into();
		tracing::debug!(operation_id = %operation_id, "Operation started");

		OperationLogger {
			operation_id,
			start_time: Instant::now(),
			metadata: DashMap::new(),
		}
	}

	pub fn add_metadata(&self, key: impl Into<String>, value: impl ToString) {
		self.metadata.insert(key.into(), value.to_string());
	}

	pub fn metadata(&self, key: &str) -> Option<String> {
		self.metadata.get(key).map(|entry| entry.value().clone())
	}

	pub fn log_progress(&self, message: impl AsRef<str>) {
		tracing::debug!(
			operation_id = %self.operation_id,
			elapsed_ms = self.start_time.elapsed().as_millis() as u64,
			message = %message.as_ref(),
			"Operation progress"
		);
	}

	pub fn log_error(&self, error: &dyn std::error::Error) {
		tracing::error!(
			operation_id = %self.operation_id,
			elapsed_ms = self.start_time.elapsed().as_millis() as u64,
			error = %error,
			"Operation failed"
		);
	}

	pub fn complete(self) {
		let metadata: std::collections::BTreeMap<String, String> = self
			.metadata
			.iter()
			.map(|entry| (entry.key().clone(), entry.value().clone()))
			.collect();

		tracing::info!(
			operation_id = %self.operation_id,
			elapsed_ms = self.start_time.elapsed().as_millis() as u64,
			metadata = ?metadata,
			"Operation completed"
		);
	}
}
