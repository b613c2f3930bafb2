//! Logging helpers for algorithm runs.
//!
//! The node captures the container's stdout/stderr into the task log, so
//! plain timestamped lines are all that is needed here. Informational
//! progress goes to stdout, warnings and errors to stderr.

use chrono::Local;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn info(message: &str) {
    println!("{} - [INFO] {message}", timestamp());
}

pub fn warn(message: &str) {
    eprintln!("{} - [WARN] {message}", timestamp());
}

pub fn error(message: &str) {
    eprintln!("{} - [ERROR] {message}", timestamp());
}
