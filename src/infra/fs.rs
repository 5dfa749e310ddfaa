//! # File System Operations Module / 文件系统操作模块
//!
//! This module provides utilities for file system operations,
//! such as reading result files and writing report outputs.
//!
//! 此模块提供文件系统操作的实用功能，
//! 如读取结果文件和写入报告输出。

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a file to a string, attaching the path to any failure.
///
/// # Arguments
/// * `path` - Path to the file to read
///
/// # Returns
/// The file content as a string
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Writes a string to a file, attaching the path to any failure.
///
/// # Arguments
/// * `path` - Destination file path
/// * `content` - Content to write
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
}
