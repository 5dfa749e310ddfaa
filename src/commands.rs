//! # Commands Module / 命令模块
//!
//! This module contains the command handlers for the CLI.
//! 此模块包含 CLI 的命令处理器。

pub mod report;
