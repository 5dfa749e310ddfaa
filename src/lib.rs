//! # Gherkin Verdict Library / Gherkin Verdict 库
//!
//! This library provides the core functionality for the Gherkin Verdict tool,
//! a configuration-driven engine that annotates parsed Gherkin specification
//! documents with Passed / Failed / Inconclusive verdicts correlated from
//! prior test-run result files.
//!
//! 此库为 Gherkin Verdict 工具提供核心功能，
//! 这是一个配置驱动的引擎，它将先前测试运行结果文件中的
//! 通过 / 失败 / 不确定判定关联到已解析的 Gherkin 规格文档上。
//!
//! ## Modules / 模块
//!
//! - `core` - Core data models, verdict algebra and correlation engine
//! - `formats` - Per-runner result file loaders
//! - `infra` - Infrastructure services like file system operations and i18n
//! - `reporting` - Verdict report rendering
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 核心数据模型、判定代数与关联引擎
//! - `formats` - 各测试运行器的结果文件加载器
//! - `infra` - 基础设施服务，如文件系统操作和国际化
//! - `reporting` - 判定报告渲染
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod commands;
pub mod core;
pub mod formats;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::model;
pub use core::results;
pub use core::verdict;
pub use rust_i18n::t;

/// Initializes the application's internationalization (i18n) based on the system locale.
///
/// This function detects the user's system locale and sets the appropriate
/// language for the application's user interface. It attempts to match the full
/// locale (e.g., "zh-CN"), then just the language code (e.g., "en"), and
/// finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
