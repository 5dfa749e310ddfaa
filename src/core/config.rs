//! # Configuration Module / 配置模块
//!
//! This module defines the verdict configuration loaded from a TOML file:
//! the runner result format, the result files to correlate, and the report
//! output options.
//!
//! 此模块定义了从 TOML 文件加载的判定配置：
//! 运行器结果格式、要关联的结果文件以及报告输出选项。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// The supported runner result file formats, as a closed set selected once
/// from configuration at load time.
/// 支持的运行器结果文件格式，作为在加载时从配置中一次性选定的封闭集合。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunnerFormat {
    /// xUnit-style XML: class-level summary counts plus per-test trait pairs.
    /// xUnit 风格的 XML：类级摘要计数加每个测试的特征对。
    XUnit,
    /// NUnit-style XML, first schema generation (nested `test-results` tree).
    /// NUnit 风格的 XML，第一代模式（嵌套的 `test-results` 树）。
    NUnit2,
    /// NUnit-style XML, second schema generation (`test-run` tree with
    /// property elements).
    /// NUnit 风格的 XML，第二代模式（带属性元素的 `test-run` 树）。
    NUnit3,
    /// Structured test-run report: a flat list of records keyed by a
    /// qualified test name.
    /// 结构化测试运行报告：按限定测试名称作为键的扁平记录列表。
    Trx,
}

impl FromStr for RunnerFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "xunit" => Ok(RunnerFormat::XUnit),
            "nunit2" => Ok(RunnerFormat::NUnit2),
            "nunit3" => Ok(RunnerFormat::NUnit3),
            "trx" => Ok(RunnerFormat::Trx),
            other => Err(format!(
                "unknown runner format '{}' (expected one of: xunit, nunit2, nunit3, trx)",
                other
            )),
        }
    }
}

impl fmt::Display for RunnerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            RunnerFormat::XUnit => "xunit",
            RunnerFormat::NUnit2 => "nunit2",
            RunnerFormat::NUnit3 => "nunit3",
            RunnerFormat::Trx => "trx",
        };
        write!(f, "{}", tag)
    }
}

/// The entire verdict configuration, loaded from a TOML file.
/// 从 TOML 文件加载的整个判定配置。
#[derive(Debug, Deserialize, Serialize)]
pub struct VerdictConfig {
    /// The language for console messages (e.g., "en", "zh-CN").
    /// Defaults to "en" if not specified.
    ///
    /// 控制台消息的语言（例如 "en", "zh-CN"）。
    /// 如果未指定，则默认为 "en"。
    #[serde(default = "default_language")]
    pub language: String,

    /// The result files section. / 结果文件部分。
    pub results: ResultsConfig,

    /// Report output options. / 报告输出选项。
    #[serde(default)]
    pub report: ReportOptions,
}

/// Which result files to load, and under which format.
/// 要加载哪些结果文件，以及采用哪种格式。
#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsConfig {
    /// The runner format tag every configured file is trusted to follow.
    /// 每个已配置文件被信任遵循的运行器格式标签。
    pub format: RunnerFormat,
    /// Ordered list of result files. An empty list is allowed: every query
    /// then answers `Inconclusive`.
    /// 有序的结果文件列表。允许为空列表：此时每个查询都回答 `Inconclusive`。
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// Optional report outputs beyond the console summary.
/// 控制台摘要之外的可选报告输出。
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReportOptions {
    /// If set, write the verdict report as JSON to this path.
    /// 如果设置，则将判定报告以 JSON 形式写入此路径。
    #[serde(default)]
    pub json: Option<PathBuf>,
}

fn default_language() -> String {
    "en".to_string()
}
