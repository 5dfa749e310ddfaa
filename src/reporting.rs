//! # Reporting Module / 报告模块
//!
//! This module renders verdict reports from the four-query result contract:
//! a colored console summary and an optional JSON document.
//!
//! 此模块根据四查询结果契约渲染判定报告：
//! 彩色控制台摘要和可选的 JSON 文档。

pub mod console;
pub mod json;
