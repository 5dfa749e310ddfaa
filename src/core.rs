//! # Core Module / 核心模块
//!
//! This module contains the data models and the correlation engine:
//! the verdict algebra, the specification object model, example signature
//! building, and the single-run / composite result queries.
//!
//! 此模块包含数据模型和关联引擎：
//! 判定代数、规格对象模型、示例签名构建，
//! 以及单次运行 / 组合结果查询。

pub mod config;
pub mod model;
pub mod results;
pub mod signature;
pub mod verdict;
