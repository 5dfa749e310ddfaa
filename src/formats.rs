//! # Result File Formats Module / 结果文件格式模块
//!
//! One loader per supported runner family. Each loader parses a raw result
//! file once into an immutable, typed run document and answers the four
//! standard verdict queries against it. Queries never touch raw XML.
//!
//! 每个支持的运行器家族一个加载器。每个加载器将原始结果文件一次性解析为
//! 不可变的类型化运行文档，并据此回答四个标准判定查询。查询从不接触原始 XML。

pub mod nunit;
pub mod trx;
pub mod xunit;
