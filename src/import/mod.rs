//! 图文件导入模块
//!
//! 文本格式（逗号分隔）：
//! - 第一行：顶点标签列表，例如 `0,1,2,3`
//! - 之后每行一条边：`起点,终点,权重`
//!
//! 导入器只通过 `add_vertex` / `add_edge` 回放文件内容，不绕过图的不变式。

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Label, Weight};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub vertices_imported: usize,
    pub edges_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 图导入器
#[derive(Debug, Clone, Default)]
pub struct GraphImporter {
    /// 严格模式：遇到第一条无效边即失败，而不是跳过
    strict: bool,
}

impl GraphImporter {
    /// 创建导入器（默认跳过无效行）
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置严格模式
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// 从字符串导入为新图
    pub fn import_str<T>(&self, input: &str) -> Result<(Graph<T>, ImportStats)>
    where
        T: Label + FromStr,
        T::Err: Display,
    {
        let mut graph = Graph::new();
        let stats = self.import_into(&mut graph, input.as_bytes())?;
        Ok((graph, stats))
    }

    /// 从文件导入为新图
    pub fn import_file<T, P>(&self, path: P) -> Result<(Graph<T>, ImportStats)>
    where
        T: Label + FromStr,
        T::Err: Display,
        P: AsRef<Path>,
    {
        let file = File::open(path.as_ref())?;
        let mut graph = Graph::new();
        let stats = self.import_into(&mut graph, file)?;
        debug!(path = %path.as_ref().display(), ?stats, "文件导入完成");
        Ok((graph, stats))
    }

    /// 导入到已有的图
    pub fn import_into<T, R>(&self, graph: &mut Graph<T>, reader: R) -> Result<ImportStats>
    where
        T: Label + FromStr,
        T::Err: Display,
        R: Read,
    {
        let start = std::time::Instant::now();
        let mut stats = ImportStats::default();

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut records = rdr.records();

        // 顶点行
        if let Some(header) = records.next() {
            let header = header?;
            let line = line_of(&header);
            for field in header.iter().filter(|f| !f.is_empty()) {
                let label = parse_label::<T>(field, line)?;
                match graph.add_vertex(label) {
                    Ok(()) => stats.vertices_imported += 1,
                    Err(_) => stats.errors += 1,
                }
            }
        }

        // 边行
        for record in records {
            let record = match record {
                Ok(record) => record,
                Err(e) if self.strict => return Err(e.into()),
                Err(e) => {
                    warn!(error = %e, "跳过无法解码的行");
                    stats.errors += 1;
                    continue;
                }
            };
            // 只含空白的行
            if record.iter().all(str::is_empty) {
                continue;
            }
            match self.import_edge(graph, &record) {
                Ok(()) => stats.edges_imported += 1,
                Err(e) if self.strict => return Err(e),
                Err(e) => {
                    warn!(error = %e, "跳过无效的边");
                    stats.errors += 1;
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        Ok(stats)
    }

    /// 解析并导入单条边
    fn import_edge<T>(&self, graph: &mut Graph<T>, record: &StringRecord) -> Result<()>
    where
        T: Label + FromStr,
        T::Err: Display,
    {
        let line = line_of(record);
        if record.len() != 3 {
            return Err(Error::ImportError {
                line,
                message: format!("边需要 3 个字段，实际为 {} 个", record.len()),
            });
        }

        let start = parse_label::<T>(&record[0], line)?;
        let finish = parse_label::<T>(&record[1], line)?;
        let weight = record[2]
            .parse::<Weight>()
            .map_err(|e| Error::ImportError {
                line,
                message: format!("无效的权重 '{}': {}", &record[2], e),
            })?;

        graph.add_edge(start, finish, weight).map_err(|e| Error::ImportError {
            line,
            message: e.to_string(),
        })?;
        Ok(())
    }
}

fn line_of(record: &StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

fn parse_label<T>(field: &str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    field.parse::<T>().map_err(|e| Error::ImportError {
        line,
        message: format!("无效的顶点标签 '{}': {}", field, e),
    })
}
