// Tripay 数据模型定义
// 包含响应信封、分页信息以及各接口的请求/响应结构

mod callback;
mod merchant;
mod payment;
mod transaction;

// 重新导出核心类型
pub use callback::*;
pub use merchant::*;
pub use payment::*;
pub use transaction::*;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// 网关标准响应格式
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    /// 请求是否成功
    pub success: bool,
    /// 响应消息
    #[serde(default)]
    pub message: String,
    /// 响应数据 (结构因接口而异)
    #[serde(default)]
    pub data: serde_json::Value,
    /// 分页信息 (仅列表接口返回)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Envelope {
    /// 将 `data` 转换为接口声明的结构
    pub fn data<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }

    /// 消费响应, 拆分出 `data` 与分页信息
    pub fn into_parts<T: DeserializeOwned>(self) -> Result<(T, Option<Pagination>)> {
        let data = serde_json::from_value(self.data)?;
        Ok((data, self.pagination))
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// 升序
    #[default]
    Asc,
    /// 降序
    Desc,
}

impl SortOrder {
    /// 线路上使用的字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// 分页偏移区间
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationOffset {
    /// 起始记录
    pub from: u64,
    /// 结束记录
    pub to: u64,
}

/// 分页信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// 排序方向
    pub sort: SortOrder,
    /// 当前页记录区间
    pub offset: PaginationOffset,
    /// 当前页码
    pub current_page: u32,
    /// 上一页页码
    pub previous_page: Option<u32>,
    /// 下一页页码
    pub next_page: Option<u32>,
    /// 最后一页页码
    pub last_page: u32,
    /// 每页数量
    pub per_page: u32,
    /// 总记录数
    pub total_records: u64,
}

impl Default for Pagination {
    /// 网关未返回分页信息时使用的占位分页
    fn default() -> Self {
        Self {
            sort: SortOrder::Asc,
            offset: PaginationOffset { from: 0, to: 1 },
            current_page: 1,
            previous_page: Some(1),
            next_page: Some(1),
            last_page: 1,
            per_page: 1,
            total_records: 1,
        }
    }
}
