//! 通用类型定义

use std::fmt;
use std::hash::Hash;

/// 边权重
pub type Weight = f64;

/// 结果中表示“不可达”或“端点不存在”的距离哨兵值
pub const UNREACHABLE: i64 = -1;

/// 顶点标签
///
/// 任何可比较、可哈希、可克隆的类型都可以作为标签（整数、字符串等）。
pub trait Label: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Label for T {}

/// 将内部浮点距离转换为对外报告的整数距离（向零截断，不四舍五入）
pub fn truncate_distance(distance: Weight) -> i64 {
    if distance.is_finite() {
        distance.trunc() as i64
    } else {
        UNREACHABLE
    }
}
