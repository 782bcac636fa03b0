//! 相关推荐
//!
//! 策略:
//! 1. 与目标小说共享任一标签的作品（保持目录顺序）
//! 2. 不足 `limit` 时用其余作品按目录顺序补齐
//! 3. 结果不含目标小说本身，截断到 `limit`

use crate::domain::novel::Novel;

/// 默认推荐数量
pub const DEFAULT_RELATED_LIMIT: usize = 4;

pub fn related_novels<'a>(target: &Novel, catalog: &'a [Novel], limit: usize) -> Vec<&'a Novel> {
    let candidates = catalog.iter().filter(|n| n.id != target.id);

    let mut related: Vec<&Novel> = candidates
        .clone()
        .filter(|n| n.shares_tag_with(target))
        .collect();

    if related.len() < limit {
        let rest: Vec<&Novel> = candidates
            .filter(|n| !related.iter().any(|r| r.id == n.id))
            .collect();
        related.extend(rest);
    }

    related.truncate(limit);
    related
}
