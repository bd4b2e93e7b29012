//! 目录统计

use crate::errors::Result;
use crate::models::languages::entities::TranslationProject;
use crate::models::stats::responses::Stats;
use crate::storage::Storage;

/// 路径统计，`children` 只包含传入的翻译项目，以项目代码为键
///
/// 一次存储查询同时得到父路径和各翻译项目的数据，没有单元的翻译项目记为零。
pub async fn get_stats(
    storage: &dyn Storage,
    pootle_path: &str,
    children: &[TranslationProject],
) -> Result<Stats> {
    let mut stats = storage.get_stats(pootle_path).await?;
    let mut by_path = std::mem::take(&mut stats.children);
    for tp in children {
        let child = by_path.remove(&tp.pootle_path).unwrap_or_default();
        stats.children.insert(tp.code().to_string(), child);
    }
    Ok(stats)
}
