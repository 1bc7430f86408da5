//! Asset Context - 声线目录
//!
//! 内存中的只读声线集合：按条件筛选、按要求打分。
//! 迭代顺序即插入顺序，保证最佳匹配平局时结果确定。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::acoustics::Gender;
use crate::domain::contract::VoiceRequirements;

use super::{registry, AssetId, Capability, VoiceAsset};

// ==================== 兼容性评分扣分表 ====================

const GENDER_MISMATCH_PENALTY: i32 = 50;
const AGE_MISMATCH_PENALTY: i32 = 30;
const PITCH_RANGE_PENALTY: i32 = 15;
const PITCH_VARIANCE_PENALTY: i32 = 20;
const TEMPO_PENALTY: i32 = 15;
const LOUDNESS_PENALTY: i32 = 15;

/// 基频区间允许超出要求边界的容差（Hz）
const PITCH_EDGE_TOLERANCE_HZ: f64 = 20.0;

/// 目录筛选条件
///
/// 所有条件取逻辑与；`None` / 空集合表示该维度不限
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pitch_variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tempo_wpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loudness: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_capabilities: Vec<Capability>,
}

/// 单次兼容性评估的结论
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// 0-100
    pub score: u8,
    pub issues: Vec<String>,
}

/// 声线目录
///
/// Vec 保存插入顺序，id 索引提供 O(1) 查找。
/// 同 id 重复插入时后者原位替换前者，位置不变。
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    assets: Vec<VoiceAsset>,
    index: HashMap<String, usize>,
}

impl AssetCatalog {
    pub fn from_assets(assets: Vec<VoiceAsset>) -> Self {
        let mut catalog = Self {
            assets: Vec::with_capacity(assets.len()),
            index: HashMap::with_capacity(assets.len()),
        };
        for asset in assets {
            match catalog.index.get(asset.id.as_str()).copied() {
                Some(pos) => catalog.assets[pos] = asset,
                None => {
                    catalog.index.insert(asset.id.as_str().to_string(), catalog.assets.len());
                    catalog.assets.push(asset);
                }
            }
        }
        catalog
    }

    /// 内置声线表
    pub fn builtin() -> Self {
        Self::from_assets(registry::builtin_assets())
    }

    pub fn get(&self, id: &AssetId) -> Option<&VoiceAsset> {
        self.index.get(id.as_str()).map(|&pos| &self.assets[pos])
    }

    /// 全部声线，插入顺序
    pub fn all(&self) -> &[VoiceAsset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// 按条件筛选声线，保持目录顺序
    pub fn find_by_query(&self, query: &AssetQuery) -> Vec<&VoiceAsset> {
        self.assets
            .iter()
            .filter(|asset| Self::matches(asset, query))
            .collect()
    }

    fn matches(asset: &VoiceAsset, query: &AssetQuery) -> bool {
        if let Some(gender) = query.gender {
            if !asset.gender.satisfies(gender) {
                return false;
            }
        }

        if let Some(min_age) = query.min_age {
            if asset.age_range.max() < min_age {
                return false;
            }
        }
        if let Some(max_age) = query.max_age {
            if asset.age_range.min() > max_age {
                return false;
            }
        }

        if let Some(max_variance) = query.max_pitch_variance {
            if asset.pitch_width_hz() > max_variance {
                return false;
            }
        }

        if let Some(max_tempo) = query.max_tempo_wpm {
            if asset.typical_tempo_wpm > max_tempo {
                return false;
            }
        }

        if let Some(max_loudness) = query.max_loudness {
            if asset.typical_loudness > max_loudness {
                return false;
            }
        }

        if !query.required_tags.iter().all(|tag| asset.has_tag(tag)) {
            return false;
        }

        if query
            .excluded_capabilities
            .iter()
            .any(|&cap| asset.has_capability(cap))
        {
            return false;
        }

        true
    }
}

/// 计算声线对一组要求的兼容性评分
///
/// 单遍启发式：满分 100，逐项扣分，下限 0。
/// 仅用于候选排序参考，契约执行使用 enforcement 模块的规则
pub fn compatibility_score(
    asset: &VoiceAsset,
    requirements: &VoiceRequirements,
) -> CompatibilityReport {
    let mut score: i32 = 100;
    let mut issues = Vec::new();

    if !asset.gender.satisfies(requirements.gender) {
        score -= GENDER_MISMATCH_PENALTY;
        issues.push(format!(
            "Gender mismatch: requires {}, voice is {}",
            requirements.gender, asset.gender
        ));
    }

    if !asset.age_range.overlaps(&requirements.age_range) {
        score -= AGE_MISMATCH_PENALTY;
        issues.push(format!(
            "Age mismatch: requires {}, voice is {}",
            requirements.age_range, asset.age_range
        ));
    }

    if asset.pitch_range_hz.min_hz() < requirements.pitch_range_hz.min_hz() - PITCH_EDGE_TOLERANCE_HZ
        || asset.pitch_range_hz.max_hz()
            > requirements.pitch_range_hz.max_hz() + PITCH_EDGE_TOLERANCE_HZ
    {
        score -= PITCH_RANGE_PENALTY;
        issues.push(format!(
            "Pitch range mismatch: requires {}",
            requirements.pitch_range_hz
        ));
    }

    let pitch_width = asset.pitch_width_hz();
    if pitch_width > requirements.max_pitch_variance {
        score -= PITCH_VARIANCE_PENALTY;
        issues.push(format!(
            "Too much pitch variance: {}Hz exceeds max {}Hz",
            pitch_width, requirements.max_pitch_variance
        ));
    }

    if asset.typical_tempo_wpm > requirements.max_tempo_wpm {
        score -= TEMPO_PENALTY;
        issues.push(format!(
            "Tempo too fast: {}wpm exceeds max {}wpm",
            asset.typical_tempo_wpm, requirements.max_tempo_wpm
        ));
    }

    if asset.typical_loudness > requirements.max_loudness {
        score -= LOUDNESS_PENALTY;
        issues.push(format!(
            "Too loud: loudness {} exceeds max {}",
            asset.typical_loudness, requirements.max_loudness
        ));
    }

    CompatibilityReport {
        score: score.max(0) as u8,
        issues,
    }
}
