//! 声学词汇表
//!
//! 资产目录与角色契约共享的声学值对象：
//! 性别、年龄区间、基频区间

use serde::{Deserialize, Serialize};

/// 声线性别
///
/// `Neutral` 在匹配时是双向通配符：
/// 中性要求接受任何声线，中性声线满足任何要求
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    /// 判断声线性别是否满足契约要求
    pub fn satisfies(self, required: Gender) -> bool {
        required == Gender::Neutral || self == Gender::Neutral || self == required
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 年龄区间（岁）
///
/// 不变量:
/// - min ≤ max
///
/// 序列化格式为 `[min, max]` 两元素数组，
/// 反序列化时同样强制不变量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
pub struct AgeRange {
    min: u8,
    max: u8,
}

impl AgeRange {
    pub fn new(min: u8, max: u8) -> Result<Self, &'static str> {
        if min > max {
            return Err("年龄区间无效: min 不能大于 max");
        }
        Ok(Self { min, max })
    }

    /// 仅供 crate 内编译期常量数据使用，调用方保证 min ≤ max
    pub(crate) fn new_unchecked(min: u8, max: u8) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// 判断两个年龄区间是否存在非零重叠
    ///
    /// 仅端点相接（如 [30,50] 与 [50,70]）视为无重叠
    pub fn overlaps(&self, other: &AgeRange) -> bool {
        self.max.min(other.max) > self.min.max(other.min)
    }
}

impl TryFrom<[u8; 2]> for AgeRange {
    type Error = &'static str;

    fn try_from(value: [u8; 2]) -> Result<Self, Self::Error> {
        AgeRange::new(value[0], value[1])
    }
}

impl From<AgeRange> for [u8; 2] {
    fn from(range: AgeRange) -> Self {
        [range.min, range.max]
    }
}

impl std::fmt::Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// 基频区间（Hz）
///
/// 不变量:
/// - min ≤ max
///
/// 序列化格式为 `[min, max]` 两元素数组
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PitchRange {
    min_hz: f64,
    max_hz: f64,
}

impl PitchRange {
    pub fn new(min_hz: f64, max_hz: f64) -> Result<Self, &'static str> {
        if min_hz > max_hz {
            return Err("基频区间无效: min 不能大于 max");
        }
        Ok(Self { min_hz, max_hz })
    }

    /// 仅供 crate 内编译期常量数据使用，调用方保证 min ≤ max
    pub(crate) fn new_unchecked(min_hz: f64, max_hz: f64) -> Self {
        debug_assert!(min_hz <= max_hz);
        Self { min_hz, max_hz }
    }

    pub fn min_hz(&self) -> f64 {
        self.min_hz
    }

    pub fn max_hz(&self) -> f64 {
        self.max_hz
    }

    /// 区间宽度，即声线自身的音高波动幅度
    pub fn width_hz(&self) -> f64 {
        self.max_hz - self.min_hz
    }

    /// 判断给定基频是否落在区间内（含端点）
    pub fn contains_hz(&self, hz: f64) -> bool {
        hz >= self.min_hz && hz <= self.max_hz
    }
}

impl TryFrom<[f64; 2]> for PitchRange {
    type Error = &'static str;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        PitchRange::new(value[0], value[1])
    }
}

impl From<PitchRange> for [f64; 2] {
    fn from(range: PitchRange) -> Self {
        [range.min_hz, range.max_hz]
    }
}

impl std::fmt::Display for PitchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}Hz", self.min_hz, self.max_hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_neutral_is_wildcard_both_ways() {
        // 中性要求接受任何声线
        assert!(Gender::Male.satisfies(Gender::Neutral));
        assert!(Gender::Female.satisfies(Gender::Neutral));
        // 中性声线满足任何要求
        assert!(Gender::Neutral.satisfies(Gender::Male));
        assert!(Gender::Neutral.satisfies(Gender::Female));
        // 非中性必须精确匹配
        assert!(Gender::Male.satisfies(Gender::Male));
        assert!(!Gender::Female.satisfies(Gender::Male));
    }

    #[test]
    fn test_age_range_rejects_inverted_bounds() {
        assert!(AgeRange::new(30, 50).is_ok());
        assert!(AgeRange::new(50, 30).is_err());
    }

    #[test]
    fn test_age_range_overlap_is_strict() {
        let a = AgeRange::new(30, 50).unwrap();
        let b = AgeRange::new(45, 65).unwrap();
        let c = AgeRange::new(50, 70).unwrap();
        let d = AgeRange::new(51, 70).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // 端点相接不算重叠
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_age_range_serde_as_pair() {
        let range = AgeRange::new(20, 60).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "[20,60]");

        let parsed: AgeRange = serde_json::from_str("[25,40]").unwrap();
        assert_eq!(parsed.min(), 25);
        assert_eq!(parsed.max(), 40);

        // 反序列化同样强制 min ≤ max
        assert!(serde_json::from_str::<AgeRange>("[40,25]").is_err());
    }

    #[test]
    fn test_pitch_range_width() {
        let range = PitchRange::new(85.0, 140.0).unwrap();
        assert_eq!(range.width_hz(), 55.0);
        assert!(range.contains_hz(85.0));
        assert!(range.contains_hz(140.0));
        assert!(!range.contains_hz(141.0));
    }

    #[test]
    fn test_pitch_range_serde_round_trip() {
        let range = PitchRange::new(80.0, 300.0).unwrap();
        let json = serde_json::to_string(&range).unwrap();
        let back: PitchRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }
}
