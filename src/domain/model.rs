use crate::core::parser::DEFAULT_DELIMITER;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// 一筆直接環繞關係：`satellite` 環繞 `center`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrbitPair {
    pub center: String,
    pub satellite: String,
}

impl OrbitPair {
    pub fn new(center: impl Into<String>, satellite: impl Into<String>) -> Self {
        Self {
            center: center.into(),
            satellite: satellite.into(),
        }
    }

    /// 以指定分隔字元還原成輸入檔中的一行
    pub fn to_line(&self, delimiter: char) -> String {
        format!("{}{}{}", self.center, delimiter, self.satellite)
    }
}

impl fmt::Display for OrbitPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line(DEFAULT_DELIMITER))
    }
}

/// 中心天體 -> 直接環繞它的天體集合。
///
/// 沒有衛星的天體不一定有 key；查詢時視為空集合。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrbitMap {
    satellites: HashMap<String, HashSet<String>>,
}

impl OrbitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, pair: OrbitPair) {
        self.satellites
            .entry(pair.center)
            .or_default()
            .insert(pair.satellite);
    }

    pub fn satellites_of(&self, body: &str) -> Option<&HashSet<String>> {
        self.satellites.get(body)
    }

    pub fn contains(&self, body: &str) -> bool {
        self.satellites.contains_key(body)
    }

    /// 有衛星紀錄的中心天體數量
    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    /// 去重後的直接環繞關係數量 (圖中的邊數)
    pub fn direct_orbit_count(&self) -> usize {
        self.satellites.values().map(HashSet::len).sum()
    }

    /// 出現過的所有天體，不論是中心或衛星
    pub fn bodies(&self) -> HashSet<&str> {
        self.satellites
            .iter()
            .flat_map(|(center, sats)| {
                std::iter::once(center.as_str()).chain(sats.iter().map(String::as_str))
            })
            .collect()
    }
}

impl From<HashMap<String, HashSet<String>>> for OrbitMap {
    fn from(satellites: HashMap<String, HashSet<String>>) -> Self {
        Self { satellites }
    }
}

impl FromIterator<OrbitPair> for OrbitMap {
    fn from_iter<I: IntoIterator<Item = OrbitPair>>(iter: I) -> Self {
        let mut map = OrbitMap::new();
        for pair in iter {
            map.insert(pair);
        }
        map
    }
}

/// 一次計算的摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitReport {
    pub center: String,
    pub pair_count: usize,
    pub body_count: usize,
    pub direct_orbits: usize,
    pub total_orbits: u64,
}

impl OrbitReport {
    /// 總數中屬於間接環繞的部分。
    ///
    /// `direct_orbits` 是整張圖的邊數，可能包含從起點走不到的關係，因此用飽和減法。
    pub fn indirect_orbits(&self) -> u64 {
        self.total_orbits.saturating_sub(self.direct_orbits as u64)
    }

    pub fn summary_line(&self) -> String {
        format!("TOTAL ORBIT COUNT: {}", self.total_orbits)
    }
}
