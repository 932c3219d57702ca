use crate::domain::model::{OrbitMap, OrbitPair};

/// 把 (center, satellite) 清單收成 [`OrbitMap`]。
///
/// 同一個中心的衛星會合併成一個集合，重複的關係只留一份；輸入順序不影響結果。
pub fn build_orbit_map<I>(pairs: I) -> OrbitMap
where
    I: IntoIterator<Item = OrbitPair>,
{
    let map: OrbitMap = pairs.into_iter().collect();
    tracing::debug!(
        "Built orbit map with {} centers and {} direct orbits",
        map.len(),
        map.direct_orbit_count()
    );
    map
}
