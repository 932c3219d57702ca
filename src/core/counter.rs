use crate::domain::model::OrbitMap;
use std::collections::HashSet;

pub const DEFAULT_CENTER: &str = "COM";

/// 計算從 `start` 出發的直接與間接環繞總數。
///
/// 每個可到達的天體貢獻它與起點的距離 (直接衛星為 1，衛星的衛星為 2，依此類推)；
/// 同一天體若有多條路徑可到達，每條路徑各算一次。起點不在圖中時結果為 0。
///
/// 用顯式堆疊走訪，長鏈不會耗盡呼叫堆疊。圖必須是無環的，
/// 有環的輸入請先用 [`find_cycle`] 檢查，否則不會結束。
pub fn count_orbits(map: &OrbitMap, start: &str) -> u64 {
    let mut total: u64 = 0;
    let mut stack: Vec<(&str, u64)> = vec![(start, 0)];

    while let Some((body, depth)) = stack.pop() {
        let Some(satellites) = map.satellites_of(body) else {
            continue;
        };

        let depth = depth + 1;
        total += depth * satellites.len() as u64;
        stack.extend(satellites.iter().map(|sat| (sat.as_str(), depth)));
    }

    total
}

/// 找出從 `start` 可到達的第一個環，回傳 `[入口, ..., 入口]` 路徑；無環時回傳 `None`。
pub fn find_cycle(map: &OrbitMap, start: &str) -> Option<Vec<String>> {
    let mut finished: HashSet<&str> = HashSet::new();
    let mut on_path: HashSet<&str> = HashSet::from([start]);
    let mut path: Vec<&str> = vec![start];
    let mut frames = vec![sorted_satellites(map, start)];

    while let Some(frame) = frames.last_mut() {
        match frame.next() {
            Some(sat) if on_path.contains(sat) => {
                let entry = path.iter().position(|body| *body == sat).unwrap_or(0);
                let mut cycle: Vec<String> = path[entry..].iter().map(|b| b.to_string()).collect();
                cycle.push(sat.to_string());
                return Some(cycle);
            }
            Some(sat) if finished.contains(sat) => {}
            Some(sat) => {
                on_path.insert(sat);
                path.push(sat);
                frames.push(sorted_satellites(map, sat));
            }
            None => {
                frames.pop();
                if let Some(done) = path.pop() {
                    on_path.remove(done);
                    finished.insert(done);
                }
            }
        }
    }

    None
}

// 排序只是為了讓回報的環路徑固定
fn sorted_satellites<'a>(map: &'a OrbitMap, body: &str) -> std::vec::IntoIter<&'a str> {
    let mut sats: Vec<&str> = map
        .satellites_of(body)
        .map(|set| set.iter().map(String::as_str).collect())
        .unwrap_or_default();
    sats.sort_unstable();
    sats.into_iter()
}
