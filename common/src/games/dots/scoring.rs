use super::types::Position;

// a step back onto an already visited cell doubles the running total once
pub fn path_score(path: &[Position]) -> u32 {
    let mut score: u32 = 0;
    for i in 1..path.len() {
        score = score.saturating_add(i as u32);
        if path[..i].contains(&path[i]) {
            score = score.saturating_mul(2);
        }
    }
    score
}

pub fn preview_score(chain_len: usize, closed: bool) -> u32 {
    let steps = chain_len.saturating_sub(1) as u32;
    let base = steps * (steps + 1) / 2;
    if closed { base * 2 } else { base }
}
