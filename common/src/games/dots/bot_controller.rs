use crate::games::session_rng::{RollSource, SessionRng};
use super::game_state::DotsGame;
use super::listener::DotsListener;
use super::scoring::path_score;
use super::types::Position;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum BotType {
    Random,
    #[default]
    Greedy,
}

pub fn calculate_path<R: RollSource, L: DotsListener>(
    bot_type: BotType,
    game: &DotsGame<R, L>,
    max_len: usize,
    rng: &mut SessionRng,
) -> Option<Vec<Position>> {
    match bot_type {
        BotType::Random => calculate_random_path(game, rng),
        BotType::Greedy => calculate_greedy_path(game, max_len),
    }
}

fn neighbours(pos: Position, width: usize, height: usize) -> impl Iterator<Item = Position> {
    let left = pos.x.checked_sub(1).map(|x| Position::new(x, pos.y));
    let up = pos.y.checked_sub(1).map(|y| Position::new(pos.x, y));
    let right = (pos.x + 1 < width).then(|| Position::new(pos.x + 1, pos.y));
    let down = (pos.y + 1 < height).then(|| Position::new(pos.x, pos.y + 1));
    [left, up, right, down].into_iter().flatten()
}

fn connectable_pairs<R: RollSource, L: DotsListener>(game: &DotsGame<R, L>) -> Vec<[Position; 2]> {
    let mut pairs = Vec::new();
    for y in 0..game.height() {
        for x in 0..game.width() {
            let pos = Position::new(x, y);
            let candidates = [Position::new(x + 1, y), Position::new(x, y + 1)];
            for next in candidates {
                if game.board().contains(next) && matches!(game.can_connect(pos, next), Ok(true)) {
                    pairs.push([pos, next]);
                }
            }
        }
    }
    pairs
}

fn calculate_random_path<R: RollSource, L: DotsListener>(
    game: &DotsGame<R, L>,
    rng: &mut SessionRng,
) -> Option<Vec<Position>> {
    let pairs = connectable_pairs(game);
    if pairs.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..pairs.len());
    Some(pairs[idx].to_vec())
}

pub fn calculate_greedy_path<R: RollSource, L: DotsListener>(
    game: &DotsGame<R, L>,
    max_len: usize,
) -> Option<Vec<Position>> {
    let max_len = max_len.max(2);
    let mut best: Option<(u32, Vec<Position>)> = None;
    let mut path = Vec::with_capacity(max_len);

    for y in 0..game.height() {
        for x in 0..game.width() {
            path.push(Position::new(x, y));
            search(game, max_len, &mut path, &mut best);
            path.pop();
        }
    }

    best.map(|(_, path)| path)
}

fn search<R: RollSource, L: DotsListener>(
    game: &DotsGame<R, L>,
    max_len: usize,
    path: &mut Vec<Position>,
    best: &mut Option<(u32, Vec<Position>)>,
) {
    if path.len() >= max_len {
        return;
    }
    let Some(&last) = path.last() else {
        return;
    };
    let previous = path.len().checked_sub(2).map(|i| path[i]);

    for next in neighbours(last, game.width(), game.height()) {
        if Some(next) == previous || !matches!(game.can_connect(last, next), Ok(true)) {
            continue;
        }
        let closes_loop = path.contains(&next);
        path.push(next);

        let score = path_score(path);
        if best.as_ref().is_none_or(|(best_score, _)| score > *best_score) {
            *best = Some((score, path.clone()));
        }
        if !closes_loop {
            search(game, max_len, path, best);
        }

        path.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::dots::board::Board;
    use crate::games::dots::luck::LuckSettings;
    use crate::games::dots::luck::tests::ScriptedRolls;

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    fn game_from(rows: &[&str]) -> DotsGame<ScriptedRolls, ()> {
        DotsGame::from_board(
            Board::from_rows(rows),
            LuckSettings::default(),
            ScriptedRolls::zeros(),
            (),
        )
    }

    #[test]
    fn test_no_moves_on_checkerboard() {
        let game = game_from(&["RB", "BR"]);
        let mut rng = SessionRng::new(1);
        assert_eq!(calculate_path(BotType::Greedy, &game, 8, &mut rng), None);
        assert_eq!(calculate_path(BotType::Random, &game, 8, &mut rng), None);
    }

    #[test]
    fn test_greedy_prefers_longest_line() {
        let game = game_from(&[
            "RRRR",
            "BGBG",
        ]);
        let path = calculate_greedy_path(&game, 8).unwrap();
        assert_eq!(path, vec![p(0, 0), p(1, 0), p(2, 0), p(3, 0)]);
    }

    #[test]
    fn test_greedy_closes_square() {
        let game = game_from(&[
            "YYB",
            "YYG",
        ]);
        let path = calculate_greedy_path(&game, 8).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), path.last());
        assert_eq!(path_score(&path), 20);
    }

    #[test]
    fn test_greedy_respects_length_limit() {
        let game = game_from(&["GGGGGG"]);
        let path = calculate_greedy_path(&game, 3).unwrap();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_bot_paths_always_resolve() {
        let mut game = DotsGame::generate(6, 6, LuckSettings::default(), SessionRng::new(3), ())
            .unwrap();
        let mut bot_rng = SessionRng::new(4);
        for turn in 0..50 {
            let bot_type = if turn % 2 == 0 { BotType::Greedy } else { BotType::Random };
            let Some(path) = calculate_path(bot_type, &game, 6, &mut bot_rng) else {
                break;
            };
            let expected = path_score(&path);
            assert_eq!(game.resolve_path(&path), Ok(expected));
        }
    }
}
