use std::fmt::Write as _;

use sakura_core::{Layer, Position};
use sakura_game::Game;

pub(crate) fn print(game: &Game) {
    println!("{}", render(game));
}

/// Renders the pipes next to a map of alive cells, followed by a status line.
///
/// In the map `@` is the focused cell, `R` the root, `o` an alive cell and `.` a
/// dead one.
fn render(game: &Game) -> String {
    let grid = game.grid();
    let layer = if game.is_peeking() {
        Layer::Original
    } else {
        Layer::Current
    };
    let pipes = grid.render(layer);

    let mut out = String::new();
    for (i, line) in pipes.lines().enumerate() {
        out.push_str(line);
        if i % 3 == 1 {
            let y = i / 3;
            out.push_str("   ");
            for x in 0..grid.width() {
                let pos = Position::new(x, y);
                let mark = if game.focus() == Some(pos) {
                    '@'
                } else if pos == grid.root() {
                    'R'
                } else if game.alive_cells().contains(pos) {
                    'o'
                } else {
                    '.'
                };
                out.push(mark);
            }
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "{:?} | alive {}/{} | seed {}",
        game.state(),
        game.alive_cells().len(),
        grid.len(),
        game.seed()
    );
    if game.is_peeking() {
        out.push_str(" | peeking");
    }
    out
}

#[cfg(test)]
mod tests {
    use sakura_game::{AutoShuffle, RoundConfig};
    use sakura_generator::RoundSeed;

    use super::*;

    #[test]
    fn test_render_layout() {
        let config = RoundConfig {
            width: 4,
            height: 3,
            auto_shuffle: AutoShuffle::DISABLED,
            ..RoundConfig::default()
        };
        let mut game = Game::new_round_with_seed(config, RoundSeed::from_phrase("cli")).unwrap();
        game.shuffle().unwrap();

        let text = render(&game);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3 * 3 + 1);
        assert_eq!(lines[0].chars().count(), 4 * 3);
        assert!(lines[1].ends_with(|c| ['o', '.', 'R'].contains(&c)));
        assert!(lines[1].contains('@'));
        assert!(lines[9].starts_with("Unsolved"));
    }
}
