//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the legality rules.

use crate::Game;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(game: &Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves_for(game.turn());

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in moves {
        let mut next = game.clone();
        next.play(m);
        nodes += perft(&next, depth - 1);
    }
    nodes
}

/// Perft with divide: node count below each root move, sorted by move.
pub fn perft_divide(game: &Game, depth: u32) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = game
        .legal_moves_for(game.turn())
        .into_iter()
        .map(|m| {
            let mut next = game.clone();
            next.play(m);
            let nodes = if depth > 1 { perft(&next, depth - 1) } else { 1 };
            (m.to_uci(), nodes)
        })
        .collect();

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 0 1";

    #[test]
    fn perft_startpos() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 20);
        assert_eq!(perft(&game, 2), 400);
        assert_eq!(perft(&game, 3), 8902);
    }

    // Slow without optimizations
    #[test]
    #[ignore]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Game::new(), 4), 197281);
    }

    // Castling through attacked squares, en passant, promotions
    #[test]
    fn perft_kiwipete() {
        let game = Game::from_fen(KIWIPETE).unwrap();
        assert_eq!(perft(&game, 1), 48);
        assert_eq!(perft(&game, 2), 2039);
    }

    #[test]
    #[ignore]
    fn perft_kiwipete_depth_3() {
        let game = Game::from_fen(KIWIPETE).unwrap();
        assert_eq!(perft(&game, 3), 97862);
    }

    // Check evasion and the horizontal en passant pin
    #[test]
    fn perft_position3() {
        let game = Game::from_fen(POSITION3).unwrap();
        assert_eq!(perft(&game, 1), 14);
        assert_eq!(perft(&game, 2), 191);
        assert_eq!(perft(&game, 3), 2812);
    }

    #[test]
    fn perft_position4() {
        let game = Game::from_fen(POSITION4).unwrap();
        assert_eq!(perft(&game, 1), 6);
        assert_eq!(perft(&game, 2), 264);
    }

    #[test]
    fn perft_position5() {
        let game = Game::from_fen(POSITION5).unwrap();
        assert_eq!(perft(&game, 1), 44);
        assert_eq!(perft(&game, 2), 1486);
    }

    #[test]
    fn perft_divide_sums_to_perft() {
        let game = Game::new();
        let results = perft_divide(&game, 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, n)| *n == 20));
        let total: u64 = results.iter().map(|(_, n)| n).sum();
        assert_eq!(total, perft(&game, 2));
    }
}
