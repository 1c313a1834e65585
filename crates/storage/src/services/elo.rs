/// Update magnitude used for every submission.
pub const DEFAULT_K_FACTOR: f64 = 20.0;

/// Rating assigned to both categories when a chart is created.
pub const INITIAL_RATING: f64 = 1200.0;

/// Elo update for a single head-to-head result.
///
/// Both sides move by the same delta `k * (score - expected)`, so the pair's
/// combined rating is conserved exactly. A draw between equal ratings is a
/// no-op.
pub fn rate_pair(winner: f64, loser: f64, drawn: bool, k_factor: f64) -> (f64, f64) {
    let expected = 1.0 / (1.0 + 10f64.powf((loser - winner) / 400.0));
    let score = if drawn { 0.5 } else { 1.0 };
    let delta = k_factor * (score - expected);

    (winner + delta, loser - delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ratings_decisive_result() {
        let (winner, loser) = rate_pair(1200.0, 1200.0, false, DEFAULT_K_FACTOR);
        assert_eq!(winner, 1210.0);
        assert_eq!(loser, 1190.0);
    }

    #[test]
    fn rating_mass_is_conserved() {
        let cases = [
            (1200.0, 1200.0, false),
            (1200.0, 1200.0, true),
            (1350.5, 1104.25, false),
            (900.0, 1700.0, true),
            (1500.0, 1499.0, false),
        ];
        for (winner, loser, drawn) in cases {
            let (new_winner, new_loser) = rate_pair(winner, loser, drawn, DEFAULT_K_FACTOR);
            assert!(
                ((new_winner + new_loser) - (winner + loser)).abs() < 1e-9,
                "mass not conserved for ({winner}, {loser}, {drawn})"
            );
        }
    }

    #[test]
    fn winner_goes_up_loser_goes_down() {
        let (new_winner, new_loser) = rate_pair(1000.0, 1400.0, false, DEFAULT_K_FACTOR);
        assert!(new_winner > 1000.0);
        assert!(new_loser < 1400.0);
    }

    #[test]
    fn draw_between_equals_changes_nothing() {
        let (new_a, new_b) = rate_pair(1234.0, 1234.0, true, DEFAULT_K_FACTOR);
        assert_eq!(new_a, 1234.0);
        assert_eq!(new_b, 1234.0);
    }

    #[test]
    fn draw_moves_ratings_toward_each_other() {
        let (new_high, new_low) = rate_pair(1400.0, 1000.0, true, DEFAULT_K_FACTOR);
        assert!(new_high < 1400.0);
        assert!(new_low > 1000.0);
    }

    #[test]
    fn underdog_gains_more_than_favorite_would() {
        let (underdog, _) = rate_pair(1000.0, 1400.0, false, DEFAULT_K_FACTOR);
        let (favorite, _) = rate_pair(1400.0, 1000.0, false, DEFAULT_K_FACTOR);
        assert!(underdog - 1000.0 > favorite - 1400.0);
    }

    #[test]
    fn repeat_win_yields_smaller_delta() {
        let (w1, l1) = rate_pair(1200.0, 1200.0, false, DEFAULT_K_FACTOR);
        let (w2, _) = rate_pair(w1, l1, false, DEFAULT_K_FACTOR);
        assert!(w2 - w1 < w1 - 1200.0);
    }

    #[test]
    fn k_factor_scales_the_delta() {
        let (w_small, _) = rate_pair(1200.0, 1200.0, false, 10.0);
        let (w_large, _) = rate_pair(1200.0, 1200.0, false, 40.0);
        assert_eq!(w_small - 1200.0, 5.0);
        assert_eq!(w_large - 1200.0, 20.0);
    }
}
