use crate::models::Draw;

/// Trois mois de tirages PowerBall (données fictives).
pub const HISTORICAL_DRAWS: &[&[u32]] = &[
    &[5, 10, 15, 20, 25],
    &[7, 12, 19, 28, 35],
    &[2, 13, 26, 34, 45],
    &[1, 9, 11, 23, 36],
    &[3, 15, 22, 29, 48],
    &[4, 14, 24, 33, 46],
];

pub fn historical_draws() -> Vec<Draw> {
    from_literal(HISTORICAL_DRAWS)
}

/// Les tirages invalides (vides ou contenant 0) sont écartés.
pub fn from_literal(rows: &[&[u32]]) -> Vec<Draw> {
    rows.iter()
        .filter_map(|row| match Draw::new(row.to_vec()) {
            Ok(draw) => Some(draw),
            Err(e) => {
                log::warn!("Tirage ignoré {:?}: {}", row, e);
                None
            }
        })
        .collect()
}

/// Jeu de tirages pour les tests : `n` tirages de `per_draw` numéros.
#[cfg(test)]
pub(crate) fn make_test_draws(n: usize, per_draw: usize) -> Vec<Draw> {
    (0..n)
        .map(|i| {
            let numbers = (0..per_draw)
                .map(|j| ((i * 3 + j * 7) % 49 + 1) as u32)
                .collect();
            Draw { numbers }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_historical_draws_loaded() {
        let draws = historical_draws();
        assert_eq!(draws.len(), 6);
        assert_eq!(draws[0].numbers(), &[5, 10, 15, 20, 25]);
        assert_eq!(draws[5].numbers(), &[4, 14, 24, 33, 46]);
    }

    #[test]
    fn test_from_literal_skips_invalid() {
        let draws = from_literal(&[&[1, 2], &[], &[0, 3], &[4]]);
        assert_eq!(draws.len(), 2);
        assert_eq!(draws[1].numbers(), &[4]);
    }

    #[test]
    fn test_make_test_draws_valid() {
        let draws = make_test_draws(30, 5);
        assert_eq!(draws.len(), 30);
        for draw in &draws {
            assert_eq!(draw.len(), 5);
            assert!(draw.numbers().iter().all(|&n| (1..=49).contains(&n)));
        }
    }
}
