use crate::models::Draw;
use crate::ranker::rank;

/// Dernier résultat affiché : la prédiction courante et l'éventuel message d'erreur.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictorState {
    pub prediction: Vec<u32>,
    pub error: Option<String>,
}

impl PredictorState {
    /// En cas d'échec, la prédiction précédente reste en place.
    pub fn generate(self, draws: &[Draw], k: usize) -> Self {
        match rank(draws, k) {
            Ok(prediction) => Self {
                prediction,
                error: None,
            },
            Err(e) => Self {
                prediction: self.prediction,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn can_reset(&self) -> bool {
        !self.prediction.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::historical_draws;
    use crate::error::RankError;

    #[test]
    fn test_initial_state_empty() {
        let state = PredictorState::default();
        assert!(state.prediction.is_empty());
        assert!(state.error.is_none());
        assert!(!state.can_reset());
    }

    #[test]
    fn test_generate_sets_prediction() {
        let state = PredictorState::default().generate(&historical_draws(), 5);
        assert_eq!(state.prediction, vec![15, 5, 10, 20, 25]);
        assert!(state.error.is_none());
        assert!(state.can_reset());
    }

    #[test]
    fn test_generate_empty_sets_error() {
        let state = PredictorState::default().generate(&[], 5);
        assert!(state.prediction.is_empty());
        assert_eq!(state.error, Some(RankError::EmptyDataset.to_string()));
        assert!(!state.can_reset());
    }

    #[test]
    fn test_generate_empty_keeps_previous_prediction() {
        let state = PredictorState::default()
            .generate(&historical_draws(), 3)
            .generate(&[], 3);
        assert_eq!(state.prediction, vec![15, 5, 10]);
        assert!(state.error.is_some());
    }

    #[test]
    fn test_generate_clears_previous_error() {
        let state = PredictorState::default()
            .generate(&[], 5)
            .generate(&historical_draws(), 5);
        assert!(state.error.is_none());
        assert!(state.can_reset());
    }

    #[test]
    fn test_reset_after_prediction() {
        let state = PredictorState::default()
            .generate(&historical_draws(), 5)
            .reset();
        assert_eq!(state, PredictorState::default());
    }

    #[test]
    fn test_reset_clears_error() {
        let state = PredictorState::default().generate(&[], 5).reset();
        assert!(state.error.is_none());
        assert!(state.prediction.is_empty());
    }
}
