use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("Aucune donnée historique disponible pour générer une prédiction.")]
    EmptyDataset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dataset_message() {
        assert_eq!(
            RankError::EmptyDataset.to_string(),
            "Aucune donnée historique disponible pour générer une prédiction."
        );
    }
}
