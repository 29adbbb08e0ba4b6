use crate::error::RankError;
use crate::frequency::FrequencyTable;
use crate::models::Draw;

/// Les `k` numéros les plus fréquents de l'historique, du plus fréquent au moins fréquent.
/// À fréquence égale, l'ordre de première apparition dans l'historique est conservé.
pub fn rank(draws: &[Draw], k: usize) -> Result<Vec<u32>, RankError> {
    if draws.is_empty() {
        log::warn!("Classement demandé sur un historique vide");
        return Err(RankError::EmptyDataset);
    }

    let table = FrequencyTable::from_draws(draws);
    let prediction: Vec<u32> = table
        .ranked()
        .into_iter()
        .take(k)
        .map(|(number, _)| number)
        .collect();

    log::debug!(
        "{} tirages, {} numéros distincts, top {} = {:?}",
        draws.len(),
        table.len(),
        k,
        prediction
    );

    Ok(prediction)
}
