use pair_tab_entities::prelude::{Uuid, ValidationError};
use rand::{seq::SliceRandom, Rng};

use super::datastructures::{pair_consecutive, DrawTable};

/// First round draw: shuffle the pool uniformly, then seat neighbours together.
pub fn random_pairing<R>(competitors: &[Uuid], rng: &mut R) -> Result<Vec<DrawTable>, ValidationError> where R: Rng + ?Sized {
    if competitors.is_empty() {
        return Err(ValidationError::NoEligibleCompetitors);
    }

    let mut shuffled = competitors.to_vec();
    shuffled.shuffle(rng);
    Ok(pair_consecutive(&shuffled))
}
