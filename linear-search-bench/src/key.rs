//! Search-key selection for a single trial.
//!
//! Half of the keys are copied from the dataset, which guarantees a successful search. The
//! other half lie strictly above the dataset maximum and can never match.

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

use crate::{config::KEY_OFFSET_MAX, dataset::Element};

/// Whether a key was built to be found or to be missed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Present,
    Absent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchKey {
    pub value: Element,
    pub kind: KeyKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("cannot draw a search key from an empty dataset")]
    EmptyDataset,
    #[error("dataset maximum {0} leaves no room for a key above it")]
    NoHeadroom(Element),
}

/// Draws a search key for `data` using `rng`.
///
/// With probability 1/2 the key is an element of `data` chosen uniformly. Otherwise it is the
/// maximum of `data` plus a uniform offset in `1..=KEY_OFFSET_MAX`.
pub fn generate_search_key<R: Rng>(
    data: &[Element],
    rng: &mut R,
) -> Result<SearchKey, KeyError> {
    if rng.gen_bool(0.5) {
        let value = *data.choose(rng).ok_or(KeyError::EmptyDataset)?;
        return Ok(SearchKey { value, kind: KeyKind::Present });
    }

    let max = data.iter().copied().max().ok_or(KeyError::EmptyDataset)?;
    let offset = rng.gen_range(1..=KEY_OFFSET_MAX);
    let value = max.checked_add(offset).ok_or(KeyError::NoHeadroom(max))?;

    Ok(SearchKey { value, kind: KeyKind::Absent })
}

// TESTS
// ================================================================================================
