//! Password generation.

use tracing::debug;
use zeroize::Zeroizing;

use super::charset;
use crate::error::GenerateError;
use crate::rand::RandomSource;
use crate::settings::Selection;

/// Build the pre-shuffle buffer.
///
/// Every slot is drawn from the merged pool, then the first `k` slots are
/// overwritten with one character from each selected class in canonical
/// order. The overwritten draws are discarded.
pub fn assemble<R: RandomSource>(
    selection: &Selection,
    length: usize,
    rng: &mut R,
) -> Result<Zeroizing<Vec<char>>, GenerateError> {
    let pool = charset::build(selection);
    if pool.is_empty() {
        return Err(GenerateError::EmptyPool);
    }

    let required = selection.count();
    if length < required {
        return Err(GenerateError::LengthTooShort { length, required });
    }

    let mut buf: Zeroizing<Vec<char>> = Zeroizing::new(Vec::new());
    buf.try_reserve_exact(length)
        .map_err(|_| GenerateError::OutOfMemory { length })?;
    buf.extend((0..length).map(|_| pool[rng.below(pool.len())]));

    for (slot, class) in buf.iter_mut().zip(selection.classes()) {
        if let Some(&b) = rng.choose(class.chars().as_bytes()) {
            *slot = char::from(b);
        }
    }

    debug!(length, pool = pool.len(), required, "assembled password buffer");
    Ok(buf)
}

/// Generate a single password for the selection.
pub fn generate<R: RandomSource>(
    selection: &Selection,
    length: usize,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerateError> {
    let mut buf = assemble(selection, length, rng)?;
    rng.shuffle(&mut buf);

    let mut password = Zeroizing::new(String::new());
    password
        .try_reserve_exact(length)
        .map_err(|_| GenerateError::OutOfMemory { length })?;
    password.extend(buf.iter());
    Ok(password)
}
