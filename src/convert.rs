use crate::error::Error;
use crate::natural::Natural;
use crate::pool::Pool;

/// Encodes a non-negative decimal string into the pool's base.
///
/// Digits come out most-significant first, matching positional numeral
/// notation. A zero input encodes to the pool's first character, never
/// to an empty string.
pub fn encode(decimal: &str, pool: &Pool) -> Result<String, Error> {
    let mut value: Natural = decimal.parse()?;
    let base = Natural::from(pool.base() as u64);

    // One digit per division step, collected least-significant first and
    // reversed at the end.
    let mut digits = Vec::new();
    loop {
        let (quotient, remainder) = value.div_rem(&base)?;
        // remainder < base, so the narrowing and the lookup cannot miss
        let index = remainder.to_u64().unwrap() as usize;
        digits.push(pool.digit(index).unwrap());
        value = quotient;
        if value.is_zero() {
            break;
        }
    }
    digits.reverse();
    Ok(digits.into_iter().collect())
}

/// Decodes a string in the pool's base back to its decimal form.
///
/// Horner accumulation: one multiply and one add per input character,
/// left to right. An empty input decodes to "0". The result carries no
/// leading zeros except the literal "0".
pub fn decode(encoded: &str, pool: &Pool) -> Result<String, Error> {
    let base = Natural::from(pool.base() as u64);
    let mut acc = Natural::zero();
    for (position, c) in encoded.chars().enumerate() {
        let value = pool
            .value_of(c)
            .ok_or(Error::InvalidDigit { char: c, position })?;
        acc = &(&acc * &base) + &Natural::from(value as u64);
    }
    Ok(acc.to_string())
}
