use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

use crate::error::Error;

const RADIX: u64 = 1_000_000_000;
const RADIX_DIGITS: usize = 9;

/// An arbitrary-precision non-negative integer.
///
/// Values are immutable: every operation returns a new `Natural`, so
/// callers may freely share them across threads. Magnitude is bounded
/// only by memory.
///
/// Arithmetic is plain schoolbook, exact at any operand length, and
/// never touches floating point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Natural {
    /// Radix-10^9 limbs, least significant first. Never empty; the most
    /// significant limb is non-zero except for the canonical zero `[0]`.
    limbs: Vec<u32>,
}

impl Natural {
    pub fn zero() -> Self {
        Natural { limbs: vec![0] }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0]
    }

    /// Normalizes a raw limb vector into the canonical representation.
    fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.len() > 1 && limbs.last() == Some(&0) {
            limbs.pop();
        }
        if limbs.is_empty() {
            limbs.push(0);
        }
        Natural { limbs }
    }

    /// Narrows back to a native integer, `None` when the value exceeds
    /// `u64::MAX`.
    pub fn to_u64(&self) -> Option<u64> {
        let mut acc: u128 = 0;
        for &limb in self.limbs.iter().rev() {
            acc = acc * RADIX as u128 + limb as u128;
            if acc > u64::MAX as u128 {
                return None;
            }
        }
        Some(acc as u64)
    }

    /// Quotient and remainder in one pass, with `self == q * divisor + r`
    /// and `0 <= r < divisor`.
    pub fn div_rem(&self, divisor: &Natural) -> Result<(Natural, Natural), Error> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if self < divisor {
            return Ok((Natural::zero(), self.clone()));
        }
        if divisor.limbs.len() == 1 {
            return Ok(self.div_rem_limb(divisor.limbs[0]));
        }

        // Schoolbook long division, one radix-10^9 quotient limb at a time.
        let mut quotient = Vec::with_capacity(self.limbs.len());
        let mut rem = Natural::zero();
        for &limb in self.limbs.iter().rev() {
            rem = rem.shift_limb(limb);
            let q = rem.quotient_limb(divisor);
            rem = rem.sub(&divisor.mul_limb(q));
            quotient.push(q);
        }
        quotient.reverse();
        Ok((Natural::from_limbs(quotient), rem))
    }

    /// Integer quotient, rounded toward zero.
    pub fn div_floor(&self, divisor: &Natural) -> Result<Natural, Error> {
        Ok(self.div_rem(divisor)?.0)
    }

    pub fn remainder(&self, divisor: &Natural) -> Result<Natural, Error> {
        Ok(self.div_rem(divisor)?.1)
    }

    /// Exact exponentiation by squaring. The exponent is a native
    /// integer: in practice it is bounded by the length of the string
    /// being converted, never itself arbitrary-precision.
    pub fn pow(&self, exponent: u32) -> Natural {
        let mut result = Natural::from(1u32);
        let mut square = self.clone();
        let mut exp = exponent;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &square;
            }
            exp >>= 1;
            if exp > 0 {
                square = &square * &square;
            }
        }
        result
    }

    /// Single-limb divisor fast path: one carry scan over the limbs.
    fn div_rem_limb(&self, divisor: u32) -> (Natural, Natural) {
        let d = divisor as u64;
        let mut quotient = vec![0u32; self.limbs.len()];
        let mut carry: u64 = 0;
        for (i, &limb) in self.limbs.iter().enumerate().rev() {
            let cur = carry * RADIX + limb as u64;
            quotient[i] = (cur / d) as u32;
            carry = cur % d;
        }
        (Natural::from_limbs(quotient), Natural::from(carry))
    }

    /// `self * RADIX + limb`: appends a new least-significant limb.
    fn shift_limb(&self, limb: u32) -> Natural {
        if self.is_zero() {
            return Natural { limbs: vec![limb] };
        }
        let mut limbs = Vec::with_capacity(self.limbs.len() + 1);
        limbs.push(limb);
        limbs.extend_from_slice(&self.limbs);
        Natural { limbs }
    }

    /// Largest `q` in `0..RADIX` with `divisor * q <= self`.
    fn quotient_limb(&self, divisor: &Natural) -> u32 {
        let mut lo = 0u32;
        let mut hi = (RADIX - 1) as u32;
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if divisor.mul_limb(mid) <= *self {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        lo
    }

    fn mul_limb(&self, factor: u32) -> Natural {
        let f = factor as u64;
        let mut limbs = Vec::with_capacity(self.limbs.len() + 1);
        let mut carry: u64 = 0;
        for &limb in &self.limbs {
            let cur = limb as u64 * f + carry;
            limbs.push((cur % RADIX) as u32);
            carry = cur / RADIX;
        }
        while carry > 0 {
            limbs.push((carry % RADIX) as u32);
            carry /= RADIX;
        }
        Natural::from_limbs(limbs)
    }

    /// Limb-wise subtraction; callers guarantee `other <= self`.
    fn sub(&self, other: &Natural) -> Natural {
        debug_assert!(other <= self);
        let mut limbs = Vec::with_capacity(self.limbs.len());
        let mut borrow: i64 = 0;
        for (i, &limb) in self.limbs.iter().enumerate() {
            let rhs = other.limbs.get(i).copied().unwrap_or(0) as i64;
            let mut cur = limb as i64 - rhs - borrow;
            if cur < 0 {
                cur += RADIX as i64;
                borrow = 1;
            } else {
                borrow = 0;
            }
            limbs.push(cur as u32);
        }
        Natural::from_limbs(limbs)
    }
}

impl From<u64> for Natural {
    fn from(mut value: u64) -> Self {
        let mut limbs = vec![(value % RADIX) as u32];
        value /= RADIX;
        while value > 0 {
            limbs.push((value % RADIX) as u32);
            value /= RADIX;
        }
        Natural { limbs }
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Natural::from(value as u64)
    }
}

impl FromStr for Natural {
    type Err = Error;

    /// Parses a non-negative decimal string. No sign, no whitespace, at
    /// least one character; leading zeros are accepted and normalized
    /// away.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::InvalidNumberFormat {
                char: None,
                position: 0,
            });
        }
        if let Some((position, c)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(Error::InvalidNumberFormat {
                char: Some(c),
                position,
            });
        }

        // Chunk the text into radix-sized digit groups from the right.
        let bytes = s.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / RADIX_DIGITS + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(RADIX_DIGITS);
            let mut limb: u32 = 0;
            for &b in &bytes[start..end] {
                limb = limb * 10 + (b - b'0') as u32;
            }
            limbs.push(limb);
            end = start;
        }
        Ok(Natural::from_limbs(limbs))
    }
}

impl fmt::Display for Natural {
    /// Canonical decimal rendering: no leading zeros except the literal "0".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.limbs.iter().rev();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
        }
        for limb in iter {
            write!(f, "{:09}", limb)?;
        }
        Ok(())
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        // Limbs are normalized, so a longer value is a larger value.
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => self.limbs.iter().rev().cmp(other.limbs.iter().rev()),
            ord => ord,
        }
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        let (longer, shorter) = if self.limbs.len() >= rhs.limbs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut limbs = Vec::with_capacity(longer.limbs.len() + 1);
        let mut carry: u64 = 0;
        for (i, &limb) in longer.limbs.iter().enumerate() {
            let cur = limb as u64 + shorter.limbs.get(i).copied().unwrap_or(0) as u64 + carry;
            limbs.push((cur % RADIX) as u32);
            carry = cur / RADIX;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        Natural::from_limbs(limbs)
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        if self.is_zero() || rhs.is_zero() {
            return Natural::zero();
        }
        // Schoolbook product; u64 cells hold every intermediate without
        // overflow since each stays below RADIX^2.
        let mut acc = vec![0u64; self.limbs.len() + rhs.limbs.len()];
        for (i, &a) in self.limbs.iter().enumerate() {
            let mut carry: u64 = 0;
            for (j, &b) in rhs.limbs.iter().enumerate() {
                let cur = acc[i + j] + a as u64 * b as u64 + carry;
                acc[i + j] = cur % RADIX;
                carry = cur / RADIX;
            }
            acc[i + rhs.limbs.len()] += carry;
        }
        Natural::from_limbs(acc.into_iter().map(|limb| limb as u32).collect())
    }
}
