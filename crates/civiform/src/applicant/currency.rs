use std::fmt;

use serde::{Deserialize, Serialize};

/// Non-negative monetary amount stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Currency {
    cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a valid dollar amount")]
pub struct CurrencyParseError {
    input: String,
}

impl Currency {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub const fn cents(self) -> u64 {
        self.cents
    }

    /// Parse a dollar amount such as `1234`, `1234.56`, or `1,234.56`.
    ///
    /// Thousands separators must be well placed and cents, when present, must be exactly two
    /// digits.
    pub fn parse_dollars(raw: &str) -> Result<Self, CurrencyParseError> {
        let input = raw.trim();
        let invalid = || CurrencyParseError {
            input: raw.to_string(),
        };

        let (whole, fraction) = match input.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (input, None),
        };

        if whole.is_empty() || !valid_whole_dollars(whole) {
            return Err(invalid());
        }

        let dollars: u64 = whole
            .chars()
            .filter(|c| *c != ',')
            .collect::<String>()
            .parse()
            .map_err(|_| invalid())?;

        let cents = match fraction {
            None => 0,
            Some(digits) if digits.len() == 2 && digits.chars().all(|c| c.is_ascii_digit()) => {
                digits.parse::<u64>().map_err(|_| invalid())?
            }
            Some(_) => return Err(invalid()),
        };

        dollars
            .checked_mul(100)
            .and_then(|value| value.checked_add(cents))
            .map(Self::from_cents)
            .ok_or_else(invalid)
    }

    /// At least one dollars digit and always two cents digits, e.g. `1500.00`.
    pub fn dollars_string(self) -> String {
        format!("{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

fn valid_whole_dollars(whole: &str) -> bool {
    if !whole.contains(',') {
        return whole.chars().all(|c| c.is_ascii_digit());
    }

    let mut groups = whole.split(',');
    let leading_ok = groups
        .next()
        .map(|group| (1..=3).contains(&group.len()) && group.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);

    leading_ok && groups.all(|group| group.len() == 3 && group.chars().all(|c| c.is_ascii_digit()))
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dollars_string())
    }
}
