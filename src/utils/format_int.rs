use std::fmt;

/// Integer printed with `'` between groups of three digits: `12'345'678`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(value as i128)
    }

    /// Truncates towards zero; NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let digits = self.0.unsigned_abs().to_string();
        let head = match digits.len() % 3 {
            0 => 3,
            r => r,
        };
        f.write_str(&digits[..head])?;
        for group in digits.as_bytes()[head..].chunks(3) {
            f.write_str("'")?;
            // digits are ASCII
            f.write_str(std::str::from_utf8(group).map_err(|_| fmt::Error)?)?;
        }
        Ok(())
    }
}
