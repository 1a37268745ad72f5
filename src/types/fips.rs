use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Zero-padded 2-digit state FIPS code (e.g. "04" for Arizona).
/// Keep the original code text (with leading zeros) but avoid repeated owned Strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateFips(Arc<str>);

impl StateFips {
    /// Pads `raw` with leading zeros to 2 digits. Longer inputs are kept as-is.
    pub fn new(raw: &str) -> Self {
        Self(pad(raw.trim(), 2))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateFips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Zero-padded 5-digit county FIPS code (e.g. "04013" for Maricopa, AZ).
/// The first two digits identify the owning state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountyFips(Arc<str>);

impl CountyFips {
    /// Pads `raw` with leading zeros to 5 digits. Longer inputs are kept as-is.
    pub fn new(raw: &str) -> Self {
        Self(pad(raw.trim(), 5))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The owning state's FIPS code, truncated from the padded county code.
    pub fn state_prefix(&self) -> StateFips {
        let prefix: String = self.0.chars().take(2).collect();
        StateFips::new(&prefix)
    }
}

impl fmt::Display for CountyFips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn pad(raw: &str, width: usize) -> Arc<str> {
    let len = raw.chars().count();
    if len >= width {
        return Arc::from(raw);
    }
    let mut out = "0".repeat(width - len);
    out.push_str(raw);
    Arc::from(out.as_str())
}

#[cfg(test)]
mod tests {
    use super::{CountyFips, StateFips};

    #[test]
    fn state_fips_pads_to_two_digits() {
        assert_eq!(StateFips::new("4").as_str(), "04");
        assert_eq!(StateFips::new("49").as_str(), "49");
        assert_eq!(StateFips::new(" 8 ").as_str(), "08");
    }

    #[test]
    fn county_fips_pads_to_five_digits() {
        assert_eq!(CountyFips::new("4013").as_str(), "04013");
        assert_eq!(CountyFips::new("08001").as_str(), "08001");
    }

    #[test]
    fn state_prefix_comes_from_padded_code() {
        assert_eq!(CountyFips::new("4013").state_prefix(), StateFips::new("04"));
        assert_eq!(CountyFips::new("49011").state_prefix(), StateFips::new("49"));
    }

    #[test]
    fn overlong_input_is_kept_verbatim() {
        assert_eq!(StateFips::new("123").as_str(), "123");
        assert_eq!(CountyFips::new("123456").as_str(), "123456");
    }
}
