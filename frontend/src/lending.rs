use crate::config::{INVESTMENT_DEFAULT, INVESTMENT_MAX, INVESTMENT_MIN, RETURN_MULTIPLIER};

/// What a backer could get back for `amount` dollars.
pub fn expected_return(amount: u32) -> u32 {
    amount.saturating_mul(RETURN_MULTIPLIER)
}

/// Backing amount picked on the home page slider, always within the slider range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Investment(u32);

impl Investment {
    pub fn new(amount: u32) -> Self {
        Self(amount.clamp(INVESTMENT_MIN, INVESTMENT_MAX))
    }

    /// Parses the `value` of the range input. Returns `None` for anything that
    /// is not an integer so the caller can keep its previous amount.
    pub fn from_slider(value: &str) -> Option<Self> {
        value.trim().parse::<u32>().ok().map(Self::new)
    }

    pub fn amount(self) -> u32 {
        self.0
    }

    pub fn expected_return(self) -> u32 {
        expected_return(self.0)
    }

    pub fn summary(self) -> String {
        format!(
            "If you back with ${}, your return could be ${}",
            self.amount(),
            self.expected_return()
        )
    }
}

impl Default for Investment {
    fn default() -> Self {
        Self(INVESTMENT_DEFAULT)
    }
}

/// One artwork card in the "Current Opportunities" preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Opportunity {
    pub title: &'static str,
    pub funded_percent: u8,
    pub expected: &'static str,
}

pub const OPPORTUNITIES: [Opportunity; 4] = [
    Opportunity { title: "Urban Dreams #3", funded_percent: 75, expected: "$40" },
    Opportunity { title: "Digital Sunset", funded_percent: 45, expected: "$25" },
    Opportunity { title: "Abstract Emotions", funded_percent: 90, expected: "$60" },
    Opportunity { title: "City Lights", funded_percent: 30, expected: "$20" },
];

/// Figures for the worked example above the slider.
pub const PAINTING_EXAMPLE: [(&str, &str); 4] = [
    ("Artwork Value", "$1,000"),
    ("Total Loan", "$100"),
    ("Artist Keeps", "$900"),
    ("Lender Return", "$200"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_is_double_the_backing_across_the_slider() {
        for n in INVESTMENT_MIN..=INVESTMENT_MAX {
            assert_eq!(Investment::new(n).expected_return(), 2 * n);
        }
        assert_eq!(expected_return(50), 100);
        assert_eq!(expected_return(10), 20);
        assert_eq!(expected_return(100), 200);
    }

    #[test]
    fn huge_amounts_saturate_instead_of_overflowing() {
        assert_eq!(expected_return(u32::MAX), u32::MAX);
        assert_eq!(expected_return(u32::MAX / 2), u32::MAX - 1);
    }

    #[test]
    fn default_backing_is_fifty() {
        let investment = Investment::default();
        assert_eq!(investment.amount(), 50);
        assert_eq!(investment.summary(), "If you back with $50, your return could be $100");
    }

    #[test]
    fn out_of_range_amounts_are_clamped() {
        assert_eq!(Investment::new(0).amount(), 10);
        assert_eq!(Investment::new(5_000).amount(), 100);
    }

    #[test]
    fn slider_values_parse_or_are_rejected() {
        assert_eq!(Investment::from_slider("75"), Some(Investment::new(75)));
        assert_eq!(Investment::from_slider(" 20 "), Some(Investment::new(20)));
        assert_eq!(Investment::from_slider("250"), Some(Investment::new(100)));
        assert_eq!(Investment::from_slider(""), None);
        assert_eq!(Investment::from_slider("abc"), None);
        assert_eq!(Investment::from_slider("-3"), None);
    }

    #[test]
    fn painting_example_adds_up() {
        // artist keeps value minus loan, lender gets the loan doubled
        assert_eq!(PAINTING_EXAMPLE[2].1, "$900");
        assert_eq!(format!("${}", expected_return(100)), PAINTING_EXAMPLE[3].1);
    }

    #[test]
    fn opportunities_are_partially_funded() {
        assert!(OPPORTUNITIES.iter().all(|o| o.funded_percent > 0 && o.funded_percent < 100));
    }
}
