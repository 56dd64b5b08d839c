/// Parameters of the tax calculation, fixed for the lifetime of a session.
///
/// All rates are integer percentages; computed tax stays in integer cents
/// throughout, scaled by `rate_denominator` until the final division.
#[derive(Debug, Clone)]
pub struct TaxConfig {
    /// Base sales tax rate, in percent.
    pub sales_tax_rate: i64,
    /// Additional duty applied to imported products, in percent.
    pub import_duty_rate: i64,
    /// Divisor applied after combining rate and price; 100 means "percent".
    pub rate_denominator: i64,
    /// Tax is rounded up to the nearest multiple of this many cents.
    pub rounding_unit_cents: i64,
    /// Products whose name contains one of these substrings pay no sales tax.
    pub exempt_keywords: Vec<String>,
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig {
            sales_tax_rate: 10,
            import_duty_rate: 5,
            rate_denominator: 100,
            rounding_unit_cents: 5,
            exempt_keywords: [
                "book",
                "food",
                "magazine",
                "pill",
                "vaccine",
                "drug",
                "antibiotic",
                "chocolate",
                "milk",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl TaxConfig {
    /// True if `name` contains any exempt keyword, case-insensitively.
    pub fn is_exempt(&self, name: &str) -> bool {
        let lowered = name.to_lowercase();
        self.exempt_keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_rates() {
        let conf = TaxConfig::default();
        assert_eq!(conf.sales_tax_rate, 10);
        assert_eq!(conf.import_duty_rate, 5);
        assert_eq!(conf.rate_denominator, 100);
        assert_eq!(conf.rounding_unit_cents, 5);
    }

    #[test]
    fn exemption_is_substring_based() {
        let conf = TaxConfig::default();
        assert!(conf.is_exempt("chocolate bar"));
        assert!(conf.is_exempt("box of Chocolates"));
        assert!(!conf.is_exempt("wheat bread"));
    }

    #[test]
    fn exemption_ignores_case() {
        let conf = TaxConfig::default();
        assert!(conf.is_exempt("BOOK"));
        assert!(conf.is_exempt("Carton of MILK"));
    }
}
