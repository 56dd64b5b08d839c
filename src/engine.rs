use crate::config::TaxConfig;
use crate::product::Product;

/// Accumulates parsed products for one receipt session and renders the
/// final receipt text. Products are kept in insertion order; that order
/// is the line order on the receipt.
pub struct Engine {
    products: Vec<Product>,
    config: TaxConfig,
}

impl Engine {
    pub fn new(config: TaxConfig) -> Engine {
        Engine {
            products: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &TaxConfig {
        &self.config
    }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Tax on a single unit of `product`, in cents.
    ///
    /// The rounding happens while the tax is still scaled by the rate
    /// denominator; rounding after the division would lose precision
    /// (5% of 110 cents is 5.5, which must round to 10, not truncate to 5).
    fn unit_tax_cents(&self, product: &Product) -> i64 {
        let mut rate = if product.exempt() {
            0
        } else {
            self.config.sales_tax_rate
        };
        if product.imported() {
            rate += self.config.import_duty_rate;
        }
        let raw = rate * product.unit_price_cents();
        let rounded = round_up_to_multiple(
            raw,
            self.config.rounding_unit_cents * self.config.rate_denominator,
        );
        rounded / self.config.rate_denominator
    }

    /// Renders the receipt: one line per product, then the aggregated
    /// sales taxes and the grand total. Every line ends with a newline.
    pub fn render(&self) -> String {
        let mut receipt = String::new();
        let mut tax_sum: i64 = 0;
        let mut total: i64 = 0;
        for product in &self.products {
            let quantity = i64::from(product.quantity());
            let line_tax = self.unit_tax_cents(product) * quantity;
            let line_gross = product.unit_price_cents() * quantity + line_tax;
            tax_sum += line_tax;
            total += line_gross;
            log::debug!("{:?}: tax {} gross {}", product.name(), line_tax, line_gross);
            receipt.push_str(&format!(
                "{} {}: {}\n",
                product.quantity(),
                product.name(),
                format_cents(line_gross)
            ));
        }
        receipt.push_str(&format!("Sales Taxes: {}\n", format_cents(tax_sum)));
        receipt.push_str(&format!("Total: {}\n", format_cents(total)));
        receipt
    }
}

/// Smallest multiple of `divisor` that is greater than or equal to `num`.
/// `divisor` must be positive; negative `num` is handled via the euclidean
/// remainder, so the result is still the tightest multiple from above.
pub fn round_up_to_multiple(num: i64, divisor: i64) -> i64 {
    let remainder = num.rem_euclid(divisor);
    if remainder == 0 {
        num
    } else {
        num + (divisor - remainder)
    }
}

/// Formats integer cents as `<whole>.<two-digit fraction>`. Negative values
/// get a single leading minus over the magnitude.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.abs();
    format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
}
