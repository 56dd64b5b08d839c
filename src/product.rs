/// One parsed receipt line item. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    quantity: u32,
    name: String,
    unit_price_cents: i64,
    imported: bool,
    exempt: bool,
}

impl Product {
    pub fn new(
        quantity: u32,
        name: String,
        unit_price_cents: i64,
        imported: bool,
        exempt: bool,
    ) -> Product {
        Product {
            quantity,
            name,
            unit_price_cents,
            imported,
            exempt,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price_cents(&self) -> i64 {
        self.unit_price_cents
    }

    pub fn imported(&self) -> bool {
        self.imported
    }

    pub fn exempt(&self) -> bool {
        self.exempt
    }
}
