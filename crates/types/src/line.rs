use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a line sells goods (HSN-coded) or a service (SAC-coded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Product,
    Service,
}

/// One raw transaction line, exactly as entered. Immutable input to the
/// engine; all derived amounts live on [`ComputedLine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: ItemKind,
    pub name: String,
    /// HSN code for products, SAC code for services. Optional.
    pub code: Option<String>,
    /// Quantity sold. Services conventionally carry 1.
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    /// Nominal GST rate in percent. 0 for untaxed lines.
    pub gst_rate: Decimal,
    /// When set, replaces `quantity * unit_price` as the taxable value
    /// (lump-sum services where quantity is not meaningful).
    pub override_amount: Option<Decimal>,
}

impl LineItem {
    pub fn product(name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            kind: ItemKind::Product,
            name: name.into(),
            code: None,
            quantity,
            unit: "pcs".to_string(),
            unit_price,
            gst_rate: Decimal::ZERO,
            override_amount: None,
        }
    }

    pub fn service(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            kind: ItemKind::Service,
            name: name.into(),
            code: None,
            quantity: Decimal::ONE,
            unit: "job".to_string(),
            unit_price: amount,
            gst_rate: Decimal::ZERO,
            override_amount: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_rate(mut self, gst_rate: Decimal) -> Self {
        self.gst_rate = gst_rate;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_override(mut self, amount: Decimal) -> Self {
        self.override_amount = Some(amount);
        self
    }
}

/// A line after tax classification: the original item plus its taxable
/// value, the three GST components and the line total. Created once per
/// run by the classifier; downstream stages only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedLine {
    pub item: LineItem,
    pub taxable_value: Decimal,
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}

impl ComputedLine {
    /// Sum of the tax components. At most one of IGST vs CGST+SGST is
    /// non-zero for any given document regime.
    pub fn tax_amount(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}
