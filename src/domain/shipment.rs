use serde::{Deserialize, Serialize};

/// How the goods travel from the factory to the destination market.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingMode {
    Direct,
    #[default]
    Intermodal,
}

impl ShippingMode {
    pub fn label(&self) -> &'static str {
        match self {
            ShippingMode::Direct => "Direct Route (Mainland to Kosovo)",
            ShippingMode::Intermodal => "Intermodal (Factory > Port > Freight)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "direct" => Some(ShippingMode::Direct),
            "intermodal" => Some(ShippingMode::Intermodal),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ShippingMode::Direct => "direct",
            ShippingMode::Intermodal => "intermodal",
        }
    }

    pub const ALL: [ShippingMode; 2] = [ShippingMode::Direct, ShippingMode::Intermodal];
}

/// Invoice currency accepted by the input surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cny,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cny => "CNY",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            "CNY" => Some(Currency::Cny),
            _ => None,
        }
    }

    pub const ALL: [Currency; 4] = [Currency::Usd, Currency::Eur, Currency::Gbp, Currency::Cny];
}

/// Trade-responsibility code allocating cost and risk between buyer and seller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Incoterm {
    Exw,
    #[default]
    Fob,
    Cif,
    Ddp,
    Dap,
}

impl Incoterm {
    pub fn code(&self) -> &'static str {
        match self {
            Incoterm::Exw => "EXW",
            Incoterm::Fob => "FOB",
            Incoterm::Cif => "CIF",
            Incoterm::Ddp => "DDP",
            Incoterm::Dap => "DAP",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EXW" => Some(Incoterm::Exw),
            "FOB" => Some(Incoterm::Fob),
            "CIF" => Some(Incoterm::Cif),
            "DDP" => Some(Incoterm::Ddp),
            "DAP" => Some(Incoterm::Dap),
            _ => None,
        }
    }

    pub const ALL: [Incoterm; 5] = [
        Incoterm::Exw,
        Incoterm::Fob,
        Incoterm::Cif,
        Incoterm::Ddp,
        Incoterm::Dap,
    ];
}

/// Container arrangement offered by the input surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerType {
    #[default]
    Lcl,
    Gp20,
    Gp40,
    Hc40,
    Reefer20,
    OpenTop20,
    FlatRack20,
}

impl ContainerType {
    pub fn label(&self) -> &'static str {
        match self {
            ContainerType::Lcl => "LCL (Less than Container Load)",
            ContainerType::Gp20 => "20ft General Purpose",
            ContainerType::Gp40 => "40ft General Purpose",
            ContainerType::Hc40 => "40ft High Cube",
            ContainerType::Reefer20 => "20ft Reefer",
            ContainerType::OpenTop20 => "20ft Open Top",
            ContainerType::FlatRack20 => "20ft Flat Rack",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ContainerType::Lcl => "LCL",
            ContainerType::Gp20 => "GP20",
            ContainerType::Gp40 => "GP40",
            ContainerType::Hc40 => "HC40",
            ContainerType::Reefer20 => "REF20",
            ContainerType::OpenTop20 => "OT20",
            ContainerType::FlatRack20 => "FR20",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "LCL" => Some(ContainerType::Lcl),
            "GP20" => Some(ContainerType::Gp20),
            "GP40" => Some(ContainerType::Gp40),
            "HC40" => Some(ContainerType::Hc40),
            "REF20" => Some(ContainerType::Reefer20),
            "OT20" => Some(ContainerType::OpenTop20),
            "FR20" => Some(ContainerType::FlatRack20),
            _ => None,
        }
    }

    pub const ALL: [ContainerType; 7] = [
        ContainerType::Lcl,
        ContainerType::Gp20,
        ContainerType::Gp40,
        ContainerType::Hc40,
        ContainerType::Reefer20,
        ContainerType::OpenTop20,
        ContainerType::FlatRack20,
    ];
}

/// One submitted shipment plan. Built by the input form and moved into the
/// analysis request; never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentData {
    pub shipping_mode: ShippingMode,
    pub factory_location: String,
    pub product_description: String,
    /// Gross weight in kilograms.
    pub weight: f64,
    /// Volume in cubic meters.
    pub volume: f64,
    pub invoice_amount: f64,
    pub currency: Currency,
    pub incoterm: Incoterm,
    pub origin_port: String,
    pub container_type: ContainerType,
}

impl Default for ShipmentData {
    fn default() -> Self {
        Self {
            shipping_mode: ShippingMode::default(),
            factory_location: String::new(),
            product_description: String::new(),
            weight: 0.0,
            volume: 0.0,
            invoice_amount: 0.0,
            currency: Currency::default(),
            incoterm: Incoterm::default(),
            origin_port: String::new(),
            container_type: ContainerType::default(),
        }
    }
}

impl ShipmentData {
    /// The form keeps the submit control disabled until this holds, so the
    /// analysis request only ever sees positive quantities and filled text.
    pub fn is_submittable(&self) -> bool {
        self.weight > 0.0
            && self.volume > 0.0
            && self.invoice_amount > 0.0
            && !self.factory_location.trim().is_empty()
            && !self.product_description.trim().is_empty()
            && !self.origin_port.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ShipmentData {
        ShipmentData {
            factory_location: "Guangzhou, China".into(),
            product_description: "Ceramic tiles, palletized".into(),
            weight: 18_000.0,
            volume: 27.5,
            invoice_amount: 42_000.0,
            origin_port: "Shenzhen".into(),
            ..ShipmentData::default()
        }
    }

    #[test]
    fn submittable_requires_positive_quantities() {
        assert!(filled().is_submittable());

        let mut zero_weight = filled();
        zero_weight.weight = 0.0;
        assert!(!zero_weight.is_submittable());

        let mut blank_port = filled();
        blank_port.origin_port = "   ".into();
        assert!(!blank_port.is_submittable());
    }

    #[test]
    fn enum_codes_round_trip() {
        for mode in ShippingMode::ALL {
            assert_eq!(ShippingMode::from_code(mode.code()), Some(mode));
        }
        for currency in Currency::ALL {
            assert_eq!(Currency::from_code(currency.code()), Some(currency));
        }
        for incoterm in Incoterm::ALL {
            assert_eq!(Incoterm::from_code(incoterm.code()), Some(incoterm));
        }
        for container in ContainerType::ALL {
            assert_eq!(ContainerType::from_code(container.code()), Some(container));
        }
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Currency::from_code("JPY"), None);
        assert_eq!(Incoterm::from_code("FCA"), None);
        assert_eq!(ContainerType::from_code("45HC"), None);
    }
}
