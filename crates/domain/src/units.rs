pub const KG_PER_LB: f32 = 0.453_592_37;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

/// Display-layer weight conversion. The core stores kilograms and never
/// embeds conversion factors outside this boundary.
pub trait UnitConverter {
    fn convert(&self, value: f32, from: WeightUnit, to: WeightUnit) -> f32;
    fn current_unit(&self) -> WeightUnit;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Converter {
    pub unit: WeightUnit,
}

impl UnitConverter for Converter {
    fn convert(&self, value: f32, from: WeightUnit, to: WeightUnit) -> f32 {
        match (from, to) {
            (WeightUnit::Kg, WeightUnit::Kg) | (WeightUnit::Lb, WeightUnit::Lb) => value,
            (WeightUnit::Kg, WeightUnit::Lb) => value / KG_PER_LB,
            (WeightUnit::Lb, WeightUnit::Kg) => value * KG_PER_LB,
        }
    }

    fn current_unit(&self) -> WeightUnit {
        self.unit
    }
}
