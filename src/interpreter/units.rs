use std::f64::consts::{PI, TAU};

/// Kind tag of length quantities. The base unit is the millimetre.
pub const DISTANCE: &str = "distance";
/// Kind tag of angle quantities. The base unit is the radian.
pub const ANGLE: &str = "angle";

/// Conversion of number and quantity literals into base-unit magnitudes.
///
/// The evaluator only calls into the table to resolve literals; all unit
/// arithmetic after that happens on base-unit magnitudes.
pub trait UnitTable {
    /// Parses the text of a plain number literal.
    fn parse_number(&self, text: &str) -> Option<f64>;

    /// The quantity kind a unit suffix belongs to, e.g. `distance` for `mm`.
    fn find_unit_kind(&self, suffix: &str) -> Option<&str>;

    /// Parses a number immediately followed by a unit of `kind` and converts
    /// it to the kind's base unit.
    fn parse_quantity_to_base_unit(&self, text: &str, kind: &str) -> Option<f64>;
}

/// One known unit: its suffix, kind and size in base units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    /// The suffix as written after a number.
    pub suffix: &'static str,
    /// The kind tag.
    pub kind:   &'static str,
    /// Magnitude of one unit in the kind's base unit.
    pub factor: f64,
}

const fn unit(suffix: &'static str, kind: &'static str, factor: f64) -> Unit {
    Unit { suffix, kind, factor }
}

/// The default unit table: metric and imperial lengths and the common angle
/// units.
pub const STANDARD_UNITS: &[Unit] = &[unit("um", DISTANCE, 0.001),
                                      unit("mm", DISTANCE, 1.0),
                                      unit("cm", DISTANCE, 10.0),
                                      unit("dm", DISTANCE, 100.0),
                                      unit("m", DISTANCE, 1000.0),
                                      unit("km", DISTANCE, 1_000_000.0),
                                      unit("in", DISTANCE, 25.4),
                                      unit("ft", DISTANCE, 304.8),
                                      unit("yd", DISTANCE, 914.4),
                                      unit("mi", DISTANCE, 1_609_344.0),
                                      unit("rad", ANGLE, 1.0),
                                      unit("deg", ANGLE, PI / 180.0),
                                      unit("grad", ANGLE, PI / 200.0),
                                      unit("turn", ANGLE, TAU)];

/// A unit table backed by a fixed list of units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardUnits {
    units: &'static [Unit],
}

impl StandardUnits {
    /// A table over the given units.
    #[must_use]
    pub const fn new(units: &'static [Unit]) -> Self {
        Self { units }
    }
}

impl Default for StandardUnits {
    fn default() -> Self {
        Self::new(STANDARD_UNITS)
    }
}

impl UnitTable for StandardUnits {
    fn parse_number(&self, text: &str) -> Option<f64> {
        text.parse::<f64>().ok()
    }

    fn find_unit_kind(&self, suffix: &str) -> Option<&str> {
        self.units
            .iter()
            .find(|unit| unit.suffix == suffix)
            .map(|unit| unit.kind)
    }

    fn parse_quantity_to_base_unit(&self, text: &str, kind: &str) -> Option<f64> {
        self.units
            .iter()
            .filter(|unit| unit.kind == kind)
            .find_map(|unit| {
                let number = text.strip_suffix(unit.suffix)?;
                self.parse_number(number).map(|value| value * unit.factor)
            })
    }
}
