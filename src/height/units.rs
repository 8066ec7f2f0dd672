//! Imperial ↔ metric conversion for parent heights and report labels

pub const CM_PER_INCH: f64 = 2.54;
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Feet + inches → centimetres, rounded to 0.1 cm
pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    let cm = (feet * INCHES_PER_FOOT + inches) * CM_PER_INCH;
    (cm * 10.0).round() / 10.0
}

/// Centimetres → `5'10"` style label.
///
/// Total inches are rounded before splitting, so 71.6 in becomes 6'0" rather
/// than 5'12".
pub fn cm_to_feet_label(cm: f64) -> String {
    let total_inches = (cm / CM_PER_INCH).round().max(0.0) as u32;
    format!("{}'{}\"", total_inches / 12, total_inches % 12)
}
