use crate::constants;
use crate::enums::DisplayMode;
use crate::error::Error;

/// Renders a word for display: zero-padded hex, plain decimal, or binary
/// grouped into nibbles. Values that do not fit a machine word are a
/// programming error and reported as such.
pub fn formatted_value(value: u32, mode: DisplayMode) -> Result<String, Error> {
    if value > constants::WORD_MAX {
        return Err(Error::ValueOutOfRange(value));
    }
    Ok(match mode {
        DisplayMode::Hex => format!("{:04X}", value),
        DisplayMode::Decimal => value.to_string(),
        DisplayMode::Binary => {
            let bits = format!("{:016b}", value);
            let nibbles: Vec<&str> = vec![&bits[0..4], &bits[4..8], &bits[8..12], &bits[12..16]];
            nibbles.join(" ")
        }
    })
}
