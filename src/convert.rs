use log::{debug, trace};

use crate::{
    Celsius, ConversionError, ConversionMode, Fahrenheit, Kelvin, Scale, Temperature,
    ABSOLUTE_ZERO_CELSIUS, ABSOLUTE_ZERO_KELVIN,
};

/// Parse `raw_input` and convert it according to `mode`.
///
/// Celsius and Kelvin inputs are checked against absolute zero in their own
/// scale before converting. Fahrenheit input is converted first and the
/// resulting Celsius value is what gets checked (and reported on failure).
pub fn convert(raw_input: &str, mode: ConversionMode) -> Result<Temperature, ConversionError> {
    let value = parse_value(raw_input)?;
    let result = convert_value(value, mode)?;
    debug!("{raw_input:?} converted to {result}");
    Ok(result)
}

/// Same as [`convert`], with the mode given by its menu number.
///
/// The number is parsed first: bad input is reported even when the selector
/// is unknown too.
pub fn convert_selector(raw_input: &str, selector: u32) -> Result<Temperature, ConversionError> {
    let value = parse_value(raw_input)?;
    let mode = ConversionMode::from_selector(selector)?;
    let result = convert_value(value, mode)?;
    debug!("{raw_input:?} converted to {result}");
    Ok(result)
}

/// Reject Celsius values below absolute zero. The bound itself is valid.
pub fn validate_celsius(value: f64) -> Result<f64, ConversionError> {
    if value < ABSOLUTE_ZERO_CELSIUS {
        Err(ConversionError::ImpossibleTemperature {
            value,
            scale: Scale::Celsius,
        })
    } else {
        Ok(value)
    }
}

fn parse_value(raw_input: &str) -> Result<f64, ConversionError> {
    match raw_input.trim().parse::<f64>() {
        // "NaN" and "inf" parse fine but are not temperatures
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ConversionError::InvalidInput(raw_input.to_string())),
    }
}

fn convert_value(value: f64, mode: ConversionMode) -> Result<Temperature, ConversionError> {
    trace!("convert {value} with {mode:?}");
    let result: Temperature = match mode {
        ConversionMode::CelsiusToFahrenheit => {
            let celsius = Celsius::new(validate_celsius(value)?);
            Fahrenheit::from(celsius).into()
        }
        ConversionMode::KelvinToCelsius => {
            let kelvin = Kelvin::new(value);
            if kelvin.value() < ABSOLUTE_ZERO_KELVIN {
                return Err(ConversionError::ImpossibleTemperature {
                    value,
                    scale: Scale::Kelvin,
                });
            }
            Celsius::from(kelvin).into()
        }
        ConversionMode::FahrenheitToCelsius => {
            let celsius = Celsius::from(Fahrenheit::new(value));
            Celsius::new(validate_celsius(celsius.value())?).into()
        }
    };
    Ok(result)
}
