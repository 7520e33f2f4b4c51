pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;
pub const ABSOLUTE_ZERO_KELVIN: f64 = 0.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Celsius(f64);
impl Celsius {
    pub fn new(v: f64) -> Celsius {
        Celsius(v)
    }
    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Fahrenheit(f64);
impl Fahrenheit {
    pub fn new(v: f64) -> Fahrenheit {
        Fahrenheit(v)
    }
    pub fn value(self) -> f64 {
        self.0
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Kelvin(f64);
impl Kelvin {
    pub fn new(v: f64) -> Kelvin {
        Kelvin(v)
    }
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Celsius> for Fahrenheit {
    fn from(value: Celsius) -> Self {
        Fahrenheit(value.0 * 9.0 / 5.0 + 32.0)
    }
}
impl From<Fahrenheit> for Celsius {
    fn from(value: Fahrenheit) -> Self {
        Celsius((value.0 - 32.0) * 5.0 / 9.0)
    }
}
impl From<Kelvin> for Celsius {
    fn from(value: Kelvin) -> Self {
        Celsius(value.0 + ABSOLUTE_ZERO_CELSIUS)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Scale {
    pub fn label(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a successful conversion.
///
/// Only ever labeled in Celsius or Fahrenheit, and never below absolute zero
/// in its own scale. Built exclusively by [`crate::convert`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Temperature {
    value: f64,
    scale: Scale,
}

impl Temperature {
    pub(crate) fn new(value: f64, scale: Scale) -> Temperature {
        debug_assert!(scale != Scale::Kelvin);
        Temperature { value, scale }
    }
    pub fn value(self) -> f64 {
        self.value
    }
    pub fn scale(self) -> Scale {
        self.scale
    }
}

impl From<Celsius> for Temperature {
    fn from(value: Celsius) -> Self {
        Temperature::new(value.0, Scale::Celsius)
    }
}
impl From<Fahrenheit> for Temperature {
    fn from(value: Fahrenheit) -> Self {
        Temperature::new(value.0, Scale::Fahrenheit)
    }
}

impl std::fmt::Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} {}", self.value, self.scale)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConversionMode {
    CelsiusToFahrenheit,
    KelvinToCelsius,
    FahrenheitToCelsius,
}

impl ConversionMode {
    /// Menu number of each mode, as shown by the session loop.
    pub fn selector(self) -> u32 {
        match self {
            ConversionMode::CelsiusToFahrenheit => 1,
            ConversionMode::KelvinToCelsius => 2,
            ConversionMode::FahrenheitToCelsius => 3,
        }
    }

    pub fn from_selector(selector: u32) -> Result<ConversionMode, crate::ConversionError> {
        match selector {
            1 => Ok(ConversionMode::CelsiusToFahrenheit),
            2 => Ok(ConversionMode::KelvinToCelsius),
            3 => Ok(ConversionMode::FahrenheitToCelsius),
            other => Err(crate::ConversionError::InvalidMode(other)),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ConversionMode::CelsiusToFahrenheit => "Celsius → Fahrenheit",
            ConversionMode::KelvinToCelsius => "Kelvin → Celsius",
            ConversionMode::FahrenheitToCelsius => "Fahrenheit → Celsius",
        }
    }
}
