//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static ID_ID_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\+?62|0)8(1[123456789]|2[1238]|3[1238]|5[12356789]|7[78]|9[56789]|8[123456789])(\d{5,11})$",
    )
    .expect("Failed to compile id-ID mobile regex")
});

static EN_US_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$",
    )
    .expect("Failed to compile en-US mobile regex")
});

static EN_GB_MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?44|0)7\d{9}$").expect("Failed to compile en-GB mobile regex")
});

/// Region whose mobile numbering plan a phone number is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneRegion {
    /// Indonesia (`id-ID`).
    #[default]
    Indonesia,
    /// United States (`en-US`).
    UnitedStates,
    /// United Kingdom (`en-GB`).
    UnitedKingdom,
}

impl PhoneRegion {
    /// The locale-style code for this region.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Indonesia => "id-ID",
            Self::UnitedStates => "en-US",
            Self::UnitedKingdom => "en-GB",
        }
    }

    /// Whether `phone` is a mobile number in this region.
    pub fn is_mobile(&self, phone: &str) -> bool {
        let pattern = match self {
            Self::Indonesia => &ID_ID_MOBILE,
            Self::UnitedStates => &EN_US_MOBILE,
            Self::UnitedKingdom => &EN_GB_MOBILE,
        };
        pattern.is_match(phone)
    }
}

impl FromStr for PhoneRegion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id-ID" => Ok(Self::Indonesia),
            "en-US" => Ok(Self::UnitedStates),
            "en-GB" => Ok(Self::UnitedKingdom),
            other => Err(ValidationError::UnknownRegion(other.to_string())),
        }
    }
}

impl fmt::Display for PhoneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A type-safe wrapper for mobile phone numbers.
///
/// A `PhoneNumber` has been checked against the numbering plan of a
/// [`PhoneRegion`] at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::{PhoneNumber, PhoneRegion};
///
/// let phone = PhoneNumber::new("081234567890", PhoneRegion::Indonesia).unwrap();
/// assert_eq!(phone.as_str(), "081234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating it against `region`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number is not a mobile
    /// number in the region.
    pub fn new(phone: impl Into<String>, region: PhoneRegion) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !region.is_mobile(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indonesian_mobile_numbers() {
        let region = PhoneRegion::Indonesia;
        assert!(PhoneNumber::new("081234567890", region).is_ok());
        assert!(PhoneNumber::new("+6281234567890", region).is_ok());
        assert!(PhoneNumber::new("6285712345678", region).is_ok());
        assert!(PhoneNumber::new("123", region).is_err());
        assert!(PhoneNumber::new("", region).is_err());
        // 0810 is not an allocated operator prefix
        assert!(PhoneNumber::new("081012345678", region).is_err());
        // landline
        assert!(PhoneNumber::new("0215551234", region).is_err());
    }

    #[test]
    fn test_us_mobile_numbers() {
        let region = PhoneRegion::UnitedStates;
        assert!(PhoneNumber::new("+1 (415) 555-1234", region).is_ok());
        assert!(PhoneNumber::new("415-555-1234", region).is_ok());
        assert!(PhoneNumber::new("081234567890", region).is_err());
    }

    #[test]
    fn test_uk_mobile_numbers() {
        let region = PhoneRegion::UnitedKingdom;
        assert!(PhoneNumber::new("07123456789", region).is_ok());
        assert!(PhoneNumber::new("+447123456789", region).is_ok());
        assert!(PhoneNumber::new("02012345678", region).is_err());
    }

    #[test]
    fn test_region_parse() {
        assert_eq!("id-ID".parse::<PhoneRegion>().unwrap(), PhoneRegion::Indonesia);
        assert_eq!("en-GB".parse::<PhoneRegion>().unwrap(), PhoneRegion::UnitedKingdom);
        assert!(matches!(
            "fr-FR".parse::<PhoneRegion>(),
            Err(ValidationError::UnknownRegion(_))
        ));
        assert_eq!(PhoneRegion::default().to_string(), "id-ID");
    }

    #[test]
    fn test_indonesian_subscriber_part_must_be_digits() {
        let region = PhoneRegion::Indonesia;
        for filler in ["0812|||||", "0812?????", "0812     ", "0812|?|?|?|?|?", "0812 3456 7890"] {
            assert!(
                matches!(PhoneNumber::new(filler, region), Err(ValidationError::InvalidPhone(_))),
                "{:?} should be rejected",
                filler
            );
        }
        assert_eq!(
            PhoneNumber::new("0812345678", region).unwrap().as_str(),
            "0812345678"
        );
    }
}
