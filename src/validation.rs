//! Form validation for new drink records
//!
//! Pure functions, no side effects. Each field check returns a typed
//! [`FieldError`]; the UI layer re-runs the relevant check on every field
//! change, and [`RecordForm::submit`] re-runs all of them atomically before
//! a record is built. Lengths count Unicode scalar values.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{DrinkRecord, DrinkType, Prefecture};

/// Maximum length of the beverage name
pub const MAX_NAME_CHARS: usize = 50;
/// Maximum length of the manufacturer
pub const MAX_MANUFACTURER_CHARS: usize = 50;
/// Maximum length of the free-text description
pub const MAX_DESCRIPTION_CHARS: usize = 500;
/// Maximum rating (minimum is 1; 0 means "not selected")
pub const MAX_RATING: u8 = 5;

/// A single failed field check
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("name must not be blank")]
    NameBlank,
    #[error("name must be at most {MAX_NAME_CHARS} characters")]
    NameTooLong,
    #[error("manufacturer must be at most {MAX_MANUFACTURER_CHARS} characters")]
    ManufacturerTooLong,
    #[error("drink type must be selected")]
    DrinkTypeMissing,
    #[error("prefecture must be selected")]
    PrefectureMissing,
    #[error("rating must be selected")]
    RatingMissing,
    #[error("rating must be between 1 and {MAX_RATING}")]
    RatingOutOfRange,
    #[error("drink date must not be in the future")]
    DateInFuture,
    #[error("description must be at most {MAX_DESCRIPTION_CHARS} characters")]
    DescriptionTooLong,
}

/// All field errors from one validation pass
///
/// One slot per field; a slot is `None` when the field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub manufacturer: Option<FieldError>,
    pub drink_type: Option<FieldError>,
    pub prefecture: Option<FieldError>,
    pub rating: Option<FieldError>,
    pub drink_date: Option<FieldError>,
    pub description: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.manufacturer.is_none()
            && self.drink_type.is_none()
            && self.prefecture.is_none()
            && self.rating.is_none()
            && self.drink_date.is_none()
            && self.description.is_none()
    }
}

/// Name: required, non-blank, at most 50 characters
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::NameBlank);
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(FieldError::NameTooLong);
    }
    Ok(())
}

/// Manufacturer: optional, at most 50 characters
pub fn validate_manufacturer(manufacturer: &str) -> Result<(), FieldError> {
    if manufacturer.chars().count() > MAX_MANUFACTURER_CHARS {
        return Err(FieldError::ManufacturerTooLong);
    }
    Ok(())
}

/// Rating: 1 through 5; 0 means nothing was picked yet
pub fn validate_rating(rating: u8) -> Result<(), FieldError> {
    if rating == 0 {
        return Err(FieldError::RatingMissing);
    }
    if rating > MAX_RATING {
        return Err(FieldError::RatingOutOfRange);
    }
    Ok(())
}

/// Drink date: today or earlier
pub fn validate_drink_date(date: NaiveDate, today: NaiveDate) -> Result<(), FieldError> {
    if date > today {
        return Err(FieldError::DateInFuture);
    }
    Ok(())
}

/// Description: optional, at most 500 characters
pub fn validate_description(description: &str) -> Result<(), FieldError> {
    if description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(FieldError::DescriptionTooLong);
    }
    Ok(())
}

/// User input for a record as entered, before any check has passed
///
/// Closed-set fields are `None` until the user picks from the set; rating
/// is 0 until picked. Text fields hold whatever was typed.
#[derive(Debug, Clone, Default)]
pub struct RecordForm {
    pub name: String,
    pub manufacturer: String,
    pub drink_type: Option<DrinkType>,
    pub prefecture: Option<Prefecture>,
    pub rating: u8,
    pub photo_path: Option<String>,
    pub drink_date: Option<NaiveDate>,
    pub description: String,
}

impl RecordForm {
    /// Run every field check against `today`
    pub fn validate(&self, today: NaiveDate) -> ValidationErrors {
        ValidationErrors {
            name: validate_name(&self.name).err(),
            manufacturer: validate_manufacturer(&self.manufacturer).err(),
            drink_type: if self.drink_type.is_none() {
                Some(FieldError::DrinkTypeMissing)
            } else {
                None
            },
            prefecture: if self.prefecture.is_none() {
                Some(FieldError::PrefectureMissing)
            } else {
                None
            },
            rating: validate_rating(self.rating).err(),
            drink_date: self
                .drink_date
                .and_then(|d| validate_drink_date(d, today).err()),
            description: validate_description(&self.description).err(),
        }
    }

    /// Validate everything and build the record on success
    ///
    /// Blank optional text becomes `None`; a missing drink date defaults to
    /// `today`. Identity and creation time are assigned by the factory.
    pub fn submit(self, today: NaiveDate) -> Result<DrinkRecord, ValidationErrors> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }

        let manufacturer = non_blank(self.manufacturer);
        let description = non_blank(self.description);

        Ok(DrinkRecord::new(
            self.name,
            manufacturer,
            self.drink_type.expect("validated above"),
            self.prefecture.expect("validated above"),
            self.rating,
            self.photo_path,
            self.drink_date.unwrap_or(today),
            description,
        ))
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn filled_form() -> RecordForm {
        RecordForm {
            name: "八海山".to_string(),
            manufacturer: "八海醸造".to_string(),
            drink_type: Some(DrinkType::Sake),
            prefecture: Some(Prefecture::Niigata),
            rating: 4,
            photo_path: None,
            drink_date: Some(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()),
            description: "辛口".to_string(),
        }
    }

    #[test]
    fn test_name_blank_rejected() {
        assert_eq!(validate_name(""), Err(FieldError::NameBlank));
        assert_eq!(validate_name("   "), Err(FieldError::NameBlank));
        assert_eq!(validate_name("\u{3000}"), Err(FieldError::NameBlank));
    }

    #[test]
    fn test_name_length_boundary() {
        let exactly_50 = "酒".repeat(50);
        assert_eq!(validate_name(&exactly_50), Ok(()));

        let over_50 = "酒".repeat(51);
        assert_eq!(validate_name(&over_50), Err(FieldError::NameTooLong));
    }

    #[test]
    fn test_manufacturer_optional_but_bounded() {
        assert_eq!(validate_manufacturer(""), Ok(()));
        assert_eq!(validate_manufacturer(&"a".repeat(50)), Ok(()));
        assert_eq!(
            validate_manufacturer(&"a".repeat(51)),
            Err(FieldError::ManufacturerTooLong)
        );
    }

    #[test]
    fn test_rating_bounds() {
        assert_eq!(validate_rating(0), Err(FieldError::RatingMissing));
        for r in 1..=5 {
            assert_eq!(validate_rating(r), Ok(()));
        }
        assert_eq!(validate_rating(6), Err(FieldError::RatingOutOfRange));
    }

    #[test]
    fn test_date_today_and_past_accepted_future_rejected() {
        let t = today();
        assert_eq!(validate_drink_date(t, t), Ok(()));
        assert_eq!(validate_drink_date(t.pred_opt().unwrap(), t), Ok(()));
        assert_eq!(
            validate_drink_date(t.succ_opt().unwrap(), t),
            Err(FieldError::DateInFuture)
        );
    }

    #[test]
    fn test_description_boundary() {
        assert_eq!(validate_description(&"あ".repeat(500)), Ok(()));
        assert_eq!(
            validate_description(&"あ".repeat(501)),
            Err(FieldError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_validate_reports_all_failures_at_once() {
        let form = RecordForm {
            name: String::new(),
            rating: 0,
            drink_date: Some(today().succ_opt().unwrap()),
            ..Default::default()
        };
        let errors = form.validate(today());
        assert_eq!(errors.name, Some(FieldError::NameBlank));
        assert_eq!(errors.drink_type, Some(FieldError::DrinkTypeMissing));
        assert_eq!(errors.prefecture, Some(FieldError::PrefectureMissing));
        assert_eq!(errors.rating, Some(FieldError::RatingMissing));
        assert_eq!(errors.drink_date, Some(FieldError::DateInFuture));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_submit_builds_record_from_valid_form() {
        let record = filled_form().submit(today()).unwrap();
        assert_eq!(record.name(), "八海山");
        assert_eq!(record.manufacturer(), Some("八海醸造"));
        assert_eq!(record.drink_type(), DrinkType::Sake);
        assert_eq!(record.prefecture(), Prefecture::Niigata);
        assert_eq!(record.rating(), 4);
        assert_eq!(
            record.drink_date(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
        assert_eq!(record.description(), Some("辛口"));
    }

    #[test]
    fn test_submit_turns_blank_optionals_into_none() {
        let mut form = filled_form();
        form.manufacturer = "  ".to_string();
        form.description = String::new();
        let record = form.submit(today()).unwrap();
        assert_eq!(record.manufacturer(), None);
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_submit_defaults_missing_date_to_today() {
        let mut form = filled_form();
        form.drink_date = None;
        let record = form.submit(today()).unwrap();
        assert_eq!(record.drink_date(), today());
    }

    #[test]
    fn test_submit_rejects_invalid_form() {
        let mut form = filled_form();
        form.rating = 6;
        let errors = form.submit(today()).unwrap_err();
        assert_eq!(errors.rating, Some(FieldError::RatingOutOfRange));
    }
}
