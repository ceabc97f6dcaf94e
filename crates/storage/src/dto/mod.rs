pub mod event;
pub mod house;
pub mod result;
pub mod settings;
pub mod standings;

pub(crate) fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        Err(validator::ValidationError::new("blank"))
    } else {
        Ok(())
    }
}
