//! Terminal output settings validation.

use crate::schema::ChemistConfig;

use super::helpers::validate_range;

pub(super) fn validate_display(errors: &mut Vec<String>, config: &ChemistConfig) {
    let width = config.display.wrap_width;
    // 0 selects terminal detection.
    if width != 0 {
        validate_range(errors, "display.wrap_width", u64::from(width), 20, 500);
    }
}
