//! Keyboard pre-filters.

use super::PreFilter;
use crate::answers::{ConnectivityPreference, KeyboardAnswers};
use crate::models::{KeyboardAttributes, KeyboardProduct};

pub(super) const PRE_FILTERS: &[PreFilter<KeyboardAnswers, KeyboardAttributes>] = &[connectivity];

fn connectivity(answers: &KeyboardAnswers, product: &KeyboardProduct) -> bool {
    answers.connectivity != ConnectivityPreference::WirelessEssential
        || product.core_attributes.wireless
}
