//! Monitor pre-filters: resolution and size class.

use super::PreFilter;
use crate::answers::{MonitorAnswers, ResolutionPreference, SizePreference};
use crate::models::{MonitorAttributes, MonitorProduct, MonitorResolutionClass, MonitorSizeClass};

pub(super) const PRE_FILTERS: &[PreFilter<MonitorAnswers, MonitorAttributes>] =
    &[resolution, size];

/// Size classes from smallest to widest.
const SIZE_ORDER: [MonitorSizeClass; 5] = [
    MonitorSizeClass::Compact,
    MonitorSizeClass::Standard,
    MonitorSizeClass::Large,
    MonitorSizeClass::Ultrawide,
    MonitorSizeClass::SuperUltrawide,
];

/// Keeps the preferred resolution and one step up, never down.
fn resolution(answers: &MonitorAnswers, product: &MonitorProduct) -> bool {
    use MonitorResolutionClass as R;

    let res = product.core_attributes.monitor_resolution_class;
    match answers.resolution {
        ResolutionPreference::P1080 => matches!(res, R::P1080 | R::P1440),
        ResolutionPreference::P1440 => matches!(res, R::P1440 | R::K4),
        ResolutionPreference::K4 => matches!(res, R::K4 | R::K5),
        ResolutionPreference::Any => true,
    }
}

/// Keeps the preferred size class and its immediate neighbours.
fn size(answers: &MonitorAnswers, product: &MonitorProduct) -> bool {
    let target = match answers.size_preference {
        SizePreference::Any => return true,
        SizePreference::Compact => MonitorSizeClass::Compact,
        SizePreference::Standard => MonitorSizeClass::Standard,
        SizePreference::Large => MonitorSizeClass::Large,
        SizePreference::Ultrawide => MonitorSizeClass::Ultrawide,
    };
    let position = |class| SIZE_ORDER.iter().position(|c| *c == class);

    match (position(target), position(product.core_attributes.monitor_size_class)) {
        (Some(want), Some(have)) => want.abs_diff(have) <= 1,
        _ => true,
    }
}
