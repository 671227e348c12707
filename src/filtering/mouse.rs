//! Mouse pre-filters: connection and handedness.

use super::PreFilter;
use crate::answers::{Handedness, MouseAnswers, WirelessChoice};
use crate::models::{MouseAttributes, MouseHandedness, MouseProduct};

pub(super) const PRE_FILTERS: &[PreFilter<MouseAnswers, MouseAttributes>] =
    &[connection, handedness];

/// Wireless answers keep wireless mice, wired answers keep wired ones.
fn connection(answers: &MouseAnswers, product: &MouseProduct) -> bool {
    let wireless = product.core_attributes.wireless;
    match answers.wireless {
        WirelessChoice::Wireless => wireless,
        WirelessChoice::Wired => !wireless,
        WirelessChoice::Either => true,
    }
}

fn handedness(answers: &MouseAnswers, product: &MouseProduct) -> bool {
    use MouseHandedness as H;

    let hand = product.core_attributes.mouse_handedness;
    match answers.handedness {
        None => true,
        Some(Handedness::Left) => matches!(hand, H::Left | H::Ambi | H::ErgoLeft),
        Some(Handedness::Right) => matches!(hand, H::Right | H::Ambi | H::ErgoRight),
        Some(Handedness::Ambidextrous) => hand == H::Ambi,
    }
}
