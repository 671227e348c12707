//! Audio pre-filters: microphone and wireless requirements.

use super::PreFilter;
use crate::answers::{AudioAnswers, MicNeeds, WirelessRequirement};
use crate::models::{AudioAttributes, AudioProduct};

pub(super) const PRE_FILTERS: &[PreFilter<AudioAnswers, AudioAttributes>] = &[microphone, wireless];

fn microphone(answers: &AudioAnswers, product: &AudioProduct) -> bool {
    answers.mic_needs != MicNeeds::Essential || product.core_attributes.audio_has_mic
}

fn wireless(answers: &AudioAnswers, product: &AudioProduct) -> bool {
    answers.wireless_preference != Some(WirelessRequirement::WirelessRequired)
        || product.core_attributes.wireless
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn headset(mic: bool, wireless: bool) -> AudioProduct {
        AudioProduct::new("h", Category::Audio).with_attributes(AudioAttributes {
            audio_has_mic: mic,
            wireless,
            ..AudioAttributes::default()
        })
    }

    #[test]
    fn test_microphone_filter() {
        let essential = AudioAnswers::new(MicNeeds::Essential);
        assert!(microphone(&essential, &headset(true, false)));
        assert!(!microphone(&essential, &headset(false, false)));

        let optional = AudioAnswers::new(MicNeeds::NiceToHave);
        assert!(microphone(&optional, &headset(false, false)));
    }

    #[test]
    fn test_wireless_filter() {
        let mut answers = AudioAnswers::new(MicNeeds::NotNeeded);
        assert!(wireless(&answers, &headset(false, false)));

        answers.wireless_preference = Some(WirelessRequirement::WirelessPreferred);
        assert!(wireless(&answers, &headset(false, false)));

        answers.wireless_preference = Some(WirelessRequirement::WirelessRequired);
        assert!(!wireless(&answers, &headset(false, false)));
        assert!(wireless(&answers, &headset(false, true)));
    }
}
