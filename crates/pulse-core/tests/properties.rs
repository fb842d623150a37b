use proptest::prelude::*;
use pulse_core::{
    classify, PulseObservation, RiskFactors, RiskLevel, Rhythm, StressLevel, Strength,
    Temperature,
};

fn observation() -> impl Strategy<Value = PulseObservation> {
    (
        40u32..=120,
        prop::sample::select(Rhythm::ALL.to_vec()),
        prop::sample::select(Strength::ALL.to_vec()),
        prop::sample::select(Temperature::ALL.to_vec()),
        prop::sample::select(StressLevel::ALL.to_vec()),
    )
        .prop_map(|(rate, rhythm, strength, temperature, stress)| {
            PulseObservation::new(rate, rhythm, strength, temperature, stress)
        })
}

proptest! {
    #[test]
    fn percentage_stays_within_bounds(o in observation()) {
        let result = classify(&o).unwrap();
        prop_assert!(result.dosha_percentage <= 100);
    }

    #[test]
    fn classification_is_deterministic(o in observation()) {
        prop_assert_eq!(classify(&o).unwrap(), classify(&o).unwrap());
    }

    #[test]
    fn adding_a_risk_factor_never_lowers_the_tier(o in observation()) {
        let before = classify(&o).unwrap().risk_level;

        let escalations = [
            PulseObservation { stress_level: StressLevel::High, ..o },
            PulseObservation { rhythm: Rhythm::Irregular, ..o },
            PulseObservation { temperature: Temperature::Warm, ..o },
            PulseObservation { pulse_rate: 110, ..o },
        ];
        for escalated in escalations {
            let after = classify(&escalated).unwrap().risk_level;
            prop_assert!(after >= before, "{:?} -> {:?}", before, after);
        }
    }

    #[test]
    fn three_or_more_factors_is_high(o in observation()) {
        let factors = RiskFactors::from_observation(&o);
        if factors.count() >= 3 {
            prop_assert_eq!(classify(&o).unwrap().risk_level, RiskLevel::High);
        }
    }
}
