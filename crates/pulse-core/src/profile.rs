use crate::dosha::Dosha;
use serde::Serialize;

/// Static guidance attached to a classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoshaGuidance {
    pub health_tendencies: [&'static str; 5],
    pub suggestions: [&'static str; 5],
    pub explanation: &'static str,
}

/// Elements and characteristic traits shown on a dosha profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoshaProfile {
    pub dosha: Dosha,
    pub description: &'static str,
    pub traits: [&'static str; 4],
}

const VATA_GUIDANCE: DoshaGuidance = DoshaGuidance {
    health_tendencies: [
        "Anxiety and nervousness",
        "Sleep disturbances",
        "Dry skin",
        "Joint stiffness",
        "Irregular digestion",
    ],
    suggestions: [
        "Establish regular routines for meals and sleep",
        "Practice grounding exercises like yoga",
        "Stay warm in cool weather",
        "Include warming, nourishing foods",
        "Practice meditation and deep breathing",
    ],
    explanation: "Your pulse suggests a Vata-dominant constitution. Vata is associated with movement, creativity, and nervous system activity. Balance is achieved through routine, warmth, and grounding practices.",
};

const PITTA_GUIDANCE: DoshaGuidance = DoshaGuidance {
    health_tendencies: [
        "Inflammation",
        "Heat-related issues",
        "Excessive appetite",
        "Irritability",
        "Acid reflux",
    ],
    suggestions: [
        "Avoid excessive heat and intense activities during hot hours",
        "Include cooling foods like coconut, cucumber, and melons",
        "Practice cooling breathing techniques",
        "Maintain emotional balance through stress management",
        "Stay hydrated with cool water",
    ],
    explanation: "Your pulse indicates a Pitta-dominant constitution. Pitta governs metabolism and digestion. Balance is achieved through cooling, calming practices and foods that pacify heat.",
};

const KAPHA_GUIDANCE: DoshaGuidance = DoshaGuidance {
    health_tendencies: [
        "Sluggish digestion",
        "Weight gain tendency",
        "Congestion",
        "Lethargy",
        "Water retention",
    ],
    suggestions: [
        "Engage in regular, stimulating exercise",
        "Eat lighter, warmer, and spicier foods",
        "Maintain an early morning routine",
        "Practice stimulating breathing exercises",
        "Stay active and socially engaged",
    ],
    explanation: "Your pulse suggests a Kapha-dominant constitution. Kapha provides structure and stability. Balance is achieved through stimulating, warming practices and lighter foods.",
};

const VATA_PROFILE: DoshaProfile = DoshaProfile {
    dosha: Dosha::Vata,
    description: "Air and ether elements. Associated with movement, creativity, and nervous activity.",
    traits: ["Irregular pulse", "Variable energy", "Quick thinking", "Sensitive nature"],
};

const PITTA_PROFILE: DoshaProfile = DoshaProfile {
    dosha: Dosha::Pitta,
    description: "Fire and water elements. Governs metabolism, digestion, and transformation.",
    traits: ["Strong pulse", "High energy", "Sharp intellect", "Assertive nature"],
};

const KAPHA_PROFILE: DoshaProfile = DoshaProfile {
    dosha: Dosha::Kapha,
    description: "Water and earth elements. Provides structure, stability, and immunity.",
    traits: ["Heavy pulse", "Steady energy", "Calm nature", "Strong immunity"],
};

impl Dosha {
    pub fn guidance(self) -> &'static DoshaGuidance {
        match self {
            Dosha::Vata => &VATA_GUIDANCE,
            Dosha::Pitta => &PITTA_GUIDANCE,
            Dosha::Kapha => &KAPHA_GUIDANCE,
        }
    }

    pub fn profile(self) -> &'static DoshaProfile {
        match self {
            Dosha::Vata => &VATA_PROFILE,
            Dosha::Pitta => &PITTA_PROFILE,
            Dosha::Kapha => &KAPHA_PROFILE,
        }
    }
}
