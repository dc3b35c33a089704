use super::{band, opt, question, scale};
use crate::scoring::BandColor::{Green, Orange, Red, Yellow};
use crate::scoring::ScaleDefinition;

pub(crate) fn scales() -> Vec<ScaleDefinition> {
    vec![body_condition(), lameness(), welfare()]
}

fn body_condition() -> ScaleDefinition {
    scale(
        "Body Condition Score",
        "Pig Body Condition Score",
        "Evaluates fat cover and condition on a 1-5 scale",
        vec![question(
            "Body condition",
            "Feel the backbone, ribs, and hip bones",
            vec![
                opt("Emaciated - prominent backbone and hip bones (1)", 1),
                opt("Thin - easily felt bones with minimal pressure (2)", 2),
                opt("Ideal - bones felt with firm pressure (3)", 3),
                opt("Fat - cannot feel bones without very firm pressure (4)", 4),
                opt("Obese - cannot feel bones even with firm pressure (5)", 5),
            ],
        )],
        vec![
            band(3, 3, "Ideal body condition", Green),
            band(4, 4, "Overweight", Orange),
            band(5, 5, "Obese", Red),
            band(2, 2, "Thin", Orange),
            band(1, 1, "Emaciated", Red),
        ],
    )
}

fn lameness() -> ScaleDefinition {
    scale(
        "Lameness Score",
        "Pig Lameness Score",
        "Evaluates mobility on a 0-5 scale",
        vec![question(
            "Gait and mobility assessment",
            "Observe the pig walking on a flat surface for at least 10 steps",
            vec![
                opt("Normal gait (0)", 0),
                opt("Stiffness, slight abnormality (1)", 1),
                opt("Limping, lameness affecting one limb (2)", 2),
                opt(
                    "Severely lame, minimal weight-bearing on affected limb (3)",
                    3,
                ),
                opt("Very reluctant to move despite encouragement (4)", 4),
                opt("Does not move at all (5)", 5),
            ],
        )],
        vec![
            band(0, 0, "Not lame", Green),
            band(1, 1, "Mildly lame - monitor", Yellow),
            band(2, 2, "Moderately lame - treatment advised", Orange),
            band(3, 5, "Severely lame - immediate treatment required", Red),
        ],
    )
}

fn welfare() -> ScaleDefinition {
    scale(
        "Welfare Assessment",
        "Pig Welfare Assessment",
        "Evaluates overall welfare status",
        vec![
            question(
                "Body condition",
                "Assess overall body condition score",
                vec![
                    opt("Poor body condition", 0),
                    opt("Moderate body condition", 1),
                    opt("Good body condition", 2),
                ],
            ),
            question(
                "Skin lesions/wounds",
                "Check entire body for injuries, scratches, and wounds",
                vec![
                    opt("Multiple or severe wounds/lesions", 0),
                    opt("Few minor lesions", 1),
                    opt("No lesions", 2),
                ],
            ),
            question(
                "Cleanliness",
                "Assess overall cleanliness of the animal",
                vec![
                    opt("Very dirty (>50% of body)", 0),
                    opt("Moderately dirty (10-50% of body)", 1),
                    opt("Clean (<10% of body dirty)", 2),
                ],
            ),
            question(
                "Respiratory condition",
                "Observe breathing pattern and listen for coughing",
                vec![
                    opt("Labored breathing or coughing", 0),
                    opt("Slight respiratory abnormality", 1),
                    opt("Normal breathing", 2),
                ],
            ),
            question(
                "Behavior",
                "Watch for tail/ear biting, aggression, apathy, or stereotypies",
                vec![
                    opt("Abnormal/stereotypic behavior", 0),
                    opt("Slightly abnormal behavior", 1),
                    opt("Normal, species-typical behavior", 2),
                ],
            ),
        ],
        vec![
            band(8, 10, "Good welfare", Green),
            band(5, 7, "Moderate welfare concerns - monitor", Yellow),
            band(3, 4, "Significant welfare concerns - intervention needed", Orange),
            band(0, 2, "Severe welfare concerns - immediate action required", Red),
        ],
    )
}
