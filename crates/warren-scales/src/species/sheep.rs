use super::{band, opt, question, scale};
use crate::scoring::BandColor::{Green, Orange, Red, Yellow};
use crate::scoring::ScaleDefinition;

pub(crate) fn scales() -> Vec<ScaleDefinition> {
    vec![famacha(), body_condition(), lameness()]
}

fn famacha() -> ScaleDefinition {
    scale(
        "FAMACHA Score",
        "FAMACHA\u{a9} Anemia Score for Sheep",
        "Evaluates anemia based on lower eyelid membrane color",
        vec![question(
            "Conjunctival mucous membrane color",
            "Pull down lower eyelid and compare color to FAMACHA chart",
            vec![
                opt("Red - optimal", 1),
                opt("Red-pink - acceptable", 2),
                opt("Pink - borderline", 3),
                opt("Pink-white - anemic", 4),
                opt("White - severely anemic", 5),
            ],
        )],
        vec![
            band(1, 2, "Non-anemic", Green),
            band(3, 3, "Borderline anemic - monitor closely", Yellow),
            band(4, 4, "Anemic - treatment recommended", Orange),
            band(5, 5, "Severely anemic - immediate treatment required", Red),
        ],
    )
}

fn body_condition() -> ScaleDefinition {
    scale(
        "Body Condition Score",
        "Sheep Body Condition Score",
        "Evaluates fat cover and muscle mass on a 1-5 scale",
        vec![question(
            "Body condition",
            "Feel the spine (especially the lumbar region) and assess fat cover",
            vec![
                opt("Emaciated - vertebrae prominent and sharp (1)", 1),
                opt("Thin - vertebral processes can be felt (2)", 2),
                opt("Good - moderate fat cover, processes smooth (3)", 3),
                opt("Fat - processes difficult to feel (4)", 4),
                opt("Obese - processes cannot be felt (5)", 5),
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
        "Sheep Lameness Score",
        "Evaluates degree of lameness on a 0-3 scale",
        vec![question(
            "Gait assessment",
            "Observe the sheep walking on a flat surface for at least 10 steps",
            vec![
                opt("Normal gait (0)", 0),
                opt("Mildly lame, slightly abnormal gait (1)", 1),
                opt("Moderately lame, favoring one or more limbs (2)", 2),
                opt("Severely lame, minimal weight-bearing (3)", 3),
            ],
        )],
        vec![
            band(0, 0, "Not lame", Green),
            band(1, 1, "Mildly lame - monitor", Yellow),
            band(2, 2, "Moderately lame - treatment advised", Orange),
            band(3, 3, "Severely lame - immediate treatment required", Red),
        ],
    )
}
