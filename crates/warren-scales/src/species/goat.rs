use super::{band, opt, question, scale};
use crate::scoring::BandColor::{Green, Orange, Red, Yellow};
use crate::scoring::ScaleDefinition;

pub(crate) fn scales() -> Vec<ScaleDefinition> {
    vec![famacha(), body_condition(), pain()]
}

fn famacha() -> ScaleDefinition {
    scale(
        "FAMACHA Score",
        "FAMACHA\u{a9} Anemia Score for Goats",
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
        "Goat Body Condition Score",
        "Evaluates fat cover and muscle mass on a 1-5 scale",
        vec![question(
            "Body condition",
            "Palpate the spine, ribs, and loin area between the last rib and hip bone",
            vec![
                opt("Emaciated - severe muscle wasting, prominent bones (1)", 1),
                opt("Thin - minimal fat, prominent bones (2)", 2),
                opt("Good - moderate fat cover, palpable bones (3)", 3),
                opt("Fat - bones difficult to palpate (4)", 4),
                opt("Obese - bones not palpable under fat layer (5)", 5),
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

fn pain() -> ScaleDefinition {
    scale(
        "Pain Scale",
        "Goat Pain Scale",
        "Assesses pain through behavioral indicators",
        vec![
            question(
                "Posture",
                "Observe standing position and weight bearing",
                vec![
                    opt("Normal posture, standing naturally", 0),
                    opt("Slightly abnormal posture", 1),
                    opt("Hunched posture, favoring painful area", 2),
                ],
            ),
            question(
                "Movement",
                "Watch movement for 1-2 minutes",
                vec![
                    opt("Normal gait", 0),
                    opt("Mild lameness or gait change", 1),
                    opt("Severe lameness or reluctance to move", 2),
                ],
            ),
            question(
                "Appetite",
                "Check feed consumption and interest in feed when offered",
                vec![
                    opt("Normal appetite", 0),
                    opt("Reduced appetite", 1),
                    opt("No interest in food", 2),
                ],
            ),
            question(
                "Response to palpation",
                "Gently palpate the area of concern",
                vec![
                    opt("No response", 0),
                    opt("Mild flinching or moving away", 1),
                    opt("Strong reaction, vocalization", 2),
                ],
            ),
            question(
                "Facial expression",
                "Observe facial features, ear position, and jaw movement",
                vec![
                    opt("Normal, alert expression", 0),
                    opt("Tense facial muscles, ears back", 1),
                    opt("Obvious grimace, teeth grinding", 2),
                ],
            ),
        ],
        vec![
            band(0, 2, "Minimal pain", Green),
            band(3, 5, "Mild pain - monitor", Yellow),
            band(6, 8, "Moderate pain - treatment advised", Orange),
            band(9, 10, "Severe pain - immediate intervention", Red),
        ],
    )
}
