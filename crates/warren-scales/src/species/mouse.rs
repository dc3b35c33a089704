use super::{band, opt, presence_item, question, scale};
use crate::scoring::BandColor::{Green, Orange, Red, Yellow};
use crate::scoring::ScaleDefinition;

pub(crate) fn scales() -> Vec<ScaleDefinition> {
    vec![grimace(), body_condition(), activity_level()]
}

fn grimace() -> ScaleDefinition {
    scale(
        "Mouse Grimace Scale",
        "Mouse Grimace Scale (MGS)",
        "Assesses pain by facial expressions on a 0-2 scale for each feature",
        vec![
            presence_item("Orbital tightening", "Evaluate eye closure, eyelid squeezing"),
            presence_item("Nose bulge", "Look for bulge formation on bridge of nose"),
            presence_item("Cheek bulge", "Observe bulge formation on cheek"),
            presence_item(
                "Ear position",
                "Check for ear rotation and separation from head",
            ),
            presence_item("Whisker change", "Observe whisker position and movement"),
        ],
        vec![
            band(0, 2, "No pain apparent", Green),
            band(3, 5, "Mild pain", Yellow),
            band(6, 8, "Moderate pain", Orange),
            band(9, 10, "Severe pain", Red),
        ],
    )
}

fn body_condition() -> ScaleDefinition {
    scale(
        "BCS Mouse",
        "Mouse Body Condition Score",
        "Evaluates body fat and muscle mass on a 1-5 scale",
        vec![question(
            "Overall body condition",
            "Evaluate by looking at mouse from behind and feeling spine and tail base",
            vec![
                opt("Emaciated - severe muscle wasting, prominent bones", 1),
                opt("Underweight - segmentation of vertebral column visible", 2),
                opt("Optimal - smooth and rounded appearance", 3),
                opt(
                    "Overweight - segmentation of vertebral column palpable with firm pressure",
                    4,
                ),
                opt(
                    "Obese - bones difficult to palpate, mouse has obese appearance",
                    5,
                ),
            ],
        )],
        vec![
            band(3, 3, "Ideal body condition", Green),
            band(4, 4, "Overweight", Orange),
            band(5, 5, "Obese", Red),
            band(2, 2, "Underweight", Orange),
            band(1, 1, "Emaciated", Red),
        ],
    )
}

fn activity_level() -> ScaleDefinition {
    scale(
        "Activity Level",
        "Mouse Activity Level Assessment",
        "Evaluates general behavior and activity",
        vec![
            question(
                "Activity level",
                "Observe mouse for 3-5 minutes in home cage",
                vec![
                    opt("Inactive, unresponsive", 0),
                    opt("Minimal movement, reduced responsiveness", 1),
                    opt("Normal activity and responsiveness", 2),
                ],
            ),
            question(
                "Posture",
                "Note posture during movement and rest",
                vec![
                    opt("Hunched, stationary", 0),
                    opt("Mildly hunched, moving", 1),
                    opt("Normal posture", 2),
                ],
            ),
            question(
                "Coat condition",
                "Examine fur condition and grooming status",
                vec![
                    opt("Rough, unkempt, piloerection", 0),
                    opt("Slightly unkempt", 1),
                    opt("Smooth, well-groomed coat", 2),
                ],
            ),
        ],
        vec![
            band(5, 6, "Normal condition", Green),
            band(3, 4, "Mild concerns - monitor closely", Yellow),
            band(1, 2, "Moderate concerns - intervention advised", Orange),
            band(
                0,
                0,
                "Severe concerns - immediate intervention required",
                Red,
            ),
        ],
    )
}
