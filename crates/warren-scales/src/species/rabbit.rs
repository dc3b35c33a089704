use super::{band, opt, presence_item, question, scale};
use crate::scoring::BandColor::{Green, Orange, Red, Yellow};
use crate::scoring::ScaleDefinition;

pub(crate) fn scales() -> Vec<ScaleDefinition> {
    vec![grimace(), body_condition(), wellness()]
}

fn grimace() -> ScaleDefinition {
    scale(
        "Rabbit Grimace Scale",
        "Rabbit Grimace Scale (RbGS)",
        "Assesses pain by facial expressions on a 0-2 scale for each feature",
        vec![
            presence_item("Orbital tightening", "Evaluate partial/complete eye closure"),
            presence_item(
                "Cheek flattening",
                "Look for flattened cheeks and less defined cheek muscle",
            ),
            presence_item(
                "Nostril shape",
                "Observe if nostrils are more tightly closed",
            ),
            presence_item(
                "Whisker position",
                "Check if whiskers are pulled back or clumped together",
            ),
            presence_item(
                "Ear position",
                "Observe if ears are folded, pressed back or rotated outwards",
            ),
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
        "Body Condition Score",
        "Rabbit Body Condition Score",
        "Evaluates body fat and muscle mass on a 1-5 scale",
        vec![question(
            "Body condition",
            "Palpate the spine, ribs, and hip bones",
            vec![
                opt("Emaciated - visible spine, ribs, and hipbones", 1),
                opt("Thin - easily palpable spine and ribs", 2),
                opt("Ideal - palpable spine and ribs with gentle pressure", 3),
                opt("Overweight - spine and ribs palpable with firm pressure", 4),
                opt("Obese - cannot feel spine or ribs even with firm pressure", 5),
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

fn wellness() -> ScaleDefinition {
    scale(
        "Wellness Score",
        "Rabbit Wellness Score",
        "Evaluates general health and wellness",
        vec![
            question(
                "Eating and drinking",
                "Check food and water consumption over 24 hours",
                vec![
                    opt("Not eating or drinking", 0),
                    opt("Reduced eating or drinking", 1),
                    opt("Normal eating and drinking", 2),
                ],
            ),
            question(
                "Fecal output",
                "Evaluate quantity, size, and consistency of droppings",
                vec![
                    opt("No fecal pellets or diarrhea", 0),
                    opt("Few, small or abnormal fecal pellets", 1),
                    opt("Normal quantity and quality of fecal pellets", 2),
                ],
            ),
            question(
                "Activity and mobility",
                "Observe mobility in enclosure for 5 minutes",
                vec![
                    opt("Immobile or reluctant to move", 0),
                    opt("Reduced movement or abnormal gait", 1),
                    opt("Normal movement and activity", 2),
                ],
            ),
            question(
                "Grooming",
                "Examine coat condition and observe grooming behavior",
                vec![
                    opt("No grooming, unkempt appearance", 0),
                    opt("Limited grooming, patches of unkempt fur", 1),
                    opt("Normal grooming, clean appearance", 2),
                ],
            ),
        ],
        vec![
            band(7, 8, "Excellent wellness", Green),
            band(5, 6, "Good wellness - monitor", Yellow),
            band(3, 4, "Fair wellness - intervention advised", Orange),
            band(0, 2, "Poor wellness - urgent intervention required", Red),
        ],
    )
}
