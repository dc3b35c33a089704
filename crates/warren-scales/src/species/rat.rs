use super::{band, opt, presence_item, question, scale};
use crate::scoring::BandColor::{Green, Orange, Red, Yellow};
use crate::scoring::ScaleDefinition;

pub(crate) fn scales() -> Vec<ScaleDefinition> {
    vec![body_condition(), grimace(), activity()]
}

fn body_condition() -> ScaleDefinition {
    scale(
        "Body Condition Score",
        "Rat Body Condition Score (BCS)",
        "Evaluates body fat and muscle mass on a 1-5 scale",
        vec![
            question(
                "Visible bone structure",
                "Observe the rat from above and feel along the spine and hip bones",
                vec![
                    opt("Prominent, easily visible backbone and hipbones", 1),
                    opt("Bones visible but not prominent", 2),
                    opt("Bones palpable but not visible", 3),
                    opt("Bones palpable with firm pressure only", 4),
                    opt("Bones difficult to palpate under fat", 5),
                ],
            ),
            question(
                "Muscle mass",
                "Feel the muscles over the back and hind legs",
                vec![
                    opt("Severely reduced muscle", 1),
                    opt("Reduced muscle mass", 2),
                    opt("Optimal muscle mass", 3),
                    opt("Slightly excessive fat over muscle", 4),
                    opt("Excessive fat obscuring muscle definition", 5),
                ],
            ),
            question(
                "Fat deposits",
                "Check for fat deposits around the abdomen and inguinal area",
                vec![
                    opt("No palpable fat", 1),
                    opt("Minimal fat", 2),
                    opt("Moderate fat coverage", 3),
                    opt("Abundant fat deposits", 4),
                    opt("Excessive fat throughout", 5),
                ],
            ),
        ],
        vec![
            band(3, 4, "Ideal body condition", Green),
            band(5, 7, "Slightly overweight", Orange),
            band(8, 15, "Obese", Red),
            band(2, 2, "Slightly underweight", Orange),
            band(0, 1, "Emaciated", Red),
        ],
    )
}

fn grimace() -> ScaleDefinition {
    scale(
        "Grimace Scale",
        "Rat Grimace Scale (RGS)",
        "Assesses pain by facial expressions on a 0-2 scale for each feature",
        vec![
            presence_item(
                "Orbital tightening",
                "Evaluate partial or complete eye closure",
            ),
            presence_item(
                "Nose/cheek flattening",
                "Look for loss of bulge above the whisker pads",
            ),
            presence_item("Ear changes", "Observe ear fold, tightening, and separation"),
            presence_item(
                "Whisker change",
                "Check if whiskers are clumped, forward pointing or backward swept",
            ),
        ],
        vec![
            band(0, 1, "No pain apparent", Green),
            band(2, 4, "Mild pain", Yellow),
            band(5, 6, "Moderate pain", Orange),
            band(7, 8, "Severe pain", Red),
        ],
    )
}

fn activity() -> ScaleDefinition {
    // The band list below carries a duplicate "Normal activity" entry and an
    // unreachable trailing band, exactly as deployed. First match wins, so
    // removing or reordering them would change labels for stored scores.
    scale(
        "Activity Score",
        "Rat Activity Score",
        "Evaluates general activity level and behavior",
        vec![
            question(
                "Movement in cage",
                "Observe spontaneous movement for 3-5 minutes",
                vec![
                    opt("No movement/severely restricted", 0),
                    opt("Limited movement", 1),
                    opt("Normal movement", 2),
                    opt("Hyperactive movement", 1),
                ],
            ),
            question(
                "Response to handling",
                "Note the animal's reaction when approached and lifted",
                vec![
                    opt("No response/severely decreased", 0),
                    opt("Reduced response", 1),
                    opt("Normal response", 2),
                    opt("Exaggerated/aggressive response", 1),
                ],
            ),
            question(
                "Grooming behavior",
                "Watch for time spent grooming and grooming pattern",
                vec![
                    opt("No grooming observed", 0),
                    opt("Minimal grooming", 1),
                    opt("Normal grooming", 2),
                    opt("Excessive/abnormal grooming", 1),
                ],
            ),
        ],
        vec![
            band(
                0,
                2,
                "Severely reduced activity - urgent attention required",
                Red,
            ),
            band(3, 4, "Reduced activity - monitor closely", Orange),
            band(5, 6, "Normal activity", Green),
            band(5, 6, "Normal activity", Green),
            band(3, 4, "Abnormal activity - monitor closely", Orange),
        ],
    )
}
