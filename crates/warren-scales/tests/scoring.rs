use warren_scales::catalog::ScaleCatalog;
use warren_scales::error::ScaleError;
use warren_scales::scoring::{
    resolve_interpretation, score, AnswerOption, BandColor, InterpretationBand,
    QuestionDefinition, ResultPayload, ScaleDefinition, NO_INTERPRETATION,
};

fn fixture_scale(bands: Vec<InterpretationBand>) -> ScaleDefinition {
    ScaleDefinition {
        name: "Fixture".to_string(),
        title: "Fixture Scale".to_string(),
        description: "test only".to_string(),
        questions: vec![QuestionDefinition {
            question: "How is it".to_string(),
            options: vec![
                AnswerOption {
                    text: "fine".to_string(),
                    score: 0,
                },
                AnswerOption {
                    text: "bad".to_string(),
                    score: 5,
                },
            ],
            guidance: None,
        }],
        interpretation: bands,
    }
}

fn band(min: i32, max: i32, label: &str, color: BandColor) -> InterpretationBand {
    InterpretationBand {
        min,
        max,
        label: label.to_string(),
        color,
    }
}

#[test]
fn rat_bcs_example_scores_seven_slightly_overweight() {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup("Rat", "Body Condition Score").unwrap();

    // Option indices for per-question scores 2, 3, 2.
    let result = score(scale, &[Some(1), Some(2), Some(1)]).unwrap();

    assert_eq!(result.total_score, 7);
    assert_eq!(result.interpretation.label, "Slightly overweight");
    assert_eq!(result.interpretation.color, BandColor::Orange);
    assert_eq!(result.details.len(), 3);
    assert_eq!(result.details[0].question, "Visible bone structure");
    assert_eq!(result.details[0].answer, "Bones visible but not prominent");
    assert_eq!(result.details[0].score, 2);
}

#[test]
fn total_is_sum_of_chosen_options_across_the_whole_catalog() {
    let catalog = ScaleCatalog::builtin();
    for species in catalog.species() {
        for name in catalog.list_scales(species) {
            let scale = catalog.lookup(species, name).unwrap();
            // Last option of every question.
            let answers: Vec<Option<usize>> = scale
                .questions
                .iter()
                .map(|q| Some(q.options.len() - 1))
                .collect();
            let expected: i32 = scale
                .questions
                .iter()
                .map(|q| q.options.last().unwrap().score)
                .sum();

            let result = score(scale, &answers).unwrap();
            assert_eq!(result.total_score, expected, "{species}/{name}");
            assert_eq!(result.details.len(), scale.questions.len());
            for (detail, question) in result.details.iter().zip(&scale.questions) {
                assert_eq!(detail.question, question.question);
            }
        }
    }
}

#[test]
fn unanswered_slots_contribute_nothing() {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup("Rat", "Body Condition Score").unwrap();

    let result = score(scale, &[Some(1), None, Some(1)]).unwrap();
    assert_eq!(result.total_score, 4);
    assert_eq!(result.details.len(), 2);
}

#[test]
fn length_mismatch_fails_fast() {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup("Rat", "Body Condition Score").unwrap();

    let err = score(scale, &[Some(0)]).unwrap_err();
    assert!(matches!(
        err,
        ScaleError::AnswerCountMismatch {
            expected: 3,
            got: 1
        }
    ));
}

#[test]
fn out_of_range_option_index_is_an_error() {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup("Goat", "FAMACHA Score").unwrap();

    let err = score(scale, &[Some(9)]).unwrap_err();
    assert!(matches!(err, ScaleError::OptionOutOfRange { index: 9, .. }));
}

#[test]
fn first_declared_band_wins_over_a_tighter_later_band() {
    let scale = fixture_scale(vec![
        band(3, 6, "wide first", BandColor::Orange),
        band(5, 5, "tight second", BandColor::Red),
    ]);

    let result = score(&scale, &[Some(1)]).unwrap();
    assert_eq!(result.total_score, 5);
    assert_eq!(result.interpretation.label, "wide first");
}

#[test]
fn duplicate_bands_in_the_rat_activity_scale_resolve_by_declaration_order() {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup("Rat", "Activity Score").unwrap();

    // 3-4 appears twice with different labels; the first declaration wins.
    let interp = resolve_interpretation(&scale.interpretation, 3);
    assert_eq!(interp.label, "Reduced activity - monitor closely");

    let interp = resolve_interpretation(&scale.interpretation, 6);
    assert_eq!(interp.label, "Normal activity");
}

#[test]
fn unmatched_score_yields_sentinel_interpretation() {
    let scale = fixture_scale(vec![band(0, 1, "low only", BandColor::Green)]);

    let result = score(&scale, &[Some(1)]).unwrap();
    assert_eq!(result.total_score, 5);
    assert_eq!(result.interpretation.label, NO_INTERPRETATION);
    assert_eq!(result.interpretation.color, BandColor::Blue);
}

#[test]
fn payload_round_trips_exactly() {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog.lookup("Pig", "Welfare Assessment").unwrap();

    let result = score(scale, &[Some(2), Some(1), Some(2), Some(2), Some(0)]).unwrap();
    let payload = result.to_payload();
    let json = payload.to_json().unwrap();
    let reparsed = ResultPayload::parse(&json).unwrap();

    assert_eq!(reparsed, payload);
    assert_eq!(reparsed.score, result.total_score);
    assert_eq!(reparsed.interpretation, result.interpretation.label);
    assert_eq!(reparsed.details, result.details);
}

#[test]
fn payload_shape_matches_the_wire_format() {
    let payload = ResultPayload {
        score: 7,
        interpretation: "Slightly overweight".to_string(),
        details: vec![],
    };
    let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
    assert_eq!(value["score"], 7);
    assert_eq!(value["interpretation"], "Slightly overweight");
    assert!(value["details"].is_array());
}

#[test]
fn catalog_lookup_miss_is_unknown_scale() {
    let catalog = ScaleCatalog::builtin();
    let err = catalog.lookup("Rat", "Coat Shine Index").unwrap_err();
    assert!(matches!(err, ScaleError::UnknownScale { .. }));

    let err = catalog.lookup("Hamster", "Body Condition Score").unwrap_err();
    assert!(matches!(err, ScaleError::UnknownScale { .. }));
}

#[test]
fn unmodeled_species_lists_no_scales() {
    let catalog = ScaleCatalog::builtin();
    assert!(catalog.list_scales("Hamster").is_empty());
}

#[test]
fn builtin_catalog_shape() {
    let catalog = ScaleCatalog::builtin();
    assert_eq!(
        catalog.species(),
        vec!["Rat", "Mouse", "Rabbit", "Goat", "Sheep", "Pig"]
    );
    assert_eq!(
        catalog.list_scales("Rat"),
        vec!["Body Condition Score", "Grimace Scale", "Activity Score"]
    );
    for species in catalog.species() {
        let count = catalog.list_scales(species).len();
        assert!((2..=3).contains(&count), "{species} has {count} scales");
    }
}
