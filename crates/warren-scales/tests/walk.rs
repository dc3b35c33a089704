use uuid::Uuid;

use warren_scales::catalog::ScaleCatalog;
use warren_scales::error::ScaleError;
use warren_scales::walk::{AnimalContext, AnswerSet, WalkState};

fn context() -> AnimalContext {
    AnimalContext {
        animal_id: Uuid::new_v4(),
        animal_name: "Hazel".to_string(),
        animal_species: "Rat".to_string(),
    }
}

fn rat_bcs_walk() -> AnswerSet {
    let catalog = ScaleCatalog::builtin();
    let scale = catalog
        .lookup("Rat", "Body Condition Score")
        .unwrap()
        .clone();
    AnswerSet::new(scale, context())
}

#[test]
fn forward_walk_completes_and_finalizes() {
    let mut walk = rat_bcs_walk();
    assert_eq!(walk.state(), WalkState::Answering(0));

    assert_eq!(walk.select(1).unwrap(), WalkState::Answering(1));
    assert_eq!(walk.select(2).unwrap(), WalkState::Answering(2));
    assert_eq!(walk.select(1).unwrap(), WalkState::Completed);
    assert!(walk.is_complete());

    let result = walk.finalize().unwrap();
    assert_eq!(result.total_score, 7);
    assert_eq!(result.interpretation.label, "Slightly overweight");
}

#[test]
fn retreat_and_reanswer_overwrites_the_earlier_slot() {
    let mut walk = rat_bcs_walk();
    walk.select(4).unwrap();
    walk.select(4).unwrap();

    // Back up to question 1 and change the answer.
    assert_eq!(walk.retreat().unwrap(), 1);
    assert_eq!(walk.answers()[1], Some(4));
    walk.select(0).unwrap();
    assert_eq!(walk.answers()[1], Some(0));

    walk.select(0).unwrap();
    let result = walk.finalize().unwrap();
    assert_eq!(result.total_score, 5 + 1 + 1);
}

#[test]
fn retreat_floors_at_the_first_question() {
    let mut walk = rat_bcs_walk();
    assert_eq!(walk.retreat().unwrap(), 0);
    assert_eq!(walk.state(), WalkState::Answering(0));
}

#[test]
fn completed_walk_rejects_further_navigation() {
    let mut walk = rat_bcs_walk();
    walk.select(0).unwrap();
    walk.select(0).unwrap();
    walk.select(0).unwrap();

    assert!(matches!(walk.select(0), Err(ScaleError::AlreadyCompleted)));
    assert!(matches!(walk.retreat(), Err(ScaleError::AlreadyCompleted)));
}

#[test]
fn finalize_rejects_an_incomplete_walk() {
    let mut walk = rat_bcs_walk();
    walk.select(1).unwrap();

    let err = walk.finalize().unwrap_err();
    assert!(matches!(
        err,
        ScaleError::IncompleteAssessment {
            answered: 1,
            total: 3
        }
    ));
}

#[test]
fn select_rejects_an_out_of_range_option_and_stays_put() {
    let mut walk = rat_bcs_walk();
    assert!(matches!(
        walk.select(7),
        Err(ScaleError::OptionOutOfRange { .. })
    ));
    assert_eq!(walk.state(), WalkState::Answering(0));
    assert_eq!(walk.answers()[0], None);
}

#[test]
fn current_question_tracks_the_cursor() {
    let mut walk = rat_bcs_walk();
    assert_eq!(
        walk.current_question().unwrap().question,
        "Visible bone structure"
    );
    walk.select(0).unwrap();
    assert_eq!(walk.current_question().unwrap().question, "Muscle mass");
    walk.select(0).unwrap();
    walk.select(0).unwrap();
    assert!(walk.current_question().is_none());
}
