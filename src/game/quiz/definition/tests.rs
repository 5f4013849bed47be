use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use super::*;

fn raw_question(prompt: &str, correct: usize) -> RawQuestion {
    RawQuestion {
        prompt: prompt.to_owned(),
        option_a: "alpha".to_owned(),
        option_b: "beta".to_owned(),
        option_c: "gamma".to_owned(),
        option_d: "delta".to_owned(),
        correct,
    }
}

#[test]
fn builtin_catalog_is_valid() {
    let definition = QuizDefinition::builtin().unwrap();
    assert_eq!(definition.len(), 5);
    let mut rng = StdRng::seed_from_u64(0);
    let questions = definition.build_question_set(&mut rng).unwrap();
    assert_eq!(questions.len(), 5);
    for question in &questions {
        assert_eq!(question.options().len(), question::OPTIONS_PER_QUESTION);
        assert!(question.correct_index() < question.options().len());
    }
}

#[test]
fn reads_csv_rows() {
    let source = "prompt,option_a,option_b,option_c,option_d,correct\n\
                  \"Pick one, please\",a,b,c,d,3\n";
    let definition = QuizDefinition::from_csv(source).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let questions = definition.build_question_set(&mut rng).unwrap();
    assert_eq!(questions[0].prompt(), "Pick one, please");
    assert_eq!(questions[0].correct_option(), "d");
}

#[test]
fn rejects_malformed_csv() {
    let source = "prompt,option_a,option_b,option_c,option_d,correct\n\
                  Question,a,b,c,d,not a number\n";
    assert!(QuizDefinition::from_csv(source).is_err());
}

#[test]
fn empty_catalog_is_a_construction_error() {
    let definition = QuizDefinition::new(vec![]);
    let mut rng = StdRng::seed_from_u64(0);
    match definition.build_question_set(&mut rng) {
        Err(QuizError::Construction(_)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn out_of_range_answer_is_a_construction_error() {
    let definition = QuizDefinition::new(vec![raw_question("first", 0), raw_question("second", 4)]);
    let mut rng = StdRng::seed_from_u64(0);
    match definition.build_question_set(&mut rng) {
        Err(QuizError::Construction(_)) => (),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn question_set_is_a_permutation_of_the_catalog() {
    let prompts = ["one", "two", "three", "four", "five", "six"];
    let definition = QuizDefinition::new(prompts.iter().map(|p| raw_question(p, 0)).collect());
    let mut rng = StdRng::seed_from_u64(42);
    let mut orders = HashSet::new();
    for _ in 0..20 {
        let questions = definition.build_question_set(&mut rng).unwrap();
        let order: Vec<String> = questions.iter().map(|q| q.prompt().to_owned()).collect();
        let mut sorted = order.clone();
        sorted.sort();
        let mut expected: Vec<String> = prompts.iter().map(|p| p.to_string()).collect();
        expected.sort();
        assert_eq!(sorted, expected);
        orders.insert(order);
    }
    assert!(orders.len() > 1);
}

#[test]
fn question_requires_four_options() {
    let options = vec!["a".to_owned(), "b".to_owned()];
    assert!(Question::new("prompt".into(), options, 0).is_err());
}

#[test]
fn question_rejects_blank_prompt() {
    let options = ["a", "b", "c", "d"].iter().map(|o| o.to_string()).collect();
    assert!(Question::new("   ".into(), options, 0).is_err());
}

#[test]
fn finds_option_by_text() {
    let options = ["Mars", "Vénus", "Blue Whale", "William Shakespeare"]
        .iter()
        .map(|o| o.to_string())
        .collect();
    let question = Question::new("prompt".into(), options, 0).unwrap();
    assert_eq!(question.find_option("mars"), Some(0));
    assert_eq!(question.find_option("VENUS"), Some(1));
    assert_eq!(question.find_option("blue-whale!"), Some(2));
    assert_eq!(question.find_option("william shakespeare"), Some(3));
    assert_eq!(question.find_option("jupiter"), None);
    assert_eq!(question.find_option("?!"), None);
}

#[test]
fn only_exact_index_is_correct() {
    let question: Question = std::convert::TryFrom::try_from(raw_question("prompt", 2)).unwrap();
    assert!(question.is_correct(Some(2)));
    assert!(!question.is_correct(Some(1)));
    assert!(!question.is_correct(None));
    assert_eq!(question.correct_option(), "gamma");
}
