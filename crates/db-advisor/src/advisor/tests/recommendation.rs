use super::common::*;
use crate::advisor::{Candidate, CandidateScores, Confidence, RankedProfile};

fn ranked(scores: CandidateScores) -> Vec<RankedProfile> {
    engine().rank_profiles(&scores)
}

#[test]
fn mysql_reasoning_follows_the_condition_table() {
    let engine = engine();
    let input = web_structured();
    let recommendation = engine
        .generate_recommendation(&ranked(CandidateScores::new(18, 12, 9)), &input)
        .expect("ranking has a leader");

    assert_eq!(recommendation.candidate, Candidate::MySql);
    assert_eq!(recommendation.confidence, Confidence::High);
    assert_eq!(
        recommendation.reasoning,
        vec![
            "MySQL is recommended for your traditional web application needs with structured data.",
            "Strong ACID compliance meets your transaction requirements.",
            "Vertical scaling is sufficient for your scalability needs.",
            "Proven track record for web applications with excellent community support.",
        ]
    );
}

#[test]
fn closeness_note_respects_the_margin() {
    let engine = engine();
    let input = realtime_unstructured();

    let close = engine
        .generate_recommendation(&ranked(CandidateScores::new(8, 17, 19)), &input)
        .expect("ranking has a leader");
    assert_eq!(close.confidence, Confidence::Medium);
    assert_eq!(
        close.reasoning.last().map(String::as_str),
        Some("Note: PostgreSQL scored closely (17 vs 19). Consider evaluating both options based on team expertise.")
    );

    let clear = engine
        .generate_recommendation(&ranked(CandidateScores::new(8, 16, 19)), &input)
        .expect("ranking has a leader");
    assert_eq!(clear.confidence, Confidence::Medium);
    assert!(clear
        .reasoning
        .iter()
        .all(|sentence| !sentence.starts_with("Note:")));
}

#[test]
fn reasoning_never_mentions_other_candidates_except_the_note() {
    let engine = engine();
    let input = realtime_unstructured();
    let recommendation = engine
        .generate_recommendation(&ranked(CandidateScores::new(8, 10, 19)), &input)
        .expect("ranking has a leader");

    assert_eq!(recommendation.reasoning.len(), 5);
    assert!(recommendation.reasoning[0].starts_with("MongoDB"));
    assert!(recommendation
        .reasoning
        .iter()
        .all(|sentence| !sentence.contains("MySQL") && !sentence.contains("PostgreSQL")));
}

#[test]
fn lone_candidate_is_recommended_with_high_confidence() {
    let engine = engine();
    let ranking = ranked(CandidateScores::new(9, 10, 11));

    let recommendation = engine
        .generate_recommendation(&ranking[..1], &baseline())
        .expect("single entry still leads");

    assert_eq!(recommendation.candidate, Candidate::MongoDb);
    assert_eq!(recommendation.confidence, Confidence::High);
    assert_eq!(
        recommendation.reasoning,
        vec!["MongoDB is the best choice for your scalability and flexibility needs."]
    );
}

#[test]
fn empty_ranking_has_no_recommendation() {
    assert!(engine().generate_recommendation(&[], &baseline()).is_none());
}
