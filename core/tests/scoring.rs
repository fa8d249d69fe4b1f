//! Candidate scoring and ranking.

use muster_core::{
    personnel::{Availability, PersonnelRecord},
    scoring::{rank_candidates, score_candidate, MissionRequirement, MAX_RANKED_CANDIDATES},
    seed_roster::seed_roster,
};

fn requirement(role: Option<&str>, skills: &[&str]) -> MissionRequirement {
    MissionRequirement {
        required_role:   role.map(String::from),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn person(health: u32, training: u32, years: u32) -> PersonnelRecord {
    let mut p = seed_roster().remove(0);
    p.health_score = health;
    p.training_score = training;
    p.years_of_service = years;
    p.recompute_readiness();
    p
}

#[test]
fn perfect_match_scores_one_hundred() {
    let p = person(100, 100, 5);
    let req = requirement(Some("Pilot"), &["Night Ops", "Fighter Operations"]);
    let c = score_candidate(&req, &p);
    assert_eq!(c.score, 100);
    assert_eq!(
        c.rationale,
        "Role match (+40), Skills match: 2/2 (+30), Readiness 100% (+20), Experience 5 years (+10)"
    );
}

#[test]
fn unavailable_people_score_zero() {
    for state in [Availability::Deployed, Availability::Leave, Availability::Medical] {
        let mut p = person(100, 100, 20);
        p.availability = state;
        let c = score_candidate(&requirement(Some("Pilot"), &[]), &p);
        assert_eq!(c.score, 0, "{state} should score 0");
        assert_eq!(c.rationale, format!("Not available ({state})"));
    }
}

#[test]
fn partial_skills_earn_a_proportional_share() {
    let p = person(80, 80, 1);
    let req = requirement(None, &["Night Ops", "Underwater Demolition"]);
    let c = score_candidate(&req, &p);
    // 15 for one of two skills, 16 readiness, 2 experience.
    assert_eq!(c.score, 33);
    assert!(c.rationale.contains("Skills match: 1/2 (+15)"), "{}", c.rationale);
    assert!(!c.rationale.contains("Role match"));
}

#[test]
fn experience_is_capped() {
    let short = score_candidate(&requirement(None, &[]), &person(50, 50, 2));
    let long = score_candidate(&requirement(None, &[]), &person(50, 50, 30));
    assert_eq!(short.score, 10 + 4);
    assert_eq!(long.score, 10 + 10);
}

#[test]
fn seed_roster_ranks_available_pilots_first() {
    let roster = seed_roster();
    let ranked = rank_candidates(&requirement(Some("Pilot"), &["Night Ops"]), &roster);

    assert_eq!(ranked[0].person.name, "Capt. Alex Thompson");
    assert_eq!(ranked[0].score, 98);
    assert_eq!(ranked[1].person.name, "Lt. Maria Gonzalez");
    assert_eq!(ranked[1].score, 68);
    assert!(
        ranked.iter().all(|c| c.person.name != "Lt. Col. Robert Davis"),
        "a pilot on leave must not be ranked"
    );
}

#[test]
fn ranking_is_bounded_positive_and_non_increasing() {
    let roster = seed_roster();
    for req in [
        requirement(Some("Engineer"), &[]),
        requirement(None, &["Encryption", "Triage"]),
        requirement(Some("Nobody"), &["Nothing"]),
    ] {
        let ranked = rank_candidates(&req, &roster);
        assert!(ranked.len() <= MAX_RANKED_CANDIDATES);
        assert!(ranked.iter().all(|c| c.score > 0 && c.score <= 100));
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score), "{req:?}");
        assert!(ranked.iter().all(|c| c.person.availability == Availability::Available));
    }
}

#[test]
fn ties_keep_roster_order() {
    let mut a = person(80, 80, 5);
    a.id = "a".into();
    let mut b = a.clone();
    b.id = "b".into();
    let ranked = rank_candidates(&requirement(Some("Pilot"), &[]), &[a, b]);
    let ids: Vec<_> = ranked.iter().map(|c| c.person.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}
