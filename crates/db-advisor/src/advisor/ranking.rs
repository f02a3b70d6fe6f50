use serde::Serialize;

use super::catalog::Candidate;
use super::scoring::CandidateScores;

/// A candidate's profile next to its total for the current analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedProfile {
    pub candidate: Candidate,
    pub name: &'static str,
    pub db_type: &'static str,
    pub score: u8,
    pub pros: &'static [&'static str],
    pub cons: &'static [&'static str],
}

pub(crate) fn rank_profiles(scores: &CandidateScores) -> [RankedProfile; 3] {
    let mut ranked = Candidate::ALL.map(|candidate| {
        let profile = candidate.profile();
        RankedProfile {
            candidate,
            name: profile.name,
            db_type: profile.db_type,
            score: scores.get(candidate),
            pros: profile.pros,
            cons: profile.cons,
        }
    });

    // sort_by is stable, so equal scores keep the priority order of Candidate::ALL
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
