//! Canned analysis results shown to the user.
//!
//! There is no scoring engine behind these; the catalogue is static demo data.

use crate::UploadKind;

use serde::Serialize;

const EXCELLENT_THRESHOLD: f64 = 8.5;
const GOOD_THRESHOLD: f64 = 7.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MechanicScore {
    pub name: &'static str,
    pub score: f64,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub id: u32,
    pub kind: UploadKind,
    /// Relative label as displayed, e.g. "2 hours ago"
    pub date_label: &'static str,
    pub score: f64,
    pub strengths: Vec<&'static str>,
    pub improvements: Vec<&'static str>,
    pub drills: Vec<&'static str>,
    pub mechanics: Vec<MechanicScore>,
}

impl AnalysisReport {
    pub fn demo_reports() -> Vec<AnalysisReport> {
        vec![
            AnalysisReport {
                id: 1,
                kind: UploadKind::Swing,
                date_label: "2 hours ago",
                score: 8.5,
                strengths: vec!["Good stance", "Proper grip", "Follow-through"],
                improvements: vec!["Hip rotation timing", "Eye contact duration"],
                drills: vec![
                    "Tee work for contact",
                    "Hip rotation exercises",
                    "Vision tracking drills",
                ],
                mechanics: demo_mechanics(),
            },
            AnalysisReport {
                id: 2,
                kind: UploadKind::Pitch,
                date_label: "1 day ago",
                score: 7.8,
                strengths: vec!["Arm slot consistency", "Good balance"],
                improvements: vec!["Stride length", "Release point consistency"],
                drills: vec![
                    "Long toss program",
                    "Balance beam work",
                    "Wall pitching drills",
                ],
                mechanics: demo_mechanics(),
            },
        ]
    }

    pub fn verdict(&self) -> &'static str {
        verdict(self.score)
    }
}

/// One-line judgement displayed under a score
pub fn verdict(score: f64) -> &'static str {
    if score >= EXCELLENT_THRESHOLD {
        "Excellent technique!"
    } else if score >= GOOD_THRESHOLD {
        "Good form with room for improvement"
    } else {
        "Focus on fundamentals"
    }
}

fn demo_mechanics() -> Vec<MechanicScore> {
    vec![
        MechanicScore {
            name: "Stance",
            score: 9.2,
            note: "Excellent balance",
        },
        MechanicScore {
            name: "Timing",
            score: 7.8,
            note: "Slightly early",
        },
        MechanicScore {
            name: "Contact",
            score: 8.5,
            note: "Good extension",
        },
        MechanicScore {
            name: "Follow Through",
            score: 8.9,
            note: "Complete rotation",
        },
    ]
}
