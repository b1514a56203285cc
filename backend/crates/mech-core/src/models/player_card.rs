//! Static player card and progress summary.
//!
//! Like the analysis catalogue these are demo figures, not derived from uploads.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub total_analyses: u32,
    pub average_score: f64,
    /// Signed percentage as displayed, e.g. "+12%"
    pub improvement_rate: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub title: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyScore {
    pub month: &'static str,
    pub score: f64,
    /// Bar fill, 0..=100
    pub fill_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerCard {
    pub name: &'static str,
    pub email: &'static str,
    pub position: &'static str,
    pub experience: &'static str,
    pub joined: &'static str,
    pub stats: PlayerStats,
    pub achievements: Vec<Achievement>,
    pub monthly_progress: Vec<MonthlyScore>,
}

impl PlayerCard {
    pub fn demo() -> Self {
        Self {
            name: "Alex Johnson",
            email: "alex.johnson@email.com",
            position: "Shortstop",
            experience: "High School Varsity",
            joined: "March 2024",
            stats: PlayerStats {
                total_analyses: 24,
                average_score: 8.2,
                improvement_rate: "+12%",
            },
            achievements: vec![
                Achievement {
                    title: "First Analysis",
                    detail: "Completed March 15, 2024",
                },
                Achievement {
                    title: "7-Day Streak",
                    detail: "Consistent practice week",
                },
                Achievement {
                    title: "Score Improvement",
                    detail: "+2.5 points this month",
                },
                Achievement {
                    title: "Perfect Form",
                    detail: "Scored 9.5+ on swing analysis",
                },
            ],
            monthly_progress: vec![
                MonthlyScore {
                    month: "Mar",
                    score: 7.8,
                    fill_percent: 70,
                },
                MonthlyScore {
                    month: "Apr",
                    score: 8.2,
                    fill_percent: 82,
                },
                MonthlyScore {
                    month: "May",
                    score: 8.5,
                    fill_percent: 85,
                },
            ],
        }
    }
}

/// The signed-in dashboard's "Your Progress" tiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub videos_analyzed: u32,
    pub average_rating: f64,
}

impl ProgressSummary {
    pub fn demo() -> Self {
        Self {
            videos_analyzed: 12,
            average_rating: 8.5,
        }
    }
}
