//! Static market-trends reference data and its handler.

use axum::Json;
use serde::Serialize;

use crate::auth::extractor::AuthUser;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrendingSkill {
    pub name: &'static str,
    pub growth: &'static str,
    pub demand: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryBand {
    pub role: &'static str,
    pub range: &'static str,
    pub growth: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DemandGrowth {
    pub data_science: &'static [u32],
    pub software_engineering: &'static [u32],
    pub years: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SkillDistribution {
    pub technical: u32,
    pub soft_skills: u32,
    pub domain_knowledge: u32,
    pub tools: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketTrends {
    pub trending_skills: &'static [TrendingSkill],
    pub salary_ranges: &'static [SalaryBand],
    pub demand_growth: DemandGrowth,
    pub skill_distribution: SkillDistribution,
}

pub const MARKET_TRENDS: MarketTrends = MarketTrends {
    trending_skills: &[
        TrendingSkill { name: "Machine Learning", growth: "+25%", demand: "Very High" },
        TrendingSkill { name: "Cloud Computing", growth: "+22%", demand: "Very High" },
        TrendingSkill { name: "Cybersecurity", growth: "+20%", demand: "High" },
        TrendingSkill { name: "Data Engineering", growth: "+18%", demand: "High" },
        TrendingSkill { name: "DevOps", growth: "+15%", demand: "High" },
    ],
    salary_ranges: &[
        SalaryBand { role: "Entry Level", range: "$60k - $85k", growth: "+12%" },
        SalaryBand { role: "Mid Level", range: "$85k - $120k", growth: "+15%" },
        SalaryBand { role: "Senior Level", range: "$120k - $180k", growth: "+18%" },
        SalaryBand { role: "Lead/Principal", range: "$180k - $250k+", growth: "+20%" },
    ],
    demand_growth: DemandGrowth {
        data_science: &[100, 115, 130, 145, 165, 185],
        software_engineering: &[100, 108, 118, 128, 140, 152],
        years: &["2020", "2021", "2022", "2023", "2024", "2025"],
    },
    skill_distribution: SkillDistribution {
        technical: 40,
        soft_skills: 25,
        domain_knowledge: 20,
        tools: 15,
    },
};

/// GET /api/market-trends
pub async fn handle_market_trends(AuthUser(_user): AuthUser) -> Json<MarketTrends> {
    Json(MARKET_TRENDS)
}
