//! 模拟专利数据生成，替代真实的专利检索后端
//!
//! 所有函数只依赖输入主题与调用方提供的随机源，测试中可使用固定种子。

use rand::Rng;
use std::ops::RangeInclusive;

use crate::types::PatentRecord;

/// 检索路径返回的记录数
pub const SEARCH_RESULT_COUNT: usize = 3;

/// 分析路径返回的记录数
pub const ANALYSIS_RECORD_COUNT: usize = 4;

/// 检索结果各槽位的评分区间
pub const SEARCH_SCORE_BRACKETS: [RangeInclusive<f64>; SEARCH_RESULT_COUNT] =
    [80.0..=99.0, 75.0..=89.0, 70.0..=85.0];

/// 分析数据各槽位的评分区间
pub const ANALYSIS_SCORE_BRACKETS: [RangeInclusive<f64>; ANALYSIS_RECORD_COUNT] =
    [85.0..=99.0, 80.0..=95.0, 75.0..=90.0, 70.0..=88.0];

/// 保留两位小数
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn random_patent_id<R: Rng + ?Sized>(rng: &mut R, year: &str) -> String {
    format!("CN{}{}", year, rng.random_range(100_000..=999_999u32))
}

fn random_score<R: Rng + ?Sized>(rng: &mut R, bracket: &RangeInclusive<f64>) -> f64 {
    round2(rng.random_range(bracket.clone()))
}

/// 生成检索用的模拟专利（固定3条）
pub fn search_results<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Vec<PatentRecord> {
    let templates = [
        (
            format!("Lithium Battery {} Technology", query),
            format!(
                "Novel {} technology for lithium battery energy storage, improving cycle life by 30% and energy density by 25%. This patent discloses a new electrode material and manufacturing process suitable for electric vehicle applications.",
                query
            ),
            "2024-01-15",
        ),
        (
            format!("High-Efficiency {} for Lithium-Ion Batteries", query),
            format!(
                "Optimized {} structure for lithium-ion batteries, reducing internal resistance and improving charge/discharge efficiency. Applicable to consumer electronics and energy storage systems.",
                query
            ),
            "2023-10-22",
        ),
        (
            format!("Environmental Protection {} in Lithium Battery Production", query),
            format!(
                "Green {} technology for lithium battery production, reducing carbon emissions by 40% and waste generation by 35%. Complies with international environmental standards and reduces production costs.",
                query
            ),
            "2024-03-08",
        ),
    ];

    templates
        .into_iter()
        .zip(SEARCH_SCORE_BRACKETS.iter())
        .map(|((title, abstract_text, date), bracket)| PatentRecord {
            title,
            abstract_text,
            publication_date: date.to_string(),
            patent_id: random_patent_id(rng, &date[..4]),
            score: random_score(rng, bracket),
            inventor: None,
            assignee: None,
            tech_field: None,
        })
        .collect()
}

/// 生成供分析Agent使用的模拟专利（固定4条）
pub fn analysis_dataset<R: Rng + ?Sized>(research_area: &str, rng: &mut R) -> Vec<PatentRecord> {
    let templates = [
        (
            format!("{} Electrode Material Optimization", research_area),
            format!(
                "Novel electrode material for {} applications, improving cycle life by 35% and energy density by 28%. The material uses nanocomposite technology and is suitable for high-performance EV batteries.",
                research_area
            ),
            "2024-01-15",
            "Zhang San",
            "Battery Tech Co., Ltd.",
            "Electrode Materials",
        ),
        (
            format!("{} Thermal Management System", research_area),
            format!(
                "Intelligent thermal management system for {} packs, reducing operating temperature by 15°C and improving safety by 40%. Integrated with AI-based temperature prediction algorithms.",
                research_area
            ),
            "2024-02-20",
            "Li Si",
            "New Energy Auto Group",
            "Thermal Management",
        ),
        (
            format!("{} Recycling Technology", research_area),
            format!(
                "Eco-friendly {} recycling process, recovering 98% of lithium and cobalt materials. Reduces environmental impact and raw material costs by 30%.",
                research_area
            ),
            "2024-03-10",
            "Wang Wu",
            "Recycling Tech Inc.",
            "Recycling & Sustainability",
        ),
        (
            format!("{} Solid-State Battery Design", research_area),
            format!(
                "Next-generation solid-state {} design, eliminating liquid electrolyte and improving energy density by 50%. Achieves 1000+ charge/discharge cycles with no safety risks.",
                research_area
            ),
            "2024-04-05",
            "Zhao Liu",
            "Advanced Battery Lab",
            "Solid-State Batteries",
        ),
    ];

    templates
        .into_iter()
        .zip(ANALYSIS_SCORE_BRACKETS.iter())
        .map(
            |((title, abstract_text, date, inventor, assignee, tech_field), bracket)| {
                PatentRecord {
                    title,
                    abstract_text,
                    publication_date: date.to_string(),
                    patent_id: random_patent_id(rng, &date[..4]),
                    score: random_score(rng, bracket),
                    inventor: Some(inventor.to_string()),
                    assignee: Some(assignee.to_string()),
                    tech_field: Some(tech_field.to_string()),
                }
            },
        )
        .collect()
}

/// 迭代优化后的评分倍率
pub fn refinement_multiplier(steps: i32) -> f64 {
    1.0 + f64::from(steps) * 0.1
}

/// 按迭代步数放大评分，结果保留两位小数且不做上限截断
pub fn refine_scores(records: &mut [PatentRecord], steps: i32) {
    let multiplier = refinement_multiplier(steps);
    for record in records.iter_mut() {
        record.score = round2(record.score * multiplier);
    }
}
