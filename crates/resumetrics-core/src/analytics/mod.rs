//! Aggregate analytics over stored candidates.
//!
//! Nothing is cached: every call re-reads the candidate table.

mod chart;

pub use chart::{BarChart, BarLayout};

use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::candidate::split_skills;
use crate::models::config::AnalyticsConfig;
use crate::store::CandidateStore;
use crate::Result;

/// How often a skill appears across candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: u64,
}

/// One histogram bin covering `[start, end)`; the last bin is closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// Charts and raw data for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Base64 PNG of the top skills bar chart.
    pub skills_plot: String,
    /// Base64 PNG of the experience histogram.
    pub exp_plot: String,
    pub skills_data: Vec<SkillCount>,
    pub exp_data: Vec<u32>,
}

/// Analytics over a candidate store.
pub struct ResumeAnalytics<'a> {
    store: &'a CandidateStore,
    config: AnalyticsConfig,
}

impl<'a> ResumeAnalytics<'a> {
    pub fn new(store: &'a CandidateStore) -> Self {
        Self {
            store,
            config: AnalyticsConfig::default(),
        }
    }

    /// Use non-default ranking size, bin count or chart size.
    pub fn with_config(mut self, config: AnalyticsConfig) -> Self {
        self.config = config;
        self
    }

    /// Most frequent skills, by count descending then name.
    pub fn skills_data(&self) -> Result<Vec<SkillCount>> {
        let lists = self.store.skill_lists()?;
        let ranking = rank_skills(lists.iter().map(String::as_str), self.config.top_skills);
        debug!("Ranked {} skills over {} candidates", ranking.len(), lists.len());
        Ok(ranking)
    }

    /// Years of experience, one value per candidate.
    pub fn experience_data(&self) -> Result<Vec<u32>> {
        Ok(self.store.experience_values()?)
    }

    /// Experience histogram with the configured bin count.
    pub fn experience_histogram(&self) -> Result<Vec<HistogramBin>> {
        let values: Vec<f64> = self
            .experience_data()?
            .into_iter()
            .map(f64::from)
            .collect();
        Ok(histogram(&values, self.config.histogram_bins))
    }

    /// PNG bar chart of [`ResumeAnalytics::skills_data`].
    pub fn skills_chart(&self) -> Result<Vec<u8>> {
        let counts: Vec<f64> = self
            .skills_data()?
            .iter()
            .map(|s| s.count as f64)
            .collect();
        Ok(self.chart(BarLayout::Spaced { width: 0.5 }).render_png(&counts)?)
    }

    /// PNG histogram of [`ResumeAnalytics::experience_data`].
    pub fn experience_chart(&self) -> Result<Vec<u8>> {
        let counts: Vec<f64> = self
            .experience_histogram()?
            .iter()
            .map(|b| b.count as f64)
            .collect();
        Ok(self.chart(BarLayout::Contiguous).render_png(&counts)?)
    }

    /// Base64 PNG of the skills chart, for embedding in HTML.
    pub fn skills_chart_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.skills_chart()?))
    }

    /// Base64 PNG of the experience chart, for embedding in HTML.
    pub fn experience_chart_base64(&self) -> Result<String> {
        Ok(STANDARD.encode(self.experience_chart()?))
    }

    /// Both charts plus their raw data.
    pub fn dashboard(&self) -> Result<DashboardReport> {
        Ok(DashboardReport {
            skills_plot: self.skills_chart_base64()?,
            exp_plot: self.experience_chart_base64()?,
            skills_data: self.skills_data()?,
            exp_data: self.experience_data()?,
        })
    }

    fn chart(&self, layout: BarLayout) -> BarChart {
        BarChart::new(self.config.chart_width, self.config.chart_height).with_layout(layout)
    }
}

/// Count skills across comma-separated skill lists and keep the `limit` most
/// frequent.
pub fn rank_skills<'s>(lists: impl IntoIterator<Item = &'s str>, limit: usize) -> Vec<SkillCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for list in lists {
        for skill in split_skills(list) {
            *counts.entry(skill).or_insert(0) += 1;
        }
    }

    let mut ranking: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    ranking.truncate(limit);
    ranking
}

/// Equal-width histogram over the observed range of `values`.
///
/// A single distinct value gets the range `value ± 0.5`. Empty input or zero
/// bins give no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: min + width * i as f64,
            end: if i + 1 == bins { max } else { min + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        result[index].count += 1;
    }

    result
}
