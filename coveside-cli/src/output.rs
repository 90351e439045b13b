//! Render ranked results as plain text or JSON.

use std::fmt::Write as _;

use coveside_core::{ContentItem, Property, Score, TravelEstimate};
use coveside_ranker::{PropertyBreakdown, RelatedBreakdown};
use serde::Serialize;

use crate::CliError;

/// One related-content result prepared for rendering.
#[derive(Debug, Serialize)]
pub(crate) struct RelatedRow {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breakdown: Option<RelatedBreakdown>,
}

impl RelatedRow {
    pub(crate) fn new(item: &ContentItem, score: Score, breakdown: Option<RelatedBreakdown>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            slug: item.slug.clone(),
            score,
            breakdown,
        }
    }
}

/// One property-match result prepared for rendering.
#[derive(Debug, Serialize)]
pub(crate) struct PropertyRow {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) slug: String,
    pub(crate) score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) breakdown: Option<PropertyBreakdown>,
}

impl PropertyRow {
    pub(crate) fn new(item: &Property, score: Score, breakdown: Option<PropertyBreakdown>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            slug: item.slug.clone(),
            score,
            breakdown,
        }
    }
}

pub(crate) fn render_related(
    reference_title: &str,
    rows: &[RelatedRow],
    json: bool,
) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }
    if rows.is_empty() {
        return Ok(format!("No related posts for \"{reference_title}\"."));
    }
    let mut out = format!("Posts related to \"{reference_title}\":\n");
    for (position, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) score {}",
            position + 1,
            row.title,
            row.slug,
            row.score
        );
        if let Some(breakdown) = &row.breakdown {
            let _ = writeln!(out, "   {}", describe_related(breakdown));
        }
    }
    Ok(out.trim_end().to_owned())
}

pub(crate) fn render_properties(
    topic: &str,
    rows: &[PropertyRow],
    json: bool,
) -> Result<String, CliError> {
    if json {
        return Ok(serde_json::to_string_pretty(rows)?);
    }
    if rows.is_empty() {
        return Ok(format!("No properties matched for topic \"{topic}\"."));
    }
    let mut out = format!("Properties for topic \"{topic}\":\n");
    for (position, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) score {}",
            position + 1,
            row.title,
            row.slug,
            row.score
        );
        if let Some(breakdown) = &row.breakdown {
            let _ = writeln!(out, "   {}", describe_property(breakdown));
        }
    }
    Ok(out.trim_end().to_owned())
}

pub(crate) fn render_distance(
    title: &str,
    estimate: &TravelEstimate,
    json: bool,
) -> Result<String, CliError> {
    if json {
        #[derive(Serialize)]
        struct DistanceReport<'a> {
            title: &'a str,
            #[serde(flatten)]
            estimate: &'a TravelEstimate,
            display: String,
        }
        return Ok(serde_json::to_string_pretty(&DistanceReport {
            title,
            estimate,
            display: estimate.display(),
        })?);
    }
    let mut out = format!("{title} is {} from the reference point", estimate.display());
    if let Some(minutes) = estimate.walk_minutes {
        let _ = write!(out, ", about {minutes} min on foot");
    }
    if let Some(minutes) = estimate.drive_minutes {
        let _ = write!(out, ", about {minutes} min by car");
    }
    out.push('.');
    Ok(out)
}

fn describe_related(breakdown: &RelatedBreakdown) -> String {
    let mut parts = Vec::new();
    if let Some(category) = &breakdown.category_matched {
        parts.push(format!("category: {category}"));
    }
    if !breakdown.shared_audiences.is_empty() {
        parts.push(format!(
            "audiences: {}",
            breakdown.shared_audiences.join(", ")
        ));
    }
    if !breakdown.shared_seasons.is_empty() {
        parts.push(format!("seasons: {}", breakdown.shared_seasons.join(", ")));
    }
    if parts.is_empty() {
        "no matched attributes".to_owned()
    } else {
        parts.join("; ")
    }
}

fn describe_property(breakdown: &PropertyBreakdown) -> String {
    let mut parts = Vec::new();
    if !breakdown.matched_locations.is_empty() {
        parts.push(format!(
            "locations: {}",
            breakdown.matched_locations.join(", ")
        ));
    }
    match breakdown.distance {
        coveside_ranker::DistanceVerdict::NotAssessed => {}
        coveside_ranker::DistanceVerdict::WithinFocus {
            minutes,
            max_minutes,
        } => parts.push(format!("within {max_minutes} min ({minutes} min from town)")),
        coveside_ranker::DistanceVerdict::BeyondFocus {
            minutes,
            max_minutes,
        } => parts.push(format!("beyond {max_minutes} min ({minutes} min from town)")),
    }
    if !breakdown.matched_activities.is_empty() {
        parts.push(format!(
            "activities: {}",
            breakdown.matched_activities.join(", ")
        ));
    }
    if !breakdown.matched_features.is_empty() {
        parts.push(format!(
            "features: {}",
            breakdown.matched_features.join(", ")
        ));
    }
    if parts.is_empty() {
        "no matched attributes".to_owned()
    } else {
        parts.join("; ")
    }
}
