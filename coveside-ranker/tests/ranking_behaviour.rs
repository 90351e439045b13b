#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for related-content and property ranking.

use std::cell::RefCell;

use coveside_core::{ContentItem, Property, RankOptions, Score, TopicProfile};
use coveside_ranker::{rank_properties_for_profile, rank_related_by_id};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    posts: RefCell<Vec<ContentItem>>,
    properties: RefCell<Vec<Property>>,
    ranked: RefCell<Vec<(String, Score)>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        posts: RefCell::new(Vec::new()),
        properties: RefCell::new(Vec::new()),
        ranked: RefCell::new(Vec::new()),
    }
}

#[given("a published pool of coastal blog posts")]
fn seeded_posts(context: &TestContext) {
    *context.posts.borrow_mut() = vec![
        ContentItem::new("nature-guide", "A Nature Guide", "nature-guide")
            .with_category("nature")
            .with_audiences(["families"])
            .with_seasons(["summer", "winter"]),
        ContentItem::new("walking-guide", "The Walking Guide", "walking-guide")
            .with_category("nature")
            .with_audiences(["families", "couples"])
            .with_seasons(["summer"]),
        ContentItem::new("seafood-post", "Seasonal Seafood", "seafood-post")
            .with_category("dining")
            .with_seasons(["summer", "winter"]),
        ContentItem::new("estuary-post", "Estuary Birdlife", "estuary-post")
            .with_category("nature"),
        ContentItem::new("history-post", "Town History", "history-post")
            .with_category("history"),
    ];
}

#[given("the property portfolio")]
fn seeded_properties(context: &TestContext) {
    *context.properties.borrow_mut() = vec![
        Property::new("remote-cabin", "Remote Cabin", "remote-cabin")
            .with_location_tags(["remote"])
            .with_distance_from_town(20.0),
        Property::new("waterfront-house", "Waterfront House", "waterfront-house")
            .with_location_tags(["waterfront"])
            .with_distance_from_town(3.0)
            .with_nearby_activities(["fishing", "kayaking"])
            .with_feature_tags(["luxury", "modern"]),
    ];
}

#[when("I rank posts related to the nature guide")]
fn rank_for_nature_guide(context: &TestContext) {
    let posts = context.posts.borrow();
    let ranked = rank_related_by_id("nature-guide", &posts, &RankOptions::default());
    *context.ranked.borrow_mut() = ranked
        .iter()
        .map(|entry| (entry.item.id.clone(), entry.score))
        .collect();
}

#[when("I rank properties for the waterfront topic")]
fn rank_for_waterfront_topic(context: &TestContext) {
    let profile = TopicProfile::new()
        .with_location_focus(["waterfront"])
        .with_activity_tags(["fishing"])
        .with_ideal_features(["luxury"])
        .with_max_distance(5.0);
    let properties = context.properties.borrow();
    let ranked = rank_properties_for_profile(&profile, &properties, 3);
    *context.ranked.borrow_mut() = ranked
        .iter()
        .map(|entry| (entry.item.id.clone(), entry.score))
        .collect();
}

#[then("the walking guide leads with score 6")]
fn walking_guide_leads(context: &TestContext) {
    assert_ranked_at(context, 0, "walking-guide", 6);
}

#[then("the estuary post follows with score 3")]
fn estuary_post_follows(context: &TestContext) {
    assert_ranked_at(context, 1, "estuary-post", 3);
}

#[then("the history post is absent from the results")]
fn history_post_absent(context: &TestContext) {
    let ranked = context.ranked.borrow();
    assert!(
        ranked.iter().all(|(id, _)| id != "history-post"),
        "history post should score zero and be filtered"
    );
}

#[then("the waterfront house leads with score 65")]
fn waterfront_house_leads(context: &TestContext) {
    assert_ranked_at(context, 0, "waterfront-house", 65);
}

fn assert_ranked_at(context: &TestContext, position: usize, id: &str, score: Score) {
    let ranked = context.ranked.borrow();
    let entry = ranked.get(position).expect("result at expected position");
    assert_eq!(entry.0, id);
    assert_eq!(entry.1, score);
}

#[scenario(path = "tests/features/ranking.feature", index = 0)]
fn strongly_related_post_leads(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 1)]
fn unrelated_posts_are_excluded(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/ranking.feature", index = 2)]
fn waterfront_properties_lead(context: TestContext) {
    let _ = context;
}
