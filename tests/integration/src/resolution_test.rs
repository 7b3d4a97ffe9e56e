//! End-to-end resolution scenarios against the in-memory store.

use pretty_assertions::assert_eq;
use sections_engine::{EngineConfig, Resolver};
use sections_model::{ContentRecord, SettingAccess, Variant};
use sections_store::ContentStore;
use sections_test_utils::{MemoryStore, definition_record, document_record};
use std::sync::Arc;

/// A store resembling a small site: a hero definition with settings and
/// blocks, a wildcard footer definition, referenced entries and assets.
fn site_store() -> Arc<MemoryStore> {
    Arc::new(
        MemoryStore::new()
            .with(document_record(
                "hero-config",
                r#"{
                    "settings": [
                        {"id": "headline", "type": "text"},
                        {"id": "subtitle", "type": "text", "default": "sub"},
                        {"id": "columns", "type": "number", "default": 2},
                        {"id": "dark", "type": "checkbox"},
                        {"id": "author", "type": "entry"},
                        {"id": "background", "type": "image_picker"}
                    ],
                    "blocks": [
                        {"type": "cta", "name": "Call To Action",
                         "settings": [{"id": "label", "type": "text"},
                                      {"id": "priority", "type": "range", "default": 1}]}
                    ]
                }"#,
            ))
            .with(definition_record(
                "hero-def",
                "Hero",
                &["page:hero"],
                Some("hero-config"),
            ))
            .with(definition_record(
                "footer-def",
                "Footer",
                &["*:footer"],
                None,
            ))
            .with(document_record(
                "hero-payload",
                r#"{
                    "settings": {
                        "headline": "Welcome",
                        "dark": 1,
                        "author": "author-1",
                        "background": "/assets/bg-photo",
                        "stray": "dropped"
                    },
                    "blocks": [
                        {"type": "cta", "settings": {"label": "Go"}},
                        {"type": "testimonial", "settings": {"quote": "hidden"}},
                        {"type": "cta", "settings": {"label": "Buy", "priority": "5"}}
                    ]
                }"#,
            ))
            .with(document_record("footer-payload", "{}"))
            .with(ContentRecord::new("author-1", "author").with_field("name", "Jules"))
            .with(
                ContentRecord::new("asset-1", "asset")
                    .with_external_id("bg-photo")
                    .with_field("url", "https://cdn.example/bg.jpg"),
            ),
    )
}

fn page_record() -> ContentRecord {
    ContentRecord::new("page-1", "page")
        .with_reference("hero", "hero-payload")
        .with_reference("footer", "footer-payload")
}

#[tokio::test]
async fn page_resolves_hero_and_footer_sections() {
    let store = site_store();
    let resolver = Resolver::new(store as Arc<dyn ContentStore>);

    let sections = resolver.sections(&page_record()).await;
    let ids: Vec<_> = sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["hero", "footer"]);
    assert_eq!(sections[0].name.as_deref(), Some("Hero"));
    assert_eq!(sections[1].name.as_deref(), Some("Footer"));
}

#[tokio::test]
async fn hero_settings_are_typed_ordered_and_defaulted() {
    let store = site_store();
    let resolver = Resolver::new(store as Arc<dyn ContentStore>);

    let hero = resolver.section(&page_record(), "hero").await.unwrap();

    let ids: Vec<_> = hero.settings.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["headline", "subtitle", "columns", "dark", "author", "background"]
    );

    assert_eq!(hero.setting_text("headline").as_deref(), Some("Welcome"));
    // Absent from payload, falls back to declared default
    assert_eq!(hero.setting_text("subtitle").as_deref(), Some("sub"));
    assert_eq!(hero.setting_number("columns"), Some(2.0));
    assert_eq!(hero.setting_boolean("dark"), Some(true));
    // Undeclared payload key never surfaces
    assert!(hero.setting("stray").is_none());

    let author = hero.setting_node("author").unwrap();
    assert_eq!(author.field_str("name"), Some("Jules"));

    let background = hero.setting_asset("background").unwrap();
    assert_eq!(background.field_str("url"), Some("https://cdn.example/bg.jpg"));
    assert_eq!(hero.setting("background").unwrap().variant, Variant::Asset);
}

#[tokio::test]
async fn hero_blocks_follow_payload_order_with_unknown_fallback() {
    let store = site_store();
    let resolver = Resolver::new(store as Arc<dyn ContentStore>);

    let hero = resolver.section(&page_record(), "hero").await.unwrap();
    assert_eq!(hero.blocks.len(), 3);

    let first = &hero.blocks[0];
    assert_eq!((first.index, first.name.as_str()), (0, "Call To Action"));
    assert_eq!(first.setting_text("label").as_deref(), Some("Go"));
    assert_eq!(first.setting_number("priority"), Some(1.0));

    // No block config for "testimonial": named Unknown, settings hidden
    let second = &hero.blocks[1];
    assert_eq!((second.index, second.name.as_str()), (1, "Unknown"));
    assert!(second.settings.is_empty());

    let third = &hero.blocks[2];
    assert_eq!(third.index, 2);
    assert_eq!(third.setting_number("priority"), Some(5.0));

    let ctas = hero.blocks_of_type("cta");
    let indices: Vec<_> = ctas.iter().map(|b| b.index).collect();
    assert_eq!(indices, vec![0, 2]);
}

#[tokio::test]
async fn footer_matches_by_wildcard_on_any_type() {
    let store = site_store();
    let resolver = Resolver::new(store as Arc<dyn ContentStore>);
    let article = ContentRecord::new("article-1", "article").with_reference("footer", "footer-payload");

    let sections = resolver.sections(&article).await;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].id, "footer");
    assert!(sections[0].settings.is_empty());
}

#[tokio::test]
async fn concurrent_first_resolutions_issue_one_definition_query() {
    let store = site_store();
    let resolver = Arc::new(Resolver::new(Arc::clone(&store) as Arc<dyn ContentStore>));
    let record = page_record();

    let (a, b) = tokio::join!(resolver.sections(&record), resolver.sections(&record));
    assert_eq!(a.len(), b.len());
    assert_eq!(store.type_query_count(), 1);
}

#[tokio::test]
async fn unrelated_record_resolves_to_nothing() {
    let store = site_store();
    let resolver = Resolver::new(store as Arc<dyn ContentStore>);
    let record = ContentRecord::new("r1", "navigation");

    assert!(resolver.sections(&record).await.is_empty());
    assert!(resolver.section(&record, "hero").await.is_none());
}

#[tokio::test]
async fn broken_definition_source_degrades_to_zero_sections() {
    let store = Arc::new(MemoryStore::failing());
    let resolver = Resolver::new(store as Arc<dyn ContentStore>);

    assert!(resolver.sections(&page_record()).await.is_empty());
}

#[tokio::test]
async fn custom_definition_type_routes_the_definition_query() {
    let store = Arc::new(
        MemoryStore::new()
            .with(
                ContentRecord::new("d1", "legacyDefs")
                    .with_field("title", "Hero")
                    .with_field("models", serde_json::json!(["page:hero"])),
            )
            .with(document_record("hero-payload", "{}")),
    );
    let config = EngineConfig::parse(r#"definition_type = "legacyDefs""#).unwrap();
    let resolver = Resolver::with_config(store as Arc<dyn ContentStore>, config);
    let record = ContentRecord::new("page-1", "page").with_reference("hero", "hero-payload");

    let sections = resolver.sections(&record).await;
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].name.as_deref(), Some("Hero"));
}
