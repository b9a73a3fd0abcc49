use rusqlite::Connection;
use stockroom_core::db::open_db_in_memory;
use stockroom_core::{CategoryPatch, CategoryRepository, NewCategory, SqliteCategoryRepository};

fn seed(conn: &Connection) -> (i64, i64, i64) {
    let repo = SqliteCategoryRepository::new(conn);
    let apples = repo
        .create_category(&NewCategory {
            code: Some("FRT".to_string()),
            name: Some("Apples".to_string()),
        })
        .unwrap();
    let bananas = repo
        .create_category(&NewCategory {
            code: Some("TRP".to_string()),
            name: Some("Bananas".to_string()),
        })
        .unwrap();
    let gadgets = repo
        .create_category(&NewCategory {
            code: Some("APX".to_string()),
            name: Some("Gadgets".to_string()),
        })
        .unwrap();
    (apples, bananas, gadgets)
}

#[test]
fn search_matches_code_or_name_case_insensitively() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    let (apples, _bananas, gadgets) = seed(&conn);

    // "ap" hits "Apples" by name and "APX" by code, but not "Bananas".
    let hits = repo.search_categories("ap").unwrap();
    let ids: Vec<i64> = hits.iter().map(|category| category.id).collect();
    assert_eq!(ids, vec![apples, gadgets]);
}

#[test]
fn search_with_no_match_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    seed(&conn);

    assert!(repo.search_categories("zzz").unwrap().is_empty());
}

#[test]
fn search_empty_query_matches_everything() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    seed(&conn);

    assert_eq!(repo.search_categories("").unwrap().len(), 3);
}

#[test]
fn search_treats_like_wildcards_as_literals() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    seed(&conn);

    let discount = repo
        .create_category(&NewCategory {
            code: Some("50%_OFF".to_string()),
            name: Some("Clearance".to_string()),
        })
        .unwrap();

    let percent_hits = repo.search_categories("%").unwrap();
    let ids: Vec<i64> = percent_hits.iter().map(|category| category.id).collect();
    assert_eq!(ids, vec![discount]);

    let underscore_hits = repo.search_categories("%_o").unwrap();
    assert_eq!(underscore_hits.len(), 1);
    assert_eq!(underscore_hits[0].id, discount);
}

#[test]
fn search_folds_case_beyond_ascii() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    seed(&conn);

    let eclairs = repo
        .create_category(&NewCategory {
            code: Some("PAT".to_string()),
            name: Some("Éclairs".to_string()),
        })
        .unwrap();

    let hits = repo.search_categories("éclair").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, eclairs);

    let upper_hits = repo.search_categories("ÉCLAIR").unwrap();
    assert_eq!(upper_hits.len(), 1);
    assert_eq!(upper_hits[0].id, eclairs);
}

#[test]
fn search_reflects_updated_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    let (apples, _, _) = seed(&conn);

    repo.update_category(
        apples,
        &CategoryPatch {
            name: Some("Citrus".to_string()),
            ..CategoryPatch::default()
        },
    )
    .unwrap();

    let old_hits = repo.search_categories("apples").unwrap();
    assert!(old_hits.is_empty());

    let new_hits = repo.search_categories("citrus").unwrap();
    assert_eq!(new_hits.len(), 1);
    assert_eq!(new_hits[0].id, apples);
}
