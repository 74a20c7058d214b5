#![allow(clippy::unwrap_used, clippy::expect_used)]

//! `SeaORM` owner repository against an in-memory database.

mod support;

use horses::OwnerSearch;
use horses::domain::error::DomainError;
use horses::domain::repos::OwnersRepository;
use horses::infra::storage::SeaOwnersRepository;
use support::{inmem_db, new_owner};

async fn seeded() -> (SeaOwnersRepository, Vec<i64>) {
    let repo = SeaOwnersRepository::new(inmem_db().await);
    let mut ids = Vec::new();
    for (first, last) in [("Jane", "Doe"), ("John", "Doe"), ("Max", "Power")] {
        ids.push(repo.create(new_owner(first, last)).await.unwrap().id);
    }
    (repo, ids)
}

#[tokio::test]
async fn test_create_and_get() {
    let repo = SeaOwnersRepository::new(inmem_db().await);
    let mut owner = new_owner("Jane", "Doe");
    owner.email = Some("jane@example.com".to_owned());

    let created = repo.create(owner).await.unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.email.as_deref(), Some("jane@example.com"));
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let repo = SeaOwnersRepository::new(inmem_db().await);

    let err = repo.get_by_id(5).await.unwrap_err();

    assert!(matches!(err, DomainError::OwnerNotFound { id: 5 }));
}

#[tokio::test]
async fn test_get_all_by_id_skips_missing() {
    let (repo, ids) = seeded().await;

    let found = repo.get_all_by_id(&[ids[0], 999, ids[2]]).await.unwrap();

    let found_ids: Vec<i64> = found.iter().map(|o| o.id).collect();
    assert_eq!(found_ids, vec![ids[0], ids[2]]);
    assert!(repo.get_all_by_id(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_matches_full_name() {
    let (repo, _) = seeded().await;

    let does = repo
        .search(&OwnerSearch {
            name: Some("doe".to_owned()),
            max_amount: None,
        })
        .await
        .unwrap();
    assert_eq!(does.len(), 2);

    let jane = repo
        .search(&OwnerSearch {
            name: Some("ANE D".to_owned()),
            max_amount: None,
        })
        .await
        .unwrap();
    assert_eq!(jane.len(), 1);
    assert_eq!(jane[0].first_name, "Jane");
}

#[tokio::test]
async fn test_search_without_name_is_capped() {
    let (repo, _) = seeded().await;

    let all = repo.search(&OwnerSearch::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let capped = repo
        .search(&OwnerSearch {
            name: None,
            max_amount: Some(1),
        })
        .await
        .unwrap();
    assert_eq!(capped.len(), 1);
}

#[tokio::test]
async fn test_delete() {
    let (repo, ids) = seeded().await;

    repo.delete(ids[1]).await.unwrap();

    assert!(repo.get_by_id(ids[1]).await.unwrap_err().is_not_found());
    assert!(matches!(
        repo.delete(ids[1]).await.unwrap_err(),
        DomainError::OwnerNotFound { .. }
    ));
}
