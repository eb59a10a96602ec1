//! User service unit tests.

use std::sync::Arc;

use chrono::NaiveDate;
use mockall::predicate::eq;
use mockall::Sequence;

use chillzone_api::domain::User;
use chillzone_api::errors::AppError;
use chillzone_api::infra::MockUserRepository;
use chillzone_api::services::{UserRoster, UserService};

fn birthday(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn roster_user(id: i32, handle: &str) -> User {
    User {
        id,
        handle: handle.to_string(),
        display_name: "Test User".to_string(),
        birthday: birthday(2000, 1, 1),
    }
}

#[tokio::test]
async fn test_get_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_get_by_id()
        .with(eq(1))
        .returning(|id| Ok(roster_user(id, "testnick")));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.get_user(1).await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.handle, "testnick");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_get_by_id().returning(|_| Err(AppError::NotFound));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.get_user(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_get_user_by_handle_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_get_by_handle()
        .with(eq("testnick"))
        .returning(|handle| Ok(roster_user(1, handle)));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.get_user_by_handle("testnick").await;

    assert_eq!(result.unwrap().handle, "testnick");
}

#[tokio::test]
async fn test_get_user_by_handle_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_get_by_handle()
        .returning(|_| Err(AppError::NotFound));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.get_user_by_handle("nobody").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_get_all()
        .returning(|| Ok(vec![roster_user(1, "one"), roster_user(2, "two")]));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.list_users().await;

    assert_eq!(result.unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_empty_roster() {
    let mut repo = MockUserRepository::new();
    repo.expect_get_all().returning(|| Ok(vec![]));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.list_users().await;

    assert!(result.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_user_round_trip() {
    let mut repo = MockUserRepository::new();
    repo.expect_create()
        .with(eq("newnick".to_string()), eq("New User".to_string()), eq(birthday(2000, 1, 1)))
        .returning(|handle, display_name, birthday| {
            Ok(User {
                id: 1,
                handle,
                display_name,
                birthday,
            })
        });
    repo.expect_get_by_id()
        .with(eq(1))
        .returning(|id| {
            Ok(User {
                id,
                handle: "newnick".to_string(),
                display_name: "New User".to_string(),
                birthday: birthday(2000, 1, 1),
            })
        });

    let service = UserRoster::new(Arc::new(repo));
    let created = service
        .create_user(
            "newnick".to_string(),
            "New User".to_string(),
            birthday(2000, 1, 1),
        )
        .await
        .unwrap();

    // Reading back by the assigned id yields identical field values
    let fetched = service.get_user(created.id).await.unwrap();
    assert_eq!(created, fetched);
}

#[tokio::test]
async fn test_create_user_duplicate_handle_conflicts() {
    let mut repo = MockUserRepository::new();
    let mut seq = Sequence::new();
    repo.expect_create()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|handle, display_name, birthday| {
            Ok(User {
                id: 1,
                handle,
                display_name,
                birthday,
            })
        });
    repo.expect_create()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|handle, _, _| Err(AppError::handle_conflict(handle)));

    let service = UserRoster::new(Arc::new(repo));

    let first = service
        .create_user("amy".to_string(), "Amy".to_string(), birthday(2000, 1, 1))
        .await;
    assert!(first.is_ok());

    let second = service
        .create_user("amy".to_string(), "Amy2".to_string(), birthday(1999, 5, 5))
        .await;
    assert!(matches!(second.unwrap_err(), AppError::HandleConflict(_)));
}

#[tokio::test]
async fn test_update_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .with(
            eq(1),
            eq("amy2".to_string()),
            eq("Amy".to_string()),
            eq(birthday(2000, 1, 1)),
        )
        .returning(|id, handle, display_name, birthday| {
            Ok(User {
                id,
                handle,
                display_name,
                birthday,
            })
        });

    let service = UserRoster::new(Arc::new(repo));
    let result = service
        .update_user(
            1,
            "amy2".to_string(),
            "Amy".to_string(),
            birthday(2000, 1, 1),
        )
        .await;

    assert_eq!(result.unwrap().handle, "amy2");
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .returning(|_, _, _, _| Err(AppError::NotFound));

    let service = UserRoster::new(Arc::new(repo));
    let result = service
        .update_user(
            99,
            "ghost".to_string(),
            "Ghost".to_string(),
            birthday(2000, 1, 1),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(1)).returning(|_| Ok(()));

    let service = UserRoster::new(Arc::new(repo));

    assert!(service.delete_user(1).await.is_ok());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().with(eq(1)).returning(|_| Ok(()));
    repo.expect_get_by_id()
        .with(eq(1))
        .returning(|_| Err(AppError::NotFound));

    let service = UserRoster::new(Arc::new(repo));

    service.delete_user(1).await.unwrap();
    let result = service.get_user(1).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().returning(|_| Err(AppError::NotFound));

    let service = UserRoster::new(Arc::new(repo));
    let result = service.delete_user(99).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

/// Full roster lifecycle: create, duplicate conflict, update handle,
/// delete, and observe absence.
#[tokio::test]
async fn test_roster_lifecycle() {
    let mut repo = MockUserRepository::new();
    let mut seq = Sequence::new();

    repo.expect_create()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|handle, display_name, birthday| {
            Ok(User {
                id: 1,
                handle,
                display_name,
                birthday,
            })
        });
    repo.expect_create()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|handle, _, _| Err(AppError::handle_conflict(handle)));
    repo.expect_update()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id, handle, display_name, birthday| {
            Ok(User {
                id,
                handle,
                display_name,
                birthday,
            })
        });
    repo.expect_delete()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    repo.expect_get_by_id()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(AppError::NotFound));

    let service = UserRoster::new(Arc::new(repo));

    let created = service
        .create_user("amy".to_string(), "Amy".to_string(), birthday(2000, 1, 1))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let conflict = service
        .create_user("amy".to_string(), "Amy2".to_string(), birthday(1999, 5, 5))
        .await;
    assert!(matches!(conflict.unwrap_err(), AppError::HandleConflict(_)));

    let updated = service
        .update_user(
            1,
            "amy2".to_string(),
            "Amy".to_string(),
            birthday(2000, 1, 1),
        )
        .await
        .unwrap();
    assert_eq!(updated.handle, "amy2");

    service.delete_user(1).await.unwrap();

    let gone = service.get_user(1).await;
    assert!(matches!(gone.unwrap_err(), AppError::NotFound));
}
