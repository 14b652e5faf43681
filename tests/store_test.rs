//! Integration tests for the SQLite store
//!
//! These exercise the repository directly, without the HTTP layer.

use tasklite::store::TodoStore;
use tasklite::types::{NewTodo, TodoPatch, TodoStatus};
use tasklite::Error;
use tempfile::TempDir;

fn new_todo(title: &str, status: TodoStatus) -> NewTodo {
    NewTodo {
        title: title.to_string(),
        status,
    }
}

#[tokio::test]
async fn test_insert_assigns_increasing_ids() {
    let store = TodoStore::open_in_memory().unwrap();

    let first = store
        .insert(new_todo("first", TodoStatus::Todo))
        .await
        .unwrap();
    let second = store
        .insert(new_todo("second", TodoStatus::Todo))
        .await
        .unwrap();

    assert!(first.id > 0);
    assert!(second.id > first.id);
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn test_list_returns_all_rows() {
    let store = TodoStore::open_in_memory().unwrap();
    assert!(store.list().await.unwrap().is_empty());

    store
        .insert(new_todo("one", TodoStatus::Todo))
        .await
        .unwrap();
    store
        .insert(new_todo("two", TodoStatus::Done))
        .await
        .unwrap();

    let todos = store.list().await.unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_partial_update_keeps_unset_fields() {
    let store = TodoStore::open_in_memory().unwrap();
    let todo = store
        .insert(new_todo("original", TodoStatus::Todo))
        .await
        .unwrap();

    let updated = store
        .update(
            todo.id,
            TodoPatch {
                title: Some("renamed".to_string()),
                status: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.status, TodoStatus::Todo);
    assert_eq!(updated.created_at, todo.created_at);
    assert!(updated.updated_at >= todo.updated_at);

    let updated = store
        .update(
            todo.id,
            TodoPatch {
                title: None,
                status: Some(TodoStatus::Done),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.status, TodoStatus::Done);
}

#[tokio::test]
async fn test_update_missing_id_fails() {
    let store = TodoStore::open_in_memory().unwrap();

    let err = store.update(123, TodoPatch::default()).await.unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn test_set_status_forces_value() {
    let store = TodoStore::open_in_memory().unwrap();
    let todo = store
        .insert(new_todo("task", TodoStatus::Done))
        .await
        .unwrap();

    let updated = store
        .set_status(todo.id, TodoStatus::InProgress)
        .await
        .unwrap();
    assert_eq!(updated.status, TodoStatus::InProgress);

    let err = store
        .set_status(999, TodoStatus::Done)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn test_delete_removes_row() {
    let store = TodoStore::open_in_memory().unwrap();
    let todo = store
        .insert(new_todo("task", TodoStatus::Todo))
        .await
        .unwrap();

    store.delete(todo.id).await.unwrap();
    assert!(store.get(todo.id).await.unwrap().is_none());

    // Deleting again reports the missing id
    let err = store.delete(todo.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("todos.db");

    let created = {
        let store = TodoStore::open(&path).unwrap();
        store
            .insert(new_todo("persisted", TodoStatus::InProgress))
            .await
            .unwrap()
    };

    let store = TodoStore::open(&path).unwrap();
    let found = store.get(created.id).await.unwrap().unwrap();

    assert_eq!(found.title, "persisted");
    assert_eq!(found.status, TodoStatus::InProgress);
    assert_eq!(found.created_at, created.created_at);
}
