use anyhow::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set};
use ulid::Ulid;

use super::setup_test_db;
use crate::{lab, lab_result};

fn new_lab(key_name: &str) -> lab::ActiveModel {
    lab::ActiveModel {
        external_id: Set(Ulid::new().to_string()),
        key_name: Set(key_name.to_string()),
        name: Set(format!("{key_name} Lab")),
        description: Set(None),
        ..Default::default()
    }
}

fn new_result(lab_id: i32, nif: &str) -> lab_result::ActiveModel {
    lab_result::ActiveModel {
        external_id: Set(Ulid::new().to_string()),
        lab_id: Set(lab_id),
        nif: Set(nif.to_string()),
        patient_name: Set("Ana Perez".to_string()),
        date: Set(1_700_000_000_000),
        data: Set("hemoglobin 14.2".to_string()),
        status: Set("pending".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_lab_crud() -> Result<()> {
    let db = setup_test_db().await?;

    let created = new_lab("LAB-CRUD").insert(&db).await?;
    assert!(created.id > 0);
    assert_eq!(created.key_name, "LAB-CRUD");
    assert!(created.created_at().is_some());

    let by_key = lab::Entity::find()
        .filter(lab::Column::KeyName.eq("LAB-CRUD"))
        .one(&db)
        .await?;
    assert_eq!(by_key.as_ref().map(|l| l.id), Some(created.id));

    let mut am: lab::ActiveModel = created.clone().into();
    am.name = Set("Renamed".to_string());
    am.description = Set(Some("now described".to_string()));
    let updated = am.update(&db).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.external_id, created.external_id);
    assert_eq!(updated.description.as_deref(), Some("now described"));

    updated.delete(&db).await?;
    assert!(lab::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_lab_key_name_is_unique() -> Result<()> {
    let db = setup_test_db().await?;

    new_lab("LAB-DUP").insert(&db).await?;
    let err = new_lab("LAB-DUP").insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(sea_orm::SqlErr::UniqueConstraintViolation(_))));
    Ok(())
}

#[tokio::test]
async fn test_result_nif_is_not_unique() -> Result<()> {
    let db = setup_test_db().await?;

    let first = new_result(1, "123-4").insert(&db).await?;
    let second = new_result(1, "123-4").insert(&db).await?;
    assert_ne!(first.id, second.id);
    assert_ne!(first.external_id, second.external_id);

    let same_nif = lab_result::Entity::find()
        .filter(lab_result::Column::Nif.eq("123-4"))
        .order_by_asc(lab_result::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(same_nif.len(), 2);
    assert_eq!(same_nif[0].id, first.id);
    Ok(())
}

#[tokio::test]
async fn test_result_allows_dangling_lab_reference() -> Result<()> {
    let db = setup_test_db().await?;

    let orphan = new_result(9_999, "999-9").insert(&db).await?;
    let found = lab_result::Entity::find_by_id(orphan.id).one(&db).await?;
    assert_eq!(found.map(|r| r.lab_id), Some(9_999));
    Ok(())
}

#[test]
fn test_result_serializes_camel_case() {
    let model = lab_result::Model {
        id: 7,
        external_id: "01HV4Z2WQXKJNM8GPQY6VBKC3D".into(),
        lab_id: 2,
        nif: "123-4".into(),
        patient_name: "A B".into(),
        date: 1_700_000_000_000,
        data: "ok".into(),
        status: "pending".into(),
    };
    let json = serde_json::to_value(&model).unwrap();
    assert_eq!(json["externalId"], "01HV4Z2WQXKJNM8GPQY6VBKC3D");
    assert_eq!(json["labId"], 2);
    assert_eq!(json["patientName"], "A B");
    assert_eq!(json["date"], 1_700_000_000_000i64);
}

#[test]
fn test_created_at_decodes_ulid_timestamp() {
    let ulid = Ulid::from_parts(1_700_000_000_000, 42);
    let model = lab::Model {
        id: 1,
        external_id: ulid.to_string(),
        key_name: "LAB-T".into(),
        name: "Time Lab".into(),
        description: None,
    };
    assert_eq!(model.created_at().map(|t| t.timestamp_millis()), Some(1_700_000_000_000));

    let broken = lab::Model { external_id: "not-a-ulid".into(), ..model };
    assert!(broken.created_at().is_none());
}
