use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ModelError, ValidationErrors};
use crate::membership;

pub const NAME_MAX_LEN: usize = 128;
pub const DESCRIPTION_MAX_LEN: usize = 512;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Membership,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Membership => Entity::has_many(membership::Entity).into(),
        }
    }
}

impl Related<membership::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Membership.def()
    }
}

impl Related<crate::user::Entity> for Entity {
    fn to() -> RelationDef {
        membership::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(membership::Relation::Group.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Candidate attribute set for create/update. Absent fields fall back to the
/// existing row on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupAttrs {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl GroupAttrs {
    pub fn named(name: &str) -> Self {
        Self { name: Some(name.to_string()), description: None }
    }
}

/// Resolve candidate attrs against the schema and (on update) the existing
/// row. Returns the values to persist, or every field error found.
pub fn validate(
    attrs: &GroupAttrs,
    existing: Option<&Model>,
) -> Result<(String, Option<String>), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = match (&attrs.name, existing) {
        (Some(name), _) => name.clone(),
        (None, Some(current)) => current.name.clone(),
        (None, None) => String::new(),
    };
    if name.trim().is_empty() {
        errors.add("name", "can't be blank");
    } else if name.chars().count() > NAME_MAX_LEN {
        errors.add(
            "name",
            format!("is too long (maximum is {} characters)", NAME_MAX_LEN),
        );
    }

    let description = attrs
        .description
        .clone()
        .or_else(|| existing.and_then(|m| m.description.clone()));
    if let Some(ref description) = description {
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            errors.add(
                "description",
                format!("is too long (maximum is {} characters)", DESCRIPTION_MAX_LEN),
            );
        }
    }

    if errors.is_empty() {
        Ok((name, description))
    } else {
        Err(errors)
    }
}

pub async fn create<C: ConnectionTrait>(conn: &C, attrs: &GroupAttrs) -> Result<Model, ModelError> {
    let (name, description) = validate(attrs, None).map_err(ModelError::Validation)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name),
        description: Set(description),
        created_at: Set(now),
        updated_at: Set(now),
    };
    am.insert(conn).await.map_err(|e| ModelError::Db(e.to_string()))
}
