use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{ModelError, ValidationErrors};
use crate::membership;

/// User identity is owned by an external subsystem; this entity carries just
/// enough to anchor the membership relation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
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

impl Related<crate::group::Entity> for Entity {
    fn to() -> RelationDef {
        membership::Relation::Group.def()
    }

    fn via() -> Option<RelationDef> {
        Some(membership::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(conn: &C, email: &str, name: &str) -> Result<Model, ModelError> {
    let mut errors = ValidationErrors::new();
    if !email.contains('@') {
        errors.add("email", "is invalid");
    }
    if name.trim().is_empty() {
        errors.add("name", "can't be blank");
    }
    if !errors.is_empty() {
        return Err(ModelError::Validation(errors));
    }
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        created_at: Set(Utc::now().into()),
    };
    am.insert(conn).await.map_err(|e| ModelError::Db(e.to_string()))
}
