use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, Set,
    TransactionTrait,
};
use serde::Serialize;
use uuid::Uuid;

use models::{group, membership, user};

use crate::{errors::ServiceError, pagination::Pagination};

/// A user together with every group it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithGroups {
    pub user: user::Model,
    pub groups: Vec<group::Model>,
}

/// List the groups a user belongs to, via the membership join.
pub async fn list_groups(
    db: &DatabaseConnection,
    user: &user::Model,
) -> Result<Vec<group::Model>, ServiceError> {
    let groups = user
        .find_related(group::Entity)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(groups)
}

/// List a user's groups with pagination.
pub async fn list_groups_paginated(
    db: &DatabaseConnection,
    user: &user::Model,
    opts: Pagination,
) -> Result<Vec<group::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    let groups = user
        .find_related(group::Entity)
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(groups)
}

/// Get a group by id. A missing row is a hard failure, never an empty result.
pub async fn get_group(db: &DatabaseConnection, id: Uuid) -> Result<group::Model, ServiceError> {
    group::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("group"))
}

/// Create a group and enroll the requesting user as its first member.
///
/// Both writes happen in one transaction: the group and the creator's
/// membership become visible together, or neither does.
pub async fn create_group(
    db: &DatabaseConnection,
    attrs: &group::GroupAttrs,
    user: &user::Model,
) -> Result<group::Model, ServiceError> {
    // Reject bad attrs before anything touches the database.
    group::validate(attrs, None).map_err(ServiceError::Validation)?;

    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let created = group::create(&txn, attrs).await?;
    membership::add(&txn, created.id, user.id).await?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;

    tracing::debug!(group_id = %created.id, user_id = %user.id, "group created with initial member");
    Ok(created)
}

/// Update a group's attributes. The id never changes; invalid attrs leave the
/// persisted row untouched.
pub async fn update_group(
    db: &DatabaseConnection,
    current: &group::Model,
    attrs: &group::GroupAttrs,
) -> Result<group::Model, ServiceError> {
    let (name, description) = group::validate(attrs, Some(current)).map_err(ServiceError::Validation)?;
    let mut am: group::ActiveModel = current.clone().into();
    am.name = Set(name);
    am.description = Set(description);
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a group and return its final persisted state. Membership rows are
/// removed by the database-level FK cascade declared in the migration.
pub async fn delete_group(
    db: &DatabaseConnection,
    group: &group::Model,
) -> Result<group::Model, ServiceError> {
    let final_state = get_group(db, group.id).await?;
    group::Entity::delete_by_id(final_state.id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    tracing::debug!(group_id = %final_state.id, "group deleted");
    Ok(final_state)
}

/// Add a user to a group. Idempotent at the set level: an existing membership
/// is left as-is. Returns the user with its full membership set.
pub async fn add_member(
    db: &DatabaseConnection,
    group: &group::Model,
    user_id: Uuid,
) -> Result<UserWithGroups, ServiceError> {
    let user = user::Entity::find_by_id(user_id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("user"))?;

    if !membership::exists(db, group.id, user.id).await? {
        membership::add(db, group.id, user.id).await?;
    }

    let groups = list_groups(db, &user).await?;
    Ok(UserWithGroups { user, groups })
}
