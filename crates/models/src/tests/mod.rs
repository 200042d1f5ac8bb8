


/// Integration tests combining multiple entities
pub mod integration_tests {
    use crate::db::connect;
    use crate::{group, membership, user};
    use anyhow::Result;
    use migration::MigratorTrait;
    use sea_orm::EntityTrait;
    use uuid::Uuid;

    /// Test complete workflow: user -> group -> membership -> cascade
    #[tokio::test]
    async fn test_complete_workflow() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }

        let db = connect().await?;
        migration::Migrator::up(&db, None).await?;

        // Create user
        let email = format!("workflow_{}@example.com", Uuid::new_v4());
        let test_user = user::create(&db, &email, "Workflow User").await?;

        // Create group
        let attrs = group::GroupAttrs {
            name: Some(format!("workflow_group_{}", Uuid::new_v4())),
            description: Some("created by workflow test".to_string()),
        };
        let test_group = group::create(&db, &attrs).await?;

        // Join them
        let row = membership::add(&db, test_group.id, test_user.id).await?;
        assert_eq!(row.group_id, test_group.id);
        assert_eq!(row.user_id, test_user.id);

        // Verify linkage in both directions
        assert!(membership::exists(&db, test_group.id, test_user.id).await?);
        let found_group = group::Entity::find_by_id(test_group.id).one(&db).await?;
        assert!(found_group.is_some());
        let found_user = user::Entity::find_by_id(test_user.id).one(&db).await?;
        assert!(found_user.is_some());

        // Deleting the group removes the join row via FK cascade
        group::Entity::delete_by_id(test_group.id).exec(&db).await?;
        assert!(!membership::exists(&db, test_group.id, test_user.id).await?);

        // The user survives the group deletion
        let user_after = user::Entity::find_by_id(test_user.id).one(&db).await?;
        assert!(user_after.is_some());

        // Cleanup
        user::Entity::delete_by_id(test_user.id).exec(&db).await?;

        println!("Complete workflow test passed successfully");
        Ok(())
    }

    /// Test cascade when a user is deleted: their membership rows go too,
    /// but the groups themselves remain.
    #[tokio::test]
    async fn test_user_delete_cascade() -> Result<()> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }

        let db = connect().await?;
        migration::Migrator::up(&db, None).await?;

        let email = format!("cascade_{}@example.com", Uuid::new_v4());
        let test_user = user::create(&db, &email, "Cascade User").await?;

        let mut group_ids = vec![];
        for i in 0..3 {
            let attrs = group::GroupAttrs::named(&format!("cascade_group_{}_{}", i, Uuid::new_v4()));
            let g = group::create(&db, &attrs).await?;
            membership::add(&db, g.id, test_user.id).await?;
            group_ids.push(g.id);
        }

        user::Entity::delete_by_id(test_user.id).exec(&db).await?;

        for &group_id in &group_ids {
            assert!(!membership::exists(&db, group_id, test_user.id).await?);
            let g = group::Entity::find_by_id(group_id).one(&db).await?;
            assert!(g.is_some());
        }

        // Cleanup
        for group_id in group_ids {
            group::Entity::delete_by_id(group_id).exec(&db).await?;
        }

        println!("User delete cascade test passed successfully");
        Ok(())
    }
}
