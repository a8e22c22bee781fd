mod toggle_favorite_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use loldex::{
        model::champion::{FavoriteStatusDto, FavoriteUnauthenticatedDto},
        server::{controller::favorite::toggle_favorite, model::session::user::SessionUserId},
    };
    use loldex_test_utils::prelude::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    /// Expect toggling twice to favorite and then unfavorite the champion
    async fn test_toggle_favorite_round_trip() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let champion = test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = toggle_favorite(
            State(test.state()),
            test.session.clone(),
            Path(champion.id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: FavoriteStatusDto = serde_json::from_slice(&body)?;
        assert!(status.is_favorited);
        assert!(status.is_authenticated);

        let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
        assert_eq!(favorites.len(), 1);

        let result = toggle_favorite(
            State(test.state()),
            test.session.clone(),
            Path(champion.id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: FavoriteStatusDto = serde_json::from_slice(&body)?;
        assert!(!status.is_favorited);

        let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
        assert!(favorites.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 with an unauthenticated body and no row for anonymous toggles
    async fn test_toggle_favorite_anonymous() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let champion = test.champions().insert_mock_champion("Aatrox").await?;

        let result = toggle_favorite(
            State(test.state()),
            test.session.clone(),
            Path(champion.id),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let status: FavoriteUnauthenticatedDto = serde_json::from_slice(&body)?;
        assert_eq!(status.message, "User not authenticated");
        assert!(!status.is_authenticated);

        let favorites = entity::prelude::Favorite::find().all(&test.db).await?;
        assert!(favorites.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a champion ID not in the catalog
    async fn test_toggle_favorite_unknown_champion() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = toggle_favorite(State(test.state()), test.session.clone(), Path(404)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_toggle_favorite_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = toggle_favorite(State(test.state()), test.session.clone(), Path(1)).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod get_favorites_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use loldex::{
        model::user::FavoriteDto,
        server::{controller::favorite::get_favorites, model::session::user::SessionUserId},
    };
    use loldex_test_utils::prelude::*;

    #[tokio::test]
    /// Expect the session user's favorites joined with their champions
    async fn test_get_favorites_success() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let aatrox = test.champions().insert_mock_champion("Aatrox").await?;
        let zed = test.champions().insert_mock_champion("Zed").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        let rival = test.users().insert_mock_user("Rammus").await?;
        test.users().insert_mock_favorite(user.id, aatrox.id).await?;
        test.users().insert_mock_favorite(user.id, zed.id).await?;
        test.users().insert_mock_favorite(rival.id, zed.id).await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = get_favorites(State(test.state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let favorites: Vec<FavoriteDto> = serde_json::from_slice(&body)?;

        let names: Vec<&str> = favorites
            .iter()
            .map(|favorite| favorite.champion.name.as_str())
            .collect();
        assert_eq!(names, vec!["Aatrox", "Zed"]);

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 for an anonymous session
    async fn test_get_favorites_anonymous() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;

        let result = get_favorites(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_get_favorites_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = get_favorites(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
