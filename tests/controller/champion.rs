mod get_champions_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use loldex::{model::champion::ChampionSummaryDto, server::controller::champion::get_champions};
    use loldex_test_utils::prelude::*;

    #[tokio::test]
    /// Expect 200 with every champion ordered by name
    async fn test_get_champions_success() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Zed").await?;
        test.champions().insert_mock_champion("Aatrox").await?;

        let result = get_champions(State(test.state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let champions: Vec<ChampionSummaryDto> = serde_json::from_slice(&body)?;

        let names: Vec<&str> = champions
            .iter()
            .map(|champion| champion.name.as_str())
            .collect();
        assert_eq!(names, vec!["Aatrox", "Zed"]);

        Ok(())
    }

    #[tokio::test]
    /// Expect 200 with an empty list before any ingestion
    async fn test_get_champions_empty() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;

        let result = get_champions(State(test.state())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let champions: Vec<ChampionSummaryDto> = serde_json::from_slice(&body)?;
        assert!(champions.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_get_champions_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_champions(State(test.state())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod get_champion_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use loldex::{
        model::champion::ChampionDetailDto,
        server::{controller::champion::get_champion, model::session::user::SessionUserId},
    };
    use loldex_test_utils::prelude::*;

    #[tokio::test]
    /// Expect 200 with scaled difficulty and no favorite for an anonymous viewer
    async fn test_get_champion_anonymous() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;

        let result = get_champion(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let champion: ChampionDetailDto = serde_json::from_slice(&body)?;

        assert_eq!(champion.name, "Aatrox");
        assert_eq!(champion.difficulty, 5);
        assert_eq!(champion.difficulty_percentage, 50);
        assert!(!champion.is_favorited);
        assert!(champion.comments.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect the viewer's favorite and the comment thread to be reflected
    async fn test_get_champion_favorited_with_comments() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let champion = test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        test.users()
            .insert_mock_favorite(user.id, champion.id)
            .await?;
        test.users()
            .insert_mock_comment(user.id, champion.id, "Free demo, no purchase necessary.")
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = get_champion(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let champion: ChampionDetailDto = serde_json::from_slice(&body)?;

        assert!(champion.is_favorited);
        assert_eq!(champion.comments.len(), 1);
        assert_eq!(champion.comments[0].username, "Teemo");
        assert_eq!(
            champion.comments[0].content,
            "Free demo, no purchase necessary."
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 for a champion name not in the catalog
    async fn test_get_champion_not_found() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;

        let result = get_champion(
            State(test.state()),
            test.session.clone(),
            Path("Nobody".to_string()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_get_champion_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_champion(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod search_champions_tests {
    use axum::{
        extract::{Query, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use loldex::server::controller::champion::{search_champions, SearchParams};
    use loldex_test_utils::prelude::*;

    #[tokio::test]
    /// Expect case-insensitive substring matches ordered by name
    async fn test_search_champions_matches() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Annie").await?;
        test.champions().insert_mock_champion("Zed").await?;
        test.champions().insert_mock_champion("Anivia").await?;

        let result = search_champions(
            State(test.state()),
            Query(SearchParams {
                q: Some("AN".to_string()),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let names: Vec<String> = serde_json::from_slice(&body)?;
        assert_eq!(names, vec!["Anivia", "Annie"]);

        Ok(())
    }

    #[tokio::test]
    /// Expect an empty list, not an error, when nothing matches
    async fn test_search_champions_no_matches() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Zed").await?;

        let result = search_champions(
            State(test.state()),
            Query(SearchParams {
                q: Some("teemo".to_string()),
            }),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let names: Vec<String> = serde_json::from_slice(&body)?;
        assert!(names.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect an empty list for a missing query without touching the database
    async fn test_search_champions_missing_query() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = search_champions(State(test.state()), Query(SearchParams { q: None })).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_search_champions_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = search_champions(
            State(test.state()),
            Query(SearchParams {
                q: Some("an".to_string()),
            }),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}

mod get_champions_by_tag_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };
    use loldex::{
        model::champion::ChampionSummaryDto, server::controller::champion::get_champions_by_tag,
    };
    use loldex_test_utils::prelude::*;

    #[tokio::test]
    /// Expect only champions carrying the tag
    async fn test_get_champions_by_tag_success() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions()
            .insert_mock_champion_with("Aatrox", &["Fighter", "Tank"], 4)
            .await?;
        test.champions()
            .insert_mock_champion_with("Zed", &["Assassin"], 7)
            .await?;

        let result =
            get_champions_by_tag(State(test.state()), Path("Assassin".to_string())).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let champions: Vec<ChampionSummaryDto> = serde_json::from_slice(&body)?;

        assert_eq!(champions.len(), 1);
        assert_eq!(champions[0].name, "Zed");

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when no champion carries the tag
    async fn test_get_champions_by_tag_not_found() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;

        let result = get_champions_by_tag(State(test.state()), Path("Mage".to_string())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_get_champions_by_tag_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;

        let result = get_champions_by_tag(State(test.state()), Path("Mage".to_string())).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
