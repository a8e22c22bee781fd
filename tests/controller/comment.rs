mod create_comment_tests {
    use axum::{
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
        Json,
    };
    use loldex::{
        model::champion::ChampionCommentDto,
        server::{
            controller::comment::create_comment, form::comment::CommentForm,
            model::session::user::SessionUserId,
        },
    };
    use loldex_test_utils::prelude::*;
    use sea_orm::EntityTrait;

    fn comment_form(content: &str) -> CommentForm {
        CommentForm {
            content: content.to_string(),
        }
    }

    #[tokio::test]
    /// Expect 201 with the stored comment attributed to the session user
    async fn test_create_comment_success() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_comment(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
            Json(comment_form("Size doesn't mean everything.")),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let comment: ChampionCommentDto = serde_json::from_slice(&body)?;
        assert_eq!(comment.username, "Teemo");
        assert_eq!(comment.content, "Size doesn't mean everything.");

        let comments = entity::prelude::Comment::find().all(&test.db).await?;
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].user_id, user.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect a 500 character comment to be accepted
    async fn test_create_comment_max_length() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_comment(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
            Json(comment_form(&"a".repeat(500))),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 422 and no row for content over 500 characters
    async fn test_create_comment_too_long() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_comment(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
            Json(comment_form(&"a".repeat(501))),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let comments = entity::prelude::Comment::find().all(&test.db).await?;
        assert!(comments.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 422 and no row for empty content
    async fn test_create_comment_empty() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_comment(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
            Json(comment_form("")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let comments = entity::prelude::Comment::find().all(&test.db).await?;
        assert!(comments.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 and no row for an anonymous comment
    async fn test_create_comment_anonymous() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        test.champions().insert_mock_champion("Aatrox").await?;

        let result = create_comment(
            State(test.state()),
            test.session.clone(),
            Path("Aatrox".to_string()),
            Json(comment_form("Hello.")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let comments = entity::prelude::Comment::find().all(&test.db).await?;
        assert!(comments.is_empty());

        Ok(())
    }

    #[tokio::test]
    /// Expect 404 when commenting on a champion that does not exist
    async fn test_create_comment_unknown_champion() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let user = test.users().insert_mock_user("Teemo").await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = create_comment(
            State(test.state()),
            test.session.clone(),
            Path("Nobody".to_string()),
            Json(comment_form("Hello.")),
        )
        .await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}

mod get_comments_tests {
    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use loldex::{
        model::user::UserCommentDto,
        server::{controller::comment::get_comments, model::session::user::SessionUserId},
    };
    use loldex_test_utils::prelude::*;

    #[tokio::test]
    /// Expect only the session user's comments, each carrying its champion
    async fn test_get_comments_success() -> Result<(), TestError> {
        let mut test = test_setup_with_all_tables!()?;
        let champion = test.champions().insert_mock_champion("Aatrox").await?;
        let user = test.users().insert_mock_user("Teemo").await?;
        let rival = test.users().insert_mock_user("Rammus").await?;
        test.users()
            .insert_mock_comment(user.id, champion.id, "First.")
            .await?;
        test.users()
            .insert_mock_comment(rival.id, champion.id, "Ok.")
            .await?;
        SessionUserId::insert(&test.session, user.id).await.unwrap();

        let result = get_comments(State(test.state()), test.session.clone()).await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let comments: Vec<UserCommentDto> = serde_json::from_slice(&body)?;

        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "First.");
        assert_eq!(comments[0].champion_name, "Aatrox");

        Ok(())
    }

    #[tokio::test]
    /// Expect 401 for an anonymous session
    async fn test_get_comments_anonymous() -> Result<(), TestError> {
        let test = test_setup_with_all_tables!()?;

        let result = get_comments(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        Ok(())
    }

    #[tokio::test]
    /// Expect 500 internal server error when required database tables dont exist
    async fn test_get_comments_error_without_tables() -> Result<(), TestError> {
        let test = test_setup_with_tables!()?;
        SessionUserId::insert(&test.session, 1).await.unwrap();

        let result = get_comments(State(test.state()), test.session.clone()).await;

        assert!(result.is_err());
        let resp = result.err().unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
