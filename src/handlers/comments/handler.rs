//! Comment handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::{
    constants::{DEFAULT_COMMENTS_PER_PAGE, MAX_PER_PAGE},
    error::AppResult,
    handlers::ApiResponse,
    middleware::auth::AuthenticatedUser,
    models::{Comment, CommentWithCounts},
    services::{CommentService, MatchService, comment_service::ReactionOutcome},
    state::AppState,
};

use super::{
    request::{CreateCommentRequest, ListCommentsQuery, ReactionRequest, UpdateCommentRequest},
    response::CommentsListResponse,
};

/// Paginated top-level comments for a match, newest first
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ListCommentsQuery>,
) -> AppResult<Json<ApiResponse<CommentsListResponse>>> {
    MatchService::ensure_exists(state.db(), id).await?;

    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_COMMENTS_PER_PAGE)
        .min(MAX_PER_PAGE);

    let (comments, total) = CommentService::list_for_match(state.db(), id, page, per_page).await?;

    Ok(ApiResponse::data(CommentsListResponse {
        comments,
        total,
        page,
        per_page,
    }))
}

/// Post a comment or a reply on a match
pub async fn create_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(payload): Json<CreateCommentRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Comment>>)> {
    payload.validate()?;
    MatchService::ensure_exists(state.db(), id).await?;

    let comment = CommentService::create(
        state.db(),
        id,
        auth_user.id,
        payload.parent_comment_id,
        &payload.comment_text,
    )
    .await?;

    Ok(ApiResponse::created("Comment added successfully", comment))
}

/// Replies to a top-level comment, oldest first
pub async fn list_replies(
    State(state): State<AppState>,
    Path((_id, comment_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<Vec<CommentWithCounts>>>> {
    let replies = CommentService::list_replies(state.db(), comment_id).await?;
    Ok(ApiResponse::data(replies))
}

/// Edit a comment (author or admin)
pub async fn update_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((_id, comment_id)): Path<(i64, i64)>,
    Json(payload): Json<UpdateCommentRequest>,
) -> AppResult<Json<ApiResponse<Comment>>> {
    payload.validate()?;

    let comment = CommentService::update(
        state.db(),
        comment_id,
        auth_user.id,
        auth_user.is_admin(),
        &payload.comment_text,
    )
    .await?;

    Ok(ApiResponse::with_message("Comment updated successfully", comment))
}

/// Delete a comment with its replies and reactions (author or admin)
pub async fn delete_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((_id, comment_id)): Path<(i64, i64)>,
) -> AppResult<Json<ApiResponse<()>>> {
    CommentService::delete(state.db(), comment_id, auth_user.id, auth_user.is_admin()).await?;
    Ok(ApiResponse::message("Comment deleted successfully"))
}

/// Toggle a like/dislike reaction on a comment
pub async fn react_to_comment(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path((_id, comment_id)): Path<(i64, i64)>,
    Json(payload): Json<ReactionRequest>,
) -> AppResult<Json<ApiResponse<ReactionOutcome>>> {
    let outcome = CommentService::react(
        state.db(),
        comment_id,
        auth_user.id,
        &payload.reaction_type,
    )
    .await?;

    let message = format!("Reaction {}", outcome.action);
    Ok(ApiResponse::with_message(message, outcome))
}
