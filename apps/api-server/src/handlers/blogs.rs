//! Blog post handlers. Every route requires a bearer token.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostFilter, PostPatch};
use quill_shared::dto::{
    CreatePostRequest, DeletePostResponse, ListPostsQuery, PostResponse, UpdatePostRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        category: post.category,
        author: post.author,
        content: post.content,
        image: post.image,
        user_id: post.owner_id,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /blogs?category=&author=
pub async fn list_blogs(
    state: web::Data<AppState>,
    Identity(caller): Identity,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let ListPostsQuery { category, author } = query.into_inner();
    let filter = PostFilter::new(category, author);

    let posts = state.blogs.list(&filter, &caller).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    Identity(caller): Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new = NewPost {
        title: req.title,
        category: req.category,
        content: req.content,
        image: req.image,
    };

    let post = state.blogs.create(new, &caller).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// PUT /blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    Identity(caller): Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let patch = PostPatch {
        title: req.title,
        category: req.category,
        author: req.author,
        content: req.content,
        image: req.image,
    };

    let post = state
        .blogs
        .update(path.into_inner(), patch, &caller)
        .await?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// DELETE /blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    Identity(caller): Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = state.blogs.delete(path.into_inner(), &caller).await?;

    Ok(HttpResponse::Ok().json(DeletePostResponse::removed(id)))
}
