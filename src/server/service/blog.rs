use chrono::Utc;

use crate::server::{
    data::{blog::BlogPostRepository, mem::MemStorage},
    error::AppError,
    model::blog::{BlogPost, BlogPostParams},
    util::slug::slugify,
};

pub struct BlogService<'a> {
    store: &'a MemStorage,
}

impl<'a> BlogService<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets posts newest first
    ///
    /// # Arguments
    /// - `include_drafts` - Whether unpublished posts are included (admin listing)
    pub async fn list(&self, include_drafts: bool) -> Vec<BlogPost> {
        let mut posts = BlogPostRepository::new(self.store)
            .list(include_drafts)
            .await;
        posts.sort_by(|a, b| {
            let a_date = a.published_at.unwrap_or(a.created_at);
            let b_date = b.published_at.unwrap_or(b.created_at);
            b_date.cmp(&a_date).then(b.id.cmp(&a.id))
        });
        posts
    }

    /// Gets a post by slug. Drafts are only visible when `include_drafts` is set.
    pub async fn get_by_slug(&self, slug: &str, include_drafts: bool) -> Result<BlogPost, AppError> {
        BlogPostRepository::new(self.store)
            .find_by_slug(slug)
            .await
            .filter(|post| include_drafts || post.published)
            .ok_or_else(|| AppError::NotFound(format!("Blog post '{}' not found", slug)))
    }

    pub async fn create(&self, params: BlogPostParams) -> Result<BlogPost, AppError> {
        let params = validate(params)?;
        BlogPostRepository::new(self.store)
            .create(params, Utc::now())
            .await
    }

    pub async fn update(&self, id: i32, params: BlogPostParams) -> Result<BlogPost, AppError> {
        let params = validate(params)?;
        BlogPostRepository::new(self.store)
            .update(id, params, Utc::now())
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BlogPostRepository::new(self.store).delete(id).await {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Blog post with id {} not found", id))
}

fn validate(mut params: BlogPostParams) -> Result<BlogPostParams, AppError> {
    if params.title.is_empty() {
        return Err(AppError::BadRequest("Blog post title is required".to_string()));
    }
    if params.author.is_empty() {
        return Err(AppError::BadRequest("Blog post author is required".to_string()));
    }

    params.slug = if params.slug.is_empty() {
        slugify(&params.title)
    } else {
        slugify(&params.slug)
    };
    if params.slug.is_empty() {
        return Err(AppError::BadRequest(
            "Blog post title must contain letters or digits".to_string(),
        ));
    }

    Ok(params)
}
