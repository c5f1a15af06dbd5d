use chrono::{DateTime, Utc};

use crate::server::{
    data::mem::{MemStorage, Tables},
    error::AppError,
    model::blog::{BlogPost, BlogPostParams},
};

pub struct BlogPostRepository<'a> {
    store: &'a MemStorage,
}

impl<'a> BlogPostRepository<'a> {
    pub fn new(store: &'a MemStorage) -> Self {
        Self { store }
    }

    /// Gets posts ordered by id, skipping drafts unless `include_drafts` is set
    pub async fn list(&self, include_drafts: bool) -> Vec<BlogPost> {
        self.store
            .read()
            .await
            .blog_posts
            .values()
            .filter(|post| include_drafts || post.published)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i32) -> Option<BlogPost> {
        self.store.read().await.blog_posts.get(id)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.store
            .read()
            .await
            .blog_posts
            .values()
            .find(|post| post.slug == slug)
            .cloned()
    }

    /// Creates a post, stamping creation and publication times with `now`
    ///
    /// # Returns
    /// - `Ok(BlogPost)` - The stored post
    /// - `Err(AppError::Conflict)` - Another post already uses the slug
    pub async fn create(
        &self,
        params: BlogPostParams,
        now: DateTime<Utc>,
    ) -> Result<BlogPost, AppError> {
        let mut tables = self.store.write().await;
        ensure_slug_free(&tables, &params.slug, None)?;

        Ok(tables
            .blog_posts
            .insert_with(|id| BlogPost::from_params(id, params, now)))
    }

    /// Returns `Ok(None)` when the post doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: BlogPostParams,
        now: DateTime<Utc>,
    ) -> Result<Option<BlogPost>, AppError> {
        let mut tables = self.store.write().await;
        if tables.blog_posts.get(id).is_none() {
            return Ok(None);
        }
        ensure_slug_free(&tables, &params.slug, Some(id))?;

        let Some(post) = tables.blog_posts.get_mut(id) else {
            return Ok(None);
        };
        post.apply(params, now);

        Ok(Some(post.clone()))
    }

    pub async fn delete(&self, id: i32) -> bool {
        self.store.write().await.blog_posts.remove(id)
    }
}

fn ensure_slug_free(tables: &Tables, slug: &str, except: Option<i32>) -> Result<(), AppError> {
    let taken = tables
        .blog_posts
        .values()
        .any(|post| post.slug == slug && Some(post.id) != except);

    if taken {
        return Err(AppError::Conflict(format!(
            "A blog post with slug '{}' already exists",
            slug
        )));
    }

    Ok(())
}
