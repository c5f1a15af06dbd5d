use chrono::{DateTime, Utc};

use crate::{
    model::blog::{BlogPostDto, BlogPostInputDto},
    server::util::markdown::render_markdown,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    /// Markdown source.
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
    /// Set the first time the post is published and kept afterwards.
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn from_params(id: i32, params: BlogPostParams, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: params.title,
            slug: params.slug,
            excerpt: params.excerpt,
            content: params.content,
            author: params.author,
            category: params.category,
            tags: params.tags,
            image_url: params.image_url,
            published: params.published,
            published_at: params.published.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the editable fields, keeping id, creation time and first publication time.
    pub fn apply(&mut self, params: BlogPostParams, now: DateTime<Utc>) {
        if params.published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.title = params.title;
        self.slug = params.slug;
        self.excerpt = params.excerpt;
        self.content = params.content;
        self.author = params.author;
        self.category = params.category;
        self.tags = params.tags;
        self.image_url = params.image_url;
        self.published = params.published;
        self.updated_at = now;
    }

    pub fn into_dto(self) -> BlogPostDto {
        let content_html = render_markdown(&self.content);
        BlogPostDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            content_html,
            author: self.author,
            category: self.category,
            tags: self.tags,
            image_url: self.image_url,
            published: self.published,
            published_at: self.published_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlogPostParams {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub author: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
}

impl BlogPostParams {
    pub fn from_dto(dto: BlogPostInputDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            slug: dto.slug.unwrap_or_default().trim().to_string(),
            excerpt: dto.excerpt,
            content: dto.content,
            author: dto.author.trim().to_string(),
            category: dto.category,
            tags: dto.tags,
            image_url: dto.image_url,
            published: dto.published,
        }
    }
}
