//! Database repository for site content, media collections and citizen submissions.
//!
//! Site content and the media collections live in the key-value store; submissions
//! and admin sessions live in their own tables.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::kv::{new_record_id, KvStore, SITE_CONTENT_KEY};
use crate::errors::AppError;
use crate::models::{
    AdminSession, Article, Idea, NewArticle, NewIdea, NewNewsItem, NewTicket, NewVideo,
    NewVolunteer, NewsItem, SiteContent, Ticket, Video, Volunteer, TICKET_STATUS_PENDING,
};
use crate::ordering::{parse_display_date, parse_timestamp, sort_newest_first};

pub const NEWS_PREFIX: &str = "news-";
pub const VIDEO_PREFIX: &str = "video-";
pub const ARTICLE_PREFIX: &str = "article-";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
    kv: KvStore,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            kv: KvStore::new(pool.clone()),
            pool,
        }
    }

    // ==================== SITE CONTENT ====================

    /// Get the stored site content, or the built-in copy if nothing was saved yet.
    pub async fn get_site_content(&self) -> Result<SiteContent, AppError> {
        Ok(self
            .kv
            .get(SITE_CONTENT_KEY)
            .await?
            .unwrap_or_else(SiteContent::default_content))
    }

    /// Replace the site content wholesale. Fields missing from `content` are dropped.
    pub async fn set_site_content(&self, content: &SiteContent) -> Result<(), AppError> {
        self.kv.set(SITE_CONTENT_KEY, content).await
    }

    // ==================== NEWS OPERATIONS ====================

    /// List all news, newest display date first.
    pub async fn list_news(&self) -> Result<Vec<NewsItem>, AppError> {
        let mut news: Vec<NewsItem> = self.kv.get_by_prefix(NEWS_PREFIX).await?;
        sort_newest_first(&mut news, |n| parse_display_date(&n.date));
        Ok(news)
    }

    pub async fn create_news(&self, request: &NewNewsItem) -> Result<NewsItem, AppError> {
        let item = NewsItem {
            id: new_record_id(NEWS_PREFIX),
            title: request.title.clone(),
            date: request.date.clone(),
            category: request.category.clone(),
            excerpt: request.excerpt.clone(),
            created_at: timestamp(Utc::now()),
        };
        self.kv.set(&item.id, &item).await?;
        Ok(item)
    }

    /// Delete a news item. Unknown ids are not an error.
    pub async fn delete_news(&self, id: &str) -> Result<(), AppError> {
        self.kv.del(id).await
    }

    // ==================== VIDEO OPERATIONS ====================

    /// List all videos, most recently added first.
    pub async fn list_videos(&self) -> Result<Vec<Video>, AppError> {
        let mut videos: Vec<Video> = self.kv.get_by_prefix(VIDEO_PREFIX).await?;
        sort_newest_first(&mut videos, |v| parse_timestamp(&v.created_at));
        Ok(videos)
    }

    pub async fn create_video(&self, request: &NewVideo) -> Result<Video, AppError> {
        let video = Video {
            id: new_record_id(VIDEO_PREFIX),
            title: request.title.clone(),
            url: request.url.clone(),
            duration: request.duration.clone(),
            created_at: timestamp(Utc::now()),
        };
        self.kv.set(&video.id, &video).await?;
        Ok(video)
    }

    pub async fn delete_video(&self, id: &str) -> Result<(), AppError> {
        self.kv.del(id).await
    }

    // ==================== ARTICLE OPERATIONS ====================

    /// List all articles, newest display date first.
    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        let mut articles: Vec<Article> = self.kv.get_by_prefix(ARTICLE_PREFIX).await?;
        sort_newest_first(&mut articles, |a| parse_display_date(&a.date));
        Ok(articles)
    }

    pub async fn create_article(&self, request: &NewArticle) -> Result<Article, AppError> {
        let article = Article {
            id: new_record_id(ARTICLE_PREFIX),
            title: request.title.clone(),
            date: request.date.clone(),
            content: request.content.clone(),
            created_at: timestamp(Utc::now()),
        };
        self.kv.set(&article.id, &article).await?;
        Ok(article)
    }

    pub async fn delete_article(&self, id: &str) -> Result<(), AppError> {
        self.kv.del(id).await
    }

    // ==================== VOLUNTEER OPERATIONS ====================

    /// List all volunteers, newest signup first.
    pub async fn list_volunteers(&self) -> Result<Vec<Volunteer>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, phone, district, area, created_at FROM volunteers ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(volunteer_from_row).collect())
    }

    pub async fn create_volunteer(&self, request: &NewVolunteer) -> Result<Volunteer, AppError> {
        let now = timestamp(Utc::now());

        let result = sqlx::query(
            "INSERT INTO volunteers (name, phone, district, area, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.phone)
        .bind(&request.district)
        .bind(&request.area)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Volunteer {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            phone: request.phone.clone(),
            district: request.district.clone(),
            area: request.area.clone(),
            created_at: now,
        })
    }

    // ==================== TICKET OPERATIONS ====================

    /// List all complaint tickets, newest first.
    pub async fn list_tickets(&self) -> Result<Vec<Ticket>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, district, problem_type, details, ticket_number, status, created_at FROM tickets ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(ticket_from_row).collect())
    }

    /// File a ticket. It gets a citizen-facing number and the pending status.
    pub async fn create_ticket(&self, request: &NewTicket) -> Result<Ticket, AppError> {
        let now = Utc::now();
        let ticket_number = ticket_number_for(now.timestamp_millis());
        let created_at = timestamp(now);

        let result = sqlx::query(
            "INSERT INTO tickets (name, district, problem_type, details, ticket_number, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.district)
        .bind(&request.problem_type)
        .bind(&request.details)
        .bind(&ticket_number)
        .bind(TICKET_STATUS_PENDING)
        .bind(&created_at)
        .execute(&self.pool)
        .await?;

        Ok(Ticket {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            district: request.district.clone(),
            problem_type: request.problem_type.clone(),
            details: request.details.clone(),
            ticket_number,
            status: TICKET_STATUS_PENDING.to_string(),
            created_at,
        })
    }

    // ==================== IDEA OPERATIONS ====================

    /// List all submitted ideas, newest first.
    pub async fn list_ideas(&self) -> Result<Vec<Idea>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, idea, implementation, created_at FROM ideas ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(idea_from_row).collect())
    }

    pub async fn create_idea(&self, request: &NewIdea) -> Result<Idea, AppError> {
        let now = timestamp(Utc::now());

        let result = sqlx::query(
            "INSERT INTO ideas (name, idea, implementation, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&request.name)
        .bind(&request.idea)
        .bind(&request.implementation)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Idea {
            id: result.last_insert_rowid(),
            name: request.name.clone(),
            idea: request.idea.clone(),
            implementation: request.implementation.clone(),
            created_at: now,
        })
    }

    // ==================== ADMIN SESSIONS ====================

    /// Issue a new admin session valid for `ttl`.
    pub async fn create_session(&self, ttl: Duration) -> Result<AdminSession, AppError> {
        let token = format!(
            "{}{}",
            uuid::Uuid::new_v4().simple(),
            uuid::Uuid::new_v4().simple()
        );
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .map(timestamp)
            .ok_or_else(|| AppError::Internal("Session lifetime out of range".to_string()))?;

        sqlx::query("INSERT INTO admin_sessions (token, created_at, expires_at) VALUES (?, ?, ?)")
            .bind(&token)
            .bind(timestamp(now))
            .bind(&expires_at)
            .execute(&self.pool)
            .await?;

        Ok(AdminSession { token, expires_at })
    }

    /// Whether `token` names a session that has not expired.
    pub async fn session_valid(&self, token: &str) -> Result<bool, AppError> {
        let row = sqlx::query("SELECT expires_at FROM admin_sessions WHERE token = ?")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row
            .and_then(|r| parse_timestamp(&r.get::<String, _>("expires_at")))
            .is_some_and(|expires_at| expires_at > Utc::now()))
    }

    /// Revoke a session. Unknown tokens are ignored.
    pub async fn delete_session(&self, token: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Drop expired sessions, returning how many were removed.
    pub async fn purge_expired_sessions(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM admin_sessions WHERE expires_at <= ?")
            .bind(timestamp(Utc::now()))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Fixed-width UTC timestamp, so stored values also sort correctly as text.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// `TICKET-` plus the last six digits of the millisecond clock.
fn ticket_number_for(millis: i64) -> String {
    format!("TICKET-{:06}", millis.rem_euclid(1_000_000))
}

// ==================== ROW MAPPING HELPERS ====================

fn volunteer_from_row(row: &SqliteRow) -> Volunteer {
    Volunteer {
        id: row.get("id"),
        name: row.get("name"),
        phone: row.get("phone"),
        district: row.get("district"),
        area: row.get("area"),
        created_at: row.get("created_at"),
    }
}

fn ticket_from_row(row: &SqliteRow) -> Ticket {
    Ticket {
        id: row.get("id"),
        name: row.get("name"),
        district: row.get("district"),
        problem_type: row.get("problem_type"),
        details: row.get("details"),
        ticket_number: row.get("ticket_number"),
        status: row.get("status"),
        created_at: row.get("created_at"),
    }
}

fn idea_from_row(row: &SqliteRow) -> Idea {
    Idea {
        id: row.get("id"),
        name: row.get("name"),
        idea: row.get("idea"),
        implementation: row.get("implementation"),
        created_at: row.get("created_at"),
    }
}
