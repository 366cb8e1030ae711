// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::Utc;
use newsdesk::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSummary,
    ArticleWriteRepository, SortColumn, SortOrder, VoteIncrement,
};
use newsdesk::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use newsdesk::domain::errors::{ARTICLE_NOT_FOUND, BAD_REQUEST, DomainError, DomainResult};
use newsdesk::domain::topic::{Topic, TopicRepository};
use newsdesk::domain::user::{User, UserRepository};
use std::cmp::Ordering;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

#[derive(Debug, Default)]
pub struct StoreData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    /// `comment_count` on stored articles is ignored and derived from `comments`.
    pub articles: Vec<Article>,
    pub comments: Vec<Comment>,
}

/// In-memory stand-in for the relational store. Implements every repository
/// trait and counts the calls the listing tests care about.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    data: Mutex<StoreData>,
    list_calls: AtomicUsize,
    topic_lookups: AtomicUsize,
}

impl InMemoryStore {
    pub fn new(data: StoreData) -> Self {
        Self {
            data: Mutex::new(data),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn topic_lookups(&self) -> usize {
        self.topic_lookups.load(AtomicOrdering::SeqCst)
    }

    pub fn comment_count(&self) -> usize {
        self.data.lock().unwrap().comments.len()
    }

    fn with_count(data: &StoreData, article: &Article) -> Article {
        let comment_count = data
            .comments
            .iter()
            .filter(|comment| comment.article_id == article.id)
            .count();
        Article {
            comment_count: i64::try_from(comment_count).unwrap(),
            ..article.clone()
        }
    }
}

fn compare(column: SortColumn, a: &ArticleSummary, b: &ArticleSummary) -> Ordering {
    match column {
        SortColumn::ArticleId => i64::from(a.id).cmp(&i64::from(b.id)),
        SortColumn::Title => a.title.cmp(&b.title),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::Author => a.author.as_str().cmp(b.author.as_str()),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::ArticleImgUrl => a.article_img_url.cmp(&b.article_img_url),
        SortColumn::Votes => a.votes.cmp(&b.votes),
        SortColumn::CommentCount => a.comment_count.cmp(&b.comment_count),
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .articles
            .iter()
            .find(|stored| stored.id == id)
            .map(|stored| Self::with_count(&data, stored)))
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        self.list_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let data = self.data.lock().unwrap();

        let mut rows: Vec<ArticleSummary> = data
            .articles
            .iter()
            .filter(|stored| {
                listing
                    .topic
                    .as_deref()
                    .is_none_or(|topic| stored.topic == topic)
            })
            .map(|stored| Self::with_count(&data, stored).into())
            .collect();

        rows.sort_by(|a, b| {
            let primary = compare(listing.sort_by, a, b);
            let ordering = primary.then_with(|| i64::from(a.id).cmp(&i64::from(b.id)));
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        Ok(rows)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn adjust_votes(
        &self,
        id: ArticleId,
        increment: VoteIncrement,
    ) -> DomainResult<Option<Article>> {
        let mut data = self.data.lock().unwrap();
        let Some(index) = data
            .articles
            .iter()
            .position(|stored| stored.id == id)
        else {
            return Ok(None);
        };

        let article = &mut data.articles[index];
        article.votes = article
            .votes
            .checked_add(increment.value())
            .ok_or_else(|| DomainError::Validation(BAD_REQUEST.into()))?;
        let updated = article.clone();
        Ok(Some(Self::with_count(&data, &updated)))
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        let mut topics = self.data.lock().unwrap().topics.clone();
        topics.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(topics)
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Topic>> {
        self.topic_lookups.fetch_add(1, AtomicOrdering::SeqCst);
        let data = self.data.lock().unwrap();
        Ok(data.topics.iter().find(|topic| topic.slug == slug).cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users = self.data.lock().unwrap().users.clone();
        users.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(users)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let data = self.data.lock().unwrap();
        let mut comments: Vec<Comment> = data
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut data = self.data.lock().unwrap();
        if !data
            .articles
            .iter()
            .any(|stored| stored.id == comment.article_id)
        {
            return Err(DomainError::NotFound(ARTICLE_NOT_FOUND.into()));
        }
        if !data.users.iter().any(|user| user.username == comment.author) {
            return Err(DomainError::Validation(BAD_REQUEST.into()));
        }

        let next_id = data
            .comments
            .iter()
            .map(|existing| i64::from(existing.id))
            .max()
            .unwrap_or(0)
            + 1;
        let stored = Comment {
            id: CommentId::new(next_id)?,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body.as_str().to_owned(),
            votes: 0,
            created_at: Utc::now(),
        };
        data.comments.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut data = self.data.lock().unwrap();
        let before = data.comments.len();
        data.comments.retain(|comment| comment.id != id);
        Ok(data.comments.len() < before)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingStore;

fn unavailable() -> DomainError {
    DomainError::Persistence("connection refused".into())
}

#[async_trait]
impl ArticleReadRepository for FailingStore {
    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }
    async fn list(&self, _listing: &ArticleListing) -> DomainResult<Vec<ArticleSummary>> {
        Err(unavailable())
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingStore {
    async fn adjust_votes(
        &self,
        _id: ArticleId,
        _increment: VoteIncrement,
    ) -> DomainResult<Option<Article>> {
        Err(unavailable())
    }
}

#[async_trait]
impl TopicRepository for FailingStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Err(unavailable())
    }
    async fn find_by_slug(&self, _slug: &str) -> DomainResult<Option<Topic>> {
        Err(unavailable())
    }
}

#[async_trait]
impl UserRepository for FailingStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Err(unavailable())
    }
}

#[async_trait]
impl CommentRepository for FailingStore {
    async fn list_for_article(&self, _article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        Err(unavailable())
    }
    async fn insert(&self, _comment: NewComment) -> DomainResult<Comment> {
        Err(unavailable())
    }
    async fn delete(&self, _id: CommentId) -> DomainResult<bool> {
        Err(unavailable())
    }
}
