// tests/support/builders.rs
use super::mocks::{InMemoryStore, StoreData};
use chrono::{DateTime, TimeZone, Utc};
use newsdesk::domain::article::{Article, ArticleId};
use newsdesk::domain::comment::{Comment, CommentId};
use newsdesk::domain::topic::Topic;
use newsdesk::domain::user::{User, Username};
use std::sync::Arc;

pub const DEFAULT_IMG: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn topic(slug: &str, description: &str) -> Topic {
    Topic {
        slug: slug.into(),
        description: description.into(),
    }
}

pub fn user(username: &str, name: &str) -> User {
    User {
        username: Username::new(username).unwrap(),
        name: name.into(),
        avatar_url: format!("https://avatars.example.test/{username}.png"),
    }
}

pub fn article(
    id: i64,
    title: &str,
    topic: &str,
    author: &str,
    created_at: DateTime<Utc>,
    votes: i32,
) -> Article {
    Article {
        id: ArticleId::new(id).unwrap(),
        title: title.into(),
        topic: topic.into(),
        author: Username::new(author).unwrap(),
        body: format!("Body of {title}"),
        created_at,
        votes,
        article_img_url: DEFAULT_IMG.into(),
        comment_count: 0,
    }
}

pub fn comment(
    id: i64,
    article_id: i64,
    author: &str,
    body: &str,
    created_at: DateTime<Utc>,
) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        article_id: ArticleId::new(article_id).unwrap(),
        author: Username::new(author).unwrap(),
        body: body.into(),
        votes: 0,
        created_at,
    }
}

/// Small news site:
///
/// | id | topic | created_at       | votes | comments |
/// |----|-------|------------------|-------|----------|
/// | 1  | mitch | 2020-07-09 20:11 | 100   | 3        |
/// | 2  | mitch | 2020-10-16 05:03 | 0     | 0        |
/// | 3  | mitch | 2020-11-03 09:12 | 0     | 2        |
/// | 4  | mitch | 2020-05-06 01:14 | 0     | 0        |
/// | 5  | cats  | 2020-08-03 13:14 | 0     | 1        |
/// | 6  | mitch | 2020-10-18 01:00 | 0     | 0        |
///
/// Topic `paper` exists but has no articles.
pub fn seed_data() -> StoreData {
    StoreData {
        topics: vec![
            topic("mitch", "The man, the Mitch, the legend"),
            topic("cats", "Not dogs"),
            topic("paper", "what books are made of"),
        ],
        users: vec![
            user("butter_bridge", "jonny"),
            user("icellusedkars", "sam"),
            user("rogersop", "paul"),
            user("lurker", "do_nothing"),
        ],
        articles: vec![
            article(
                1,
                "Living in the shadow of a great man",
                "mitch",
                "butter_bridge",
                at(2020, 7, 9, 20, 11),
                100,
            ),
            article(
                2,
                "Sony Vaio; or, The Laptop",
                "mitch",
                "icellusedkars",
                at(2020, 10, 16, 5, 3),
                0,
            ),
            article(
                3,
                "Eight pug gifs that remind me of mitch",
                "mitch",
                "icellusedkars",
                at(2020, 11, 3, 9, 12),
                0,
            ),
            article(
                4,
                "Student SUES Mitch!",
                "mitch",
                "rogersop",
                at(2020, 5, 6, 1, 14),
                0,
            ),
            article(
                5,
                "UNCOVERED: catspiracy to bring down democracy",
                "cats",
                "rogersop",
                at(2020, 8, 3, 13, 14),
                0,
            ),
            article(6, "A", "mitch", "icellusedkars", at(2020, 10, 18, 1, 0), 0),
        ],
        comments: vec![
            comment(
                1,
                1,
                "butter_bridge",
                "Oh, I've got compassion running out of my nose, pal!",
                at(2020, 4, 6, 12, 17),
            ),
            comment(
                2,
                1,
                "icellusedkars",
                "The beautiful thing about treasure is that it exists.",
                at(2020, 10, 31, 3, 3),
            ),
            comment(3, 1, "icellusedkars", "Replacing the quiet elegance.", at(2020, 3, 1, 1, 13)),
            comment(4, 3, "icellusedkars", "git push origin master", at(2020, 6, 20, 7, 24)),
            comment(5, 3, "butter_bridge", "Ambidextrous marsupial", at(2020, 9, 19, 23, 10)),
            comment(6, 5, "rogersop", "What do you see? I have no idea", at(2020, 11, 22, 11, 13)),
        ],
    }
}

pub fn seeded_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new(seed_data()))
}

pub fn empty_store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::new(StoreData::default()))
}
