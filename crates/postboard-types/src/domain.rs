use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Identifier of an employee (the API calls them users).
///
/// Zero is reserved as the invalid id: every lookup that receives it
/// does nothing. Remote data never uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Identifier of a post. Zero is reserved as the invalid id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl UserId {
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl PostId {
    pub fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s).map(UserId)
    }
}

impl FromStr for PostId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s).map(PostId)
    }
}

fn parse_id(s: &str) -> Result<u64, Error> {
    match s.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(Error::InvalidId(s.to_string())),
        Ok(n) => Ok(n),
    }
}

/// Company info attached to an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// An employee as returned by `GET /users`.
///
/// Immutable snapshot of the remote record; nothing here is cached
/// across render cycles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub company: Company,
}

/// A post belonging to exactly one employee via `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A comment belonging to exactly one post, fetched lazily and never
/// persisted beyond the current render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "postId")]
    pub post_id: PostId,
    pub name: String,
    pub body: String,
    pub email: String,
}
