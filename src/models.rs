use serde::Deserialize;

/// Envelope of the randomuser.me response. Only the keys we consume are
/// declared; everything else in the payload is ignored by serde.
#[derive(Deserialize, Debug)]
pub struct ApiResponse {
    pub results: Vec<UserRecord>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub name: Name,
    pub picture: Picture,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Name {
    pub first: String,
    pub last: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Picture {
    pub thumbnail: String,
}

impl UserRecord {
    /// Filename the thumbnail is saved under, relative to the output
    /// directory. Two users sharing a first+last name collide and the
    /// second overwrites the first.
    pub fn thumbnail_filename(&self) -> String {
        format!("{}_{}.png", self.name.first, self.name.last)
    }
}

#[cfg(test)]
pub fn sample_user(first: &str, last: &str, thumbnail: &str) -> UserRecord {
    UserRecord {
        name: Name {
            first: first.into(),
            last: last.into(),
        },
        picture: Picture {
            thumbnail: thumbnail.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_filename_joins_first_and_last() {
        let user = sample_user("Alice", "Anderson", "https://example.com/a.jpg");
        assert_eq!(user.thumbnail_filename(), "Alice_Anderson.png");
    }

    #[test]
    fn response_parses_expected_keys_and_ignores_the_rest() {
        let body = r#"{
            "results": [
                {
                    "gender": "female",
                    "name": {"title": "Ms", "first": "Alice", "last": "Anderson"},
                    "email": "alice@example.com",
                    "picture": {
                        "large": "https://example.com/large.jpg",
                        "thumbnail": "https://example.com/thumb.jpg"
                    }
                }
            ],
            "info": {"results": 1, "page": 1}
        }"#;

        let parsed: ApiResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].name.first, "Alice");
        assert_eq!(parsed.results[0].name.last, "Anderson");
        assert_eq!(
            parsed.results[0].picture.thumbnail,
            "https://example.com/thumb.jpg"
        );
    }

    #[test]
    fn response_with_missing_name_key_is_rejected() {
        let body = r#"{"results": [{"picture": {"thumbnail": "x"}}]}"#;
        assert!(serde_json::from_str::<ApiResponse>(body).is_err());
    }
}
