//! Type serialization tests for adn-core

use adn_core::*;
use chrono::{TimeZone, Utc};

fn sample_user() -> User {
    User {
        id: "19058".to_string(),
        username: "whee".to_string(),
        name: "Brian".to_string(),
        description: Description {
            text: "hi".to_string(),
            html: "<span>hi</span>".to_string(),
            entities: Entities::default(),
        },
        timezone: "US/Eastern".to_string(),
        locale: "en_US".to_string(),
        avatar_image: Image {
            height: 200,
            width: 200,
            url: "https://example.net/avatar.png".to_string(),
        },
        cover_image: Image {
            height: 260,
            width: 960,
            url: "https://example.net/cover.png".to_string(),
        },
        account_type: AccountType::Human,
        created_at: Some(Utc.with_ymd_and_hms(2012, 8, 13, 22, 25, 40).unwrap()),
        counts: Counts {
            following: 100,
            followers: 200,
            posts: 3000,
            stars: 42,
        },
        app_data: serde_json::Value::Null,
        follows_you: false,
        you_follow: true,
        you_muted: false,
    }
}

mod serialization {
    use super::*;

    #[test]
    fn test_user_round_trip() {
        let user = sample_user();

        let json = serde_json::to_string(&user).unwrap();
        let parsed: User = serde_json::from_str(&json).unwrap();

        assert_eq!(user, parsed);
    }

    #[test]
    fn test_user_type_field_uses_wire_name() {
        let json = serde_json::to_string(&sample_user()).unwrap();
        assert!(json.contains("\"type\":\"human\""));
    }

    #[test]
    fn test_user_from_api_document() {
        // Trimmed from a real /stream/0/users/{id} response body.
        let json = r#"{
            "id": "19058",
            "username": "whee",
            "name": "Brian",
            "description": {"text": "", "html": "", "entities": {}},
            "timezone": "US/Eastern",
            "locale": "en_US",
            "avatar_image": {"height": 200, "width": 200, "url": "https://example.net/a.png"},
            "cover_image": {"height": 260, "width": 960, "url": "https://example.net/c.png"},
            "type": "human",
            "created_at": "2012-08-13T22:25:40Z",
            "counts": {"following": 100, "followers": 200, "posts": 3000, "stars": 42},
            "follows_you": false,
            "you_follow": true,
            "you_muted": false
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "whee");
        assert_eq!(user.counts.followers, 200);
        assert!(user.you_follow);
    }
}

mod envelope {
    use super::*;

    #[test]
    fn test_user_envelope_success() {
        let json = r#"{
            "meta": {"code": 200},
            "data": {
                "id": "19058",
                "username": "whee",
                "name": "Brian",
                "created_at": "2012-08-13T22:25:40Z"
            }
        }"#;

        let envelope: Envelope<User> = serde_json::from_str(json).unwrap();
        let user = envelope.into_result().unwrap();
        assert_eq!(user.id, "19058");
        assert_eq!(user.username, "whee");
    }

    #[test]
    fn test_user_envelope_with_minimal_user_body() {
        // `User` is not `Default`; the envelope's `Deserialize` impl must not
        // require it, and a data object carrying only the identifiers must
        // still decode.
        let json = r#"{"meta":{"error_id":""},"data":{"id":"19058","username":"whee"}}"#;

        let envelope: Envelope<User> = serde_json::from_str(json).unwrap();
        let user = envelope.into_result().unwrap();
        assert_eq!(user.id, "19058");
        assert_eq!(user.username, "whee");
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn test_user_envelope_error() {
        let json = r#"{
            "meta": {"code": 404, "error_id": "404", "error_message": "Not found"},
            "data": null
        }"#;

        let envelope: Envelope<User> = serde_json::from_str(json).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.id, "404");
        assert_eq!(err.message, "Not found");
    }
}
