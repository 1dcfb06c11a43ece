use super::*;
use serde_json::json;

#[test]
fn register_input_uses_camel_case() {
    let input = RegisterInput { email: "a@b.c".into(), password: "pw".into(), user_name: "ada".into() };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "email": "a@b.c", "password": "pw", "userName": "ada" })
    );
}

#[test]
fn post_accepts_numeric_author_id_and_missing_optionals() {
    let post: Post = serde_json::from_value(json!({
        "_id": "p1",
        "title": "Hello",
        "content": "<p>hi</p>",
        "slug": "hello",
        "status": "published",
        "authorId": 42,
        "createdAt": "2024-01-01",
        "updatedAt": "2024-01-02"
    }))
    .unwrap();
    assert_eq!(post.status, PostStatus::Published);
    assert_eq!(post.author_id, json!(42));
    assert!(post.tags.is_empty());
    assert!(post.likes.is_none());
}

#[test]
fn create_post_omits_unset_fields() {
    let input = CreatePost {
        title: "T".into(),
        content: "C".into(),
        slug: None,
        status: Some(PostStatus::Draft),
        thumbnail: None,
        tags: Vec::new(),
    };
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({ "title": "T", "content": "C", "status": "draft" })
    );
}

#[test]
fn envelope_tolerates_missing_data() {
    let env: Envelope<Vec<Post>> = serde_json::from_value(json!({ "success": false, "message": "nope" })).unwrap();
    assert!(!env.success);
    assert!(env.data.is_none());
    assert_eq!(env.message.as_deref(), Some("nope"));
}

#[test]
fn reset_password_input_uses_camel_case() {
    let input: ResetPasswordInput = serde_json::from_value(json!({ "token": "42", "newPassword": "pw" })).unwrap();
    assert_eq!(input, ResetPasswordInput { token: "42".into(), new_password: "pw".into() });
    assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "token": "42", "newPassword": "pw" }));
}

#[test]
fn envelope_of_single_post_without_data() {
    let env: Envelope<Post> = serde_json::from_value(json!({ "success": true })).unwrap();
    assert!(env.success);
    assert!(env.data.is_none());

    let page: Envelope<PostPage> = serde_json::from_value(json!({ "success": false, "error": "down" })).unwrap();
    assert!(page.data.is_none());
    assert_eq!(page.error.as_deref(), Some("down"));
}

#[test]
fn comment_role_is_lowercase() {
    let comment: Comment = serde_json::from_value(json!({
        "_id": "c1",
        "postId": "p1",
        "userId": "u1",
        "authorName": "Ada",
        "authorRole": "author",
        "content": "Nice",
        "createdAt": "2024-01-01",
        "updatedAt": "2024-01-01"
    }))
    .unwrap();
    assert_eq!(comment.author_role, CommentAuthorRole::Author);
    assert_eq!(comment.likes, 0);
    assert!(comment.liked_by.is_empty());
}

#[test]
fn my_blog_envelope_missing_blog_is_none() {
    let env: MyBlogEnvelope = serde_json::from_value(json!({})).unwrap();
    assert!(env.blog.is_none());
}
