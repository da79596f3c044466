//! Field-level validation. Every rule for a payload is evaluated and the
//! failures are aggregated into one 422 response, so the client sees all
//! field errors at once rather than the first one.

use std::collections::HashMap;

use crate::database::models::article::{ArticlePatch, NewArticle};
use crate::database::models::user::{NewUser, UserPatch};
use crate::database::update_builder::Patch;
use crate::error::ApiError;

const MAX_NAME: usize = 80;
const MAX_PHONE: usize = 40;
const MAX_EMAIL: usize = 150;
const MAX_PICTURE: usize = 500;
const MAX_TITLE: usize = 255;

fn finish(field_errors: HashMap<String, String>) -> Result<(), ApiError> {
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::unprocessable_entity("Validation failed", field_errors))
    }
}

fn check_len(errors: &mut HashMap<String, String>, field: &str, value: &str, max: usize) {
    if value.is_empty() {
        errors.insert(field.to_string(), "must not be empty".to_string());
    } else if value.len() > max {
        errors.insert(field.to_string(), format!("must be at most {} characters", max));
    }
}

fn check_email(errors: &mut HashMap<String, String>, email: &str) {
    if email.len() > MAX_EMAIL || !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        errors.insert("email".to_string(), "must be a valid email".to_string());
    }
}

fn check_password(errors: &mut HashMap<String, String>, password: &str) {
    if password.len() < 6 || password.len() > 50 {
        errors.insert("password".to_string(), "must be between 6 and 50 characters".to_string());
    }
}

fn check_range(errors: &mut HashMap<String, String>, field: &str, value: i64, min: i64, max: i64) {
    if value < min || value > max {
        errors.insert(field.to_string(), format!("must be between {} and {}", min, max));
    }
}

pub fn new_user(user: &NewUser) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    check_len(&mut errors, "first_name", &user.first_name, MAX_NAME);
    check_len(&mut errors, "last_name", &user.last_name, MAX_NAME);
    if let Some(phone) = &user.phone_number {
        if phone.len() > MAX_PHONE {
            errors.insert("phone_number".into(), format!("must be at most {} characters", MAX_PHONE));
        }
    }
    check_email(&mut errors, &user.email);
    if let Some(picture) = &user.user_picture {
        if picture.len() > MAX_PICTURE {
            errors.insert("user_picture".into(), format!("must be at most {} characters", MAX_PICTURE));
        }
    }
    check_password(&mut errors, &user.password);
    check_range(&mut errors, "id_theme", user.id_theme, 1, 10);
    check_range(&mut errors, "id_language", user.id_language, 1, 10);
    check_range(&mut errors, "is_admin", user.is_admin, 0, 1);
    finish(errors)
}

pub fn user_patch(patch: &UserPatch) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    if let Patch::Value(v) = &patch.first_name {
        check_len(&mut errors, "first_name", v, MAX_NAME);
    }
    if let Patch::Value(v) = &patch.last_name {
        check_len(&mut errors, "last_name", v, MAX_NAME);
    }
    if let Patch::Value(Some(v)) = &patch.phone_number {
        if v.len() > MAX_PHONE {
            errors.insert("phone_number".into(), format!("must be at most {} characters", MAX_PHONE));
        }
    }
    if let Patch::Value(v) = &patch.email {
        check_email(&mut errors, v);
    }
    if let Patch::Value(Some(v)) = &patch.user_picture {
        if v.len() > MAX_PICTURE {
            errors.insert("user_picture".into(), format!("must be at most {} characters", MAX_PICTURE));
        }
    }
    if let Patch::Value(v) = &patch.password {
        check_password(&mut errors, v);
    }
    if let Patch::Value(v) = &patch.id_theme {
        check_range(&mut errors, "id_theme", *v, 1, 10);
    }
    if let Patch::Value(v) = &patch.id_language {
        check_range(&mut errors, "id_language", *v, 1, 10);
    }
    if let Patch::Value(v) = &patch.is_admin {
        check_range(&mut errors, "is_admin", *v, 0, 1);
    }
    finish(errors)
}

pub fn new_article(article: &NewArticle) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    check_len(&mut errors, "title", &article.title, MAX_TITLE);
    if article.id_user < 1 {
        errors.insert("id_user".into(), "must be a positive identifier".into());
    }
    if article.main_content.is_empty() {
        errors.insert("main_content".into(), "must not be empty".into());
    }
    if let Some(image) = &article.main_image {
        if image.len() > MAX_PICTURE {
            errors.insert("main_image".into(), format!("must be at most {} characters", MAX_PICTURE));
        }
    }
    finish(errors)
}

pub fn article_patch(patch: &ArticlePatch) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    if let Patch::Value(v) = &patch.title {
        check_len(&mut errors, "title", v, MAX_TITLE);
    }
    if let Patch::Value(v) = &patch.id_user {
        if *v < 1 {
            errors.insert("id_user".into(), "must be a positive identifier".into());
        }
    }
    if let Patch::Value(v) = &patch.main_content {
        if v.is_empty() {
            errors.insert("main_content".into(), "must not be empty".into());
        }
    }
    if let Patch::Value(Some(v)) = &patch.main_image {
        if v.len() > MAX_PICTURE {
            errors.insert("main_image".into(), format!("must be at most {} characters", MAX_PICTURE));
        }
    }
    finish(errors)
}

/// Ratings are optional; when supplied they must sit on the 0..=5 scale.
pub fn rating(value: Option<i64>) -> Result<(), ApiError> {
    let mut errors = HashMap::new();
    if let Some(v) = value {
        check_range(&mut errors, "rating", v, 0, 5);
    }
    finish(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> NewUser {
        NewUser {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            phone_number: None,
            email: "grace@example.com".into(),
            user_picture: None,
            password: "cobol1959".into(),
            id_theme: 1,
            id_language: 1,
            is_admin: 0,
        }
    }

    #[test]
    fn valid_user_passes() {
        assert!(new_user(&valid_user()).is_ok());
    }

    #[test]
    fn all_field_errors_are_reported_at_once() {
        let mut user = valid_user();
        user.first_name = String::new();
        user.email = "not-an-email".into();
        user.password = "shrt".into();

        let err = new_user(&user).unwrap_err();
        match err {
            ApiError::UnprocessableEntity { field_errors, .. } => {
                assert_eq!(field_errors.len(), 3);
                assert!(field_errors.contains_key("first_name"));
                assert!(field_errors.contains_key("email"));
                assert!(field_errors.contains_key("password"));
            }
            other => panic!("expected 422, got {:?}", other),
        }
    }

    #[test]
    fn patch_only_checks_present_fields() {
        let patch = UserPatch {
            first_name: Patch::Value("Grace".into()),
            ..UserPatch::default()
        };
        assert!(user_patch(&patch).is_ok());

        let patch = UserPatch {
            id_theme: Patch::Value(99),
            ..UserPatch::default()
        };
        assert!(user_patch(&patch).is_err());
    }

    #[test]
    fn rating_must_be_on_scale() {
        assert!(rating(None).is_ok());
        assert!(rating(Some(5)).is_ok());
        assert!(rating(Some(6)).is_err());
    }
}
