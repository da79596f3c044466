pub mod article;
pub mod association;
pub mod bookmark;
pub mod category;
pub mod comment;
pub mod completed_article;
pub mod faq;
pub mod followed_package;
pub mod guide;
pub mod package;
pub mod user;
