// src/models/mod.rs

pub mod category;
pub mod learning_style;
pub mod question;
pub mod response;
pub mod user;
