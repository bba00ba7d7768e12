#![no_std]

extern crate alloc;

pub mod config;
pub mod content;
pub mod errors;
pub mod lazy_media;
pub mod logging;
pub mod rich_text;
