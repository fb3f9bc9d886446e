//! Data models for `ModuleGuide`

pub mod course;
pub mod guide;

pub use course::{CourseContent, CourseMeta};
pub use guide::{Language, ModuleGuide, TimeModel};
