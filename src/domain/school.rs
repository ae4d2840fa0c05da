use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: u32,
    /// Enrolled course ids in enrollment order.
    #[serde(default)]
    pub courses: Vec<u32>,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            courses: Vec::new(),
        }
    }

    /// Adds the course unless the student already holds it.
    pub fn enroll(&mut self, course_id: u32) -> bool {
        if self.is_enrolled(course_id) {
            return false;
        }
        self.courses.push(course_id);
        true
    }

    pub fn is_enrolled(&self, course_id: u32) -> bool {
        self.courses.contains(&course_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: u32,
    pub name: String,
    pub specialization: String,
}

impl Instructor {
    pub fn new(id: u32, name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialization: specialization.into(),
        }
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Specialization: {}",
            self.id, self.name, self.specialization
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    /// Instructor id, resolved through the registry.
    #[serde(default)]
    pub instructor: Option<u32>,
}

impl Course {
    pub fn new(id: u32, title: impl Into<String>, instructor: Option<u32>) -> Self {
        Self {
            id,
            title: title.into(),
            instructor,
        }
    }
}

/// Case-insensitive exact comparison used by every name and title lookup.
pub fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
