use crate::domain::school::{same_text, Course, Instructor, Student};
use crate::utils::error::{AppError, EntityKind, Result};

/// Returned by [`Registry::get_instructor_by_course`] for a missing course and
/// for a course without a resolvable instructor alike.
pub const INSTRUCTOR_NOT_FOUND: &str = "Course or instructor not found.";

/// In-memory store of students, courses and instructors.
///
/// Collections keep insertion order; name and title lookups return the first
/// case-insensitive match.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    students: Vec<Student>,
    courses: Vec<Course>,
    instructors: Vec<Instructor>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_student(&mut self, student: Student) -> Result<()> {
        if self.find_student(student.id).is_some() {
            return Err(AppError::DuplicateId {
                entity: EntityKind::Student,
                id: student.id,
            });
        }
        tracing::debug!(id = student.id, name = %student.name, "student added");
        self.students.push(student);
        Ok(())
    }

    pub fn add_course(&mut self, course: Course) -> Result<()> {
        if self.find_course(course.id).is_some() {
            return Err(AppError::DuplicateId {
                entity: EntityKind::Course,
                id: course.id,
            });
        }
        tracing::debug!(id = course.id, title = %course.title, "course added");
        self.courses.push(course);
        Ok(())
    }

    pub fn add_instructor(&mut self, instructor: Instructor) -> Result<()> {
        if self.find_instructor(instructor.id).is_some() {
            return Err(AppError::DuplicateId {
                entity: EntityKind::Instructor,
                id: instructor.id,
            });
        }
        tracing::debug!(id = instructor.id, name = %instructor.name, "instructor added");
        self.instructors.push(instructor);
        Ok(())
    }

    pub fn find_student(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    pub fn find_student_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| same_text(&s.name, name))
    }

    pub fn find_course(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn find_course_by_title(&self, title: &str) -> Option<&Course> {
        self.courses.iter().find(|c| same_text(&c.title, title))
    }

    pub fn find_instructor(&self, id: u32) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id == id)
    }

    pub fn enroll_student_in_course(&mut self, student_id: u32, course_id: u32) -> Result<()> {
        if self.find_course(course_id).is_none() {
            return Err(AppError::NotFound {
                entity: EntityKind::Course,
                key: course_id.to_string(),
            });
        }
        let student = self.student_mut(student_id)?;
        if !student.enroll(course_id) {
            return Err(AppError::AlreadyEnrolled {
                student_id,
                course_id,
            });
        }
        tracing::debug!(student_id, course_id, "student enrolled");
        Ok(())
    }

    pub fn is_student_enrolled_in_course(&self, student_id: u32, course_title: &str) -> bool {
        let Some(student) = self.find_student(student_id) else {
            return false;
        };
        student
            .courses
            .iter()
            .filter_map(|id| self.find_course(*id))
            .any(|course| same_text(&course.title, course_title))
    }

    /// Instructor name for the course, or [`INSTRUCTOR_NOT_FOUND`].
    pub fn get_instructor_by_course(&self, course_title: &str) -> &str {
        self.find_course_by_title(course_title)
            .and_then(|course| course.instructor)
            .and_then(|id| self.find_instructor(id))
            .map(|instructor| instructor.name.as_str())
            .unwrap_or(INSTRUCTOR_NOT_FOUND)
    }

    pub fn update_student(&mut self, id: u32, name: impl Into<String>, age: u32) -> Result<()> {
        let student = self.student_mut(id)?;
        student.name = name.into();
        student.age = age;
        tracing::debug!(id, "student updated");
        Ok(())
    }

    /// Removes the student only. Courses and instructors are left as they are.
    pub fn delete_student(&mut self, id: u32) -> Result<()> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| not_found(EntityKind::Student, id))?;
        self.students.remove(index);
        tracing::debug!(id, "student deleted");
        Ok(())
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn instructor_count(&self) -> usize {
        self.instructors.len()
    }

    /// `ID: 1, Name: Ana, Age: 20, Courses: Math, Art` (or `Courses: None`).
    pub fn describe_student(&self, student: &Student) -> String {
        let titles: Vec<&str> = student
            .courses
            .iter()
            .filter_map(|id| self.find_course(*id))
            .map(|course| course.title.as_str())
            .collect();
        let courses = if titles.is_empty() {
            "None".to_string()
        } else {
            titles.join(", ")
        };
        format!(
            "ID: {}, Name: {}, Age: {}, Courses: {}",
            student.id, student.name, student.age, courses
        )
    }

    /// `ID: 7, Title: Math, Instructor: Sam` (or `Instructor: Unassigned`).
    pub fn describe_course(&self, course: &Course) -> String {
        let instructor = course
            .instructor
            .and_then(|id| self.find_instructor(id))
            .map(|instructor| instructor.name.as_str())
            .unwrap_or("Unassigned");
        format!(
            "ID: {}, Title: {}, Instructor: {}",
            course.id, course.title, instructor
        )
    }

    fn student_mut(&mut self, id: u32) -> Result<&mut Student> {
        self.students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| not_found(EntityKind::Student, id))
    }
}

fn not_found(entity: EntityKind, id: u32) -> AppError {
    AppError::NotFound {
        entity,
        key: id.to_string(),
    }
}
