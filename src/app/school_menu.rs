use crate::app::input::{parse_number, prompt_line, prompt_number, prompt_optional_number, Step};
use crate::core::registry::Registry;
use crate::domain::ports::Console;
use crate::domain::school::{Course, Instructor, Student};
use crate::utils::error::Result;

const MENU: &str = "\n===== STUDENT MANAGEMENT SYSTEM =====
1. Add Student
2. Add Instructor
3. Add Course
4. Enroll Student in Course
5. Show All Students
6. Show All Courses
7. Show All Instructors
8. Find Student
9. Find Course
10. Update Student
11. Delete Student
12. Check if Student Enrolled in Course
13. Get Instructor Name by Course
14. Exit";

/// Runs the numbered school menu until the user exits or input runs out.
pub fn run_school_menu<C: Console>(console: &mut C, registry: &mut Registry) -> Result<()> {
    let mut menu = SchoolMenu { console, registry };
    loop {
        menu.console.write_line(MENU)?;
        let Some(line) = prompt_line(menu.console, "Choose an option: ")? else {
            break;
        };
        let step = match parse_number::<u32>(&line).ok() {
            Some(1) => menu.add_student()?,
            Some(2) => menu.add_instructor()?,
            Some(3) => menu.add_course()?,
            Some(4) => menu.enroll_student()?,
            Some(5) => menu.show_all_students()?,
            Some(6) => menu.show_all_courses()?,
            Some(7) => menu.show_all_instructors()?,
            Some(8) => menu.find_student()?,
            Some(9) => menu.find_course()?,
            Some(10) => menu.update_student()?,
            Some(11) => menu.delete_student()?,
            Some(12) => menu.check_enrollment()?,
            Some(13) => menu.instructor_by_course()?,
            Some(14) => Step::Quit,
            _ => {
                menu.console.write_line("Invalid option.")?;
                Step::Continue
            }
        };
        if step == Step::Quit {
            break;
        }
    }
    tracing::debug!(
        students = menu.registry.student_count(),
        courses = menu.registry.course_count(),
        "school session ended"
    );
    Ok(())
}

struct SchoolMenu<'a, C: Console> {
    console: &'a mut C,
    registry: &'a mut Registry,
}

// Each prompt yields `None` once input runs out; the action then quits the menu.
macro_rules! ask {
    ($e:expr) => {
        match $e? {
            Some(value) => value,
            None => return Ok(Step::Quit),
        }
    };
}

impl<C: Console> SchoolMenu<'_, C> {
    fn add_student(&mut self) -> Result<Step> {
        let id: u32 = ask!(prompt_number(self.console, "Student ID: "));
        let name = ask!(prompt_line(self.console, "Name: "));
        let age: u32 = ask!(prompt_number(self.console, "Age: "));

        let message = match self.registry.add_student(Student::new(id, name, age)) {
            Ok(()) => "Student added successfully.",
            Err(e) => {
                tracing::debug!(error = %e, "add student rejected");
                "Student ID already exists."
            }
        };
        self.console.write_line(message)?;
        Ok(Step::Continue)
    }

    fn add_instructor(&mut self) -> Result<Step> {
        let id: u32 = ask!(prompt_number(self.console, "Instructor ID: "));
        let name = ask!(prompt_line(self.console, "Name: "));
        let specialization = ask!(prompt_line(self.console, "Specialization: "));

        let message = match self
            .registry
            .add_instructor(Instructor::new(id, name, specialization))
        {
            Ok(()) => "Instructor added successfully.",
            Err(e) => {
                tracing::debug!(error = %e, "add instructor rejected");
                "Instructor ID already exists."
            }
        };
        self.console.write_line(message)?;
        Ok(Step::Continue)
    }

    fn add_course(&mut self) -> Result<Step> {
        let id: u32 = ask!(prompt_number(self.console, "Course ID: "));
        let title = ask!(prompt_line(self.console, "Title: "));
        let instructor: Option<u32> = ask!(prompt_optional_number(
            self.console,
            "Instructor ID (blank for none): "
        ));

        if let Some(instructor_id) = instructor {
            if self.registry.find_instructor(instructor_id).is_none() {
                self.console.write_line("Instructor not found.")?;
                return Ok(Step::Continue);
            }
        }

        let message = match self.registry.add_course(Course::new(id, title, instructor)) {
            Ok(()) => "Course added successfully.",
            Err(e) => {
                tracing::debug!(error = %e, "add course rejected");
                "Course ID already exists."
            }
        };
        self.console.write_line(message)?;
        Ok(Step::Continue)
    }

    fn enroll_student(&mut self) -> Result<Step> {
        let student_id: u32 = ask!(prompt_number(self.console, "Student ID: "));
        let course_id: u32 = ask!(prompt_number(self.console, "Course ID: "));

        match self.registry.enroll_student_in_course(student_id, course_id) {
            Ok(()) => self.console.write_line("Enrollment successful.")?,
            Err(e) => self
                .console
                .write_line(&format!("Failed to enroll: {}.", e))?,
        }
        Ok(Step::Continue)
    }

    fn show_all_students(&mut self) -> Result<Step> {
        if self.registry.students().is_empty() {
            self.console.write_line("No students.")?;
        }
        for student in self.registry.students() {
            let line = self.registry.describe_student(student);
            self.console.write_line(&line)?;
        }
        Ok(Step::Continue)
    }

    fn show_all_courses(&mut self) -> Result<Step> {
        if self.registry.courses().is_empty() {
            self.console.write_line("No courses.")?;
        }
        for course in self.registry.courses() {
            let line = self.registry.describe_course(course);
            self.console.write_line(&line)?;
        }
        Ok(Step::Continue)
    }

    fn show_all_instructors(&mut self) -> Result<Step> {
        if self.registry.instructors().is_empty() {
            self.console.write_line("No instructors.")?;
        }
        for instructor in self.registry.instructors() {
            self.console.write_line(&instructor.to_string())?;
        }
        Ok(Step::Continue)
    }

    fn find_student(&mut self) -> Result<Step> {
        let by_id = ask!(prompt_line(self.console, "Search by ID or Name? (i/n): ")).trim() == "i";
        let student = if by_id {
            let id: u32 = ask!(prompt_number(self.console, "Student ID: "));
            self.registry.find_student(id)
        } else {
            let name = ask!(prompt_line(self.console, "Name: "));
            self.registry.find_student_by_name(&name)
        };

        let line = match student {
            Some(student) => self.registry.describe_student(student),
            None => "Student not found.".to_string(),
        };
        self.console.write_line(&line)?;
        Ok(Step::Continue)
    }

    fn find_course(&mut self) -> Result<Step> {
        let by_id = ask!(prompt_line(self.console, "Search by ID or Title? (i/n): ")).trim() == "i";
        let course = if by_id {
            let id: u32 = ask!(prompt_number(self.console, "Course ID: "));
            self.registry.find_course(id)
        } else {
            let title = ask!(prompt_line(self.console, "Title: "));
            self.registry.find_course_by_title(&title)
        };

        let line = match course {
            Some(course) => self.registry.describe_course(course),
            None => "Course not found.".to_string(),
        };
        self.console.write_line(&line)?;
        Ok(Step::Continue)
    }

    fn update_student(&mut self) -> Result<Step> {
        let id: u32 = ask!(prompt_number(self.console, "Student ID: "));
        let name = ask!(prompt_line(self.console, "New Name: "));
        let age: u32 = ask!(prompt_number(self.console, "New Age: "));

        let message = match self.registry.update_student(id, name, age) {
            Ok(()) => "Student updated.",
            Err(_) => "Student not found.",
        };
        self.console.write_line(message)?;
        Ok(Step::Continue)
    }

    fn delete_student(&mut self) -> Result<Step> {
        let id: u32 = ask!(prompt_number(self.console, "Student ID to delete: "));

        let message = match self.registry.delete_student(id) {
            Ok(()) => "Student deleted.",
            Err(_) => "Deletion failed.",
        };
        self.console.write_line(message)?;
        Ok(Step::Continue)
    }

    fn check_enrollment(&mut self) -> Result<Step> {
        let id: u32 = ask!(prompt_number(self.console, "Student ID: "));
        let title = ask!(prompt_line(self.console, "Course Title: "));

        let message = if self.registry.is_student_enrolled_in_course(id, &title) {
            "Student is enrolled in the course."
        } else {
            "Student is not enrolled."
        };
        self.console.write_line(message)?;
        Ok(Step::Continue)
    }

    fn instructor_by_course(&mut self) -> Result<Step> {
        let title = ask!(prompt_line(self.console, "Course Title: "));
        let line = format!("Instructor: {}", self.registry.get_instructor_by_course(&title));
        self.console.write_line(&line)?;
        Ok(Step::Continue)
    }
}
