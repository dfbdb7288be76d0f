use super::model::Student;

/// Keeps the students whose name contains `term`, ignoring case.
pub fn filter_students<'a>(students: &'a [Student], term: &str) -> Vec<&'a Student> {
    let needle = term.to_lowercase();
    students
        .iter()
        .filter(|student| student.name.to_lowercase().contains(&needle))
        .collect()
}
