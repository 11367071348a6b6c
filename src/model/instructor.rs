use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InstructorDto {
    pub id: i32,
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: NaiveDate,
    pub office_location: Option<String>,
}

impl InstructorDto {
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_mid_name)
    }
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct AssignedCourseDto {
    pub id: i32,
    pub title: String,
    pub department_name: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InstructorDetailsDto {
    pub instructor: InstructorDto,
    pub courses: Vec<AssignedCourseDto>,
}

/// Body for both creating and editing an instructor.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct InstructorFormDto {
    pub last_name: String,
    pub first_mid_name: String,
    pub hire_date: NaiveDate,
}
