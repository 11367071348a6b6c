use dioxus::prelude::*;

use crate::client::{
    component::Layout,
    model::delete_notice::DeleteNotice,
    route::{
        course::{CourseDetails, Courses, CreateCourse, DeleteCourse, EditCourse},
        instructor::{
            CreateInstructor, DeleteInstructor, EditInstructor, InstructorDetails, Instructors,
        },
        Home, NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[nest("/courses")]
        #[route("/")]
        Courses {},

        #[route("/create")]
        CreateCourse {},

        #[route("/:id")]
        CourseDetails { id: i32 },

        #[route("/:id/edit")]
        EditCourse { id: i32 },

        #[route("/:id/delete?:notice")]
        DeleteCourse { id: i32, notice: DeleteNotice },
    #[end_nest]

    #[nest("/instructors")]
        #[route("/")]
        Instructors {},

        #[route("/create")]
        CreateInstructor {},

        #[route("/:id")]
        InstructorDetails { id: i32 },

        #[route("/:id/edit")]
        EditInstructor { id: i32 },

        #[route("/:id/delete?:notice")]
        DeleteInstructor { id: i32, notice: DeleteNotice },
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
