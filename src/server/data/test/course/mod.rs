use crate::server::{
    data::course::{CourseRepository, INITIAL_ROW_VERSION},
    model::course::{CourseValues, UpdateCourseParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;
