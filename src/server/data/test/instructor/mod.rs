use crate::server::{data::instructor::InstructorRepository, model::instructor::InstructorParams};
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_details;
mod update;
