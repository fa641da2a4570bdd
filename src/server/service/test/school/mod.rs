use crate::server::{
    error::AppError,
    model::school::{CreateSchoolParam, UpdateSchoolParam},
    service::school::SchoolService,
};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;
