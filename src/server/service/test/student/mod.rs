use crate::{
    model::grade::Grade,
    server::{
        error::AppError,
        model::student::{CreateStudentParam, UpdateStudentParam},
        resilience::{
            circuit_breaker::{CircuitBreakerConfig, CircuitState},
            retry::RetryPolicy,
            Resilience,
        },
        service::{school::SchoolService, student::StudentService},
    },
};
use sea_orm::EntityTrait;
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod update;

fn create_param(school_id: i32) -> CreateStudentParam {
    CreateStudentParam {
        student_name: "John".to_string(),
        grade: Grade::G1,
        mobile_number: "+10000000000".to_string(),
        guardian_name: "Ali".to_string(),
        school_id,
    }
}

fn update_param(school_id: i32) -> UpdateStudentParam {
    UpdateStudentParam {
        student_name: "Jane".to_string(),
        grade: Grade::G2,
        mobile_number: "+19999999999".to_string(),
        school_id,
    }
}

/// Lookup policy without waits so retries do not slow the tests down.
fn resilience() -> Resilience {
    Resilience::new(
        "student_lookup",
        RetryPolicy::new(3, Duration::ZERO, Duration::from_secs(5)),
        CircuitBreakerConfig {
            failure_rate_threshold: 50,
            sliding_window_size: 10,
            minimum_calls: 5,
            open_wait: Duration::from_secs(60),
            half_open_calls: 1,
        },
    )
}
