//! Background roll number lookup.

use sea_orm::DatabaseConnection;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tokio::task::JoinHandle;

use crate::server::{
    data::student::StudentRepository,
    error::{internal::InternalError, AppError},
    model::student::Student,
    resilience::Resilience,
};

/// Handle to a roll number lookup running on its own task.
///
/// Awaiting the handle yields the lookup result. Dropping it detaches the task, which then
/// runs to completion; `abort` cancels it.
pub struct RollNumberLookup {
    handle: JoinHandle<Result<Option<Student>, AppError>>,
}

impl RollNumberLookup {
    pub(super) fn spawn(
        db: DatabaseConnection,
        resilience: Resilience,
        roll_number: String,
    ) -> Self {
        let handle = tokio::spawn(async move {
            let db = &db;
            let roll_number = roll_number.as_str();

            resilience
                .call_or_fallback(move || async move {
                    StudentRepository::new(db)
                        .find_first_by_roll_number(roll_number)
                        .await?
                        .ok_or_else(|| {
                            AppError::NotFound(format!(
                                "Student not found with roll number: {}",
                                roll_number
                            ))
                        })
                })
                .await
        });

        Self { handle }
    }

    /// Cancels the lookup; awaiting the handle afterwards yields an internal error.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Future for RollNumberLookup {
    type Output = Result<Option<Student>, AppError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.handle).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(err)) => Poll::Ready(Err(InternalError::LookupTask(err).into())),
        }
    }
}
