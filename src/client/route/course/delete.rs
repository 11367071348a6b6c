use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        app::SITE_NAME,
        component::{
            page::{ErrorPage, LoadingPage},
            DeleteNoticeAlert, Page,
        },
        model::{delete_notice::DeleteNotice, error::ApiError},
        router::Route,
    },
    model::course::CourseDetailsDto,
};

use super::details::CourseSummary;

#[cfg(feature = "web")]
use crate::client::api::course::{delete_course, get_course};

/// Delete confirmation for a course.
///
/// A delete that loses a concurrency race or fails reloads this view with a notice
/// and the current values, so confirming again uses the fresh row version.
#[component]
pub fn DeleteCourse(id: i32, notice: DeleteNotice) -> Element {
    let nav = navigator();
    let mut shown_notice = use_signal(|| notice);
    let mut reload = use_signal(|| 0u32);
    let mut details = use_signal(|| None::<CourseDetailsDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut submission = use_signal(|| None::<i32>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            reload();
            get_course(id).await
        });

        use_effect(move || match future.read_unchecked().as_ref() {
            Some(Ok(data)) => details.set(Some(data.clone())),
            Some(Err(err)) if err.is_not_found() && shown_notice.peek().is_set() => {
                nav.replace(Route::Courses {});
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch course {}: {}", id, err);
                error.set(Some(err.clone()));
            }
            None => (),
        });

        let delete_future = use_resource(move || async move {
            match submission() {
                Some(row_version) => Some(delete_course(id, row_version).await),
                None => None,
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
                match result {
                    Ok(()) => {
                        nav.push(Route::Courses {});
                    }
                    Err(err) => {
                        let next = if err.is_conflict() {
                            tracing::info!("Delete of course {} conflicted", id);
                            DeleteNotice::Conflict
                        } else {
                            tracing::error!("Failed to delete course {}: {}", id, err);
                            DeleteNotice::Failed
                        };
                        shown_notice.set(next);
                        nav.replace(Route::DeleteCourse { id, notice: next });
                        submission.set(None);
                        *reload.write() += 1;
                    }
                }
            }
        });
    }

    let is_submitting = submission.read().is_some();

    rsx! {
        Title { "Delete Course | {SITE_NAME}" }
        if let Some(data) = details() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-3xl card bg-base-200",
                    div {
                        class: "card-body",
                        h1 { class: "card-title", "Delete Course" }
                        DeleteNoticeAlert { notice: shown_notice() }
                        h2 { class: "font-semibold", "Are you sure you want to delete this?" }
                        CourseSummary { details: data.clone() }
                        div {
                            class: "card-actions mt-4",
                            button {
                                class: "btn btn-error",
                                disabled: is_submitting,
                                onclick: move |_| submission.set(Some(data.course.row_version)),
                                "Delete"
                            }
                            Link { to: Route::Courses {}, class: "btn btn-ghost", "Back to List" }
                        }
                    }
                }
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage { }
        }
    }
}
