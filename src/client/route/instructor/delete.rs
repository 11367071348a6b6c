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
    model::instructor::InstructorDetailsDto,
};

use super::details::InstructorSummary;

#[cfg(feature = "web")]
use crate::client::api::instructor::{delete_instructor, get_instructor};

#[component]
pub fn DeleteInstructor(id: i32, notice: DeleteNotice) -> Element {
    let nav = navigator();
    let mut shown_notice = use_signal(|| notice);
    let mut reload = use_signal(|| 0u32);
    let mut details = use_signal(|| None::<InstructorDetailsDto>);
    let mut error = use_signal(|| None::<ApiError>);
    let mut submitting = use_signal(|| false);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            reload();
            get_instructor(id).await
        });

        use_effect(move || match future.read_unchecked().as_ref() {
            Some(Ok(data)) => details.set(Some(data.clone())),
            Some(Err(err)) if err.is_not_found() && shown_notice.peek().is_set() => {
                nav.replace(Route::Instructors {});
            }
            Some(Err(err)) => {
                tracing::error!("Failed to fetch instructor {}: {}", id, err);
                error.set(Some(err.clone()));
            }
            None => (),
        });

        let delete_future = use_resource(move || async move {
            if submitting() {
                Some(delete_instructor(id).await)
            } else {
                None
            }
        });

        use_effect(move || {
            if let Some(Some(result)) = delete_future.read_unchecked().as_ref() {
                match result {
                    Ok(()) => {
                        nav.push(Route::Instructors {});
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete instructor {}: {}", id, err);
                        shown_notice.set(DeleteNotice::Failed);
                        nav.replace(Route::DeleteInstructor {
                            id,
                            notice: DeleteNotice::Failed,
                        });
                        submitting.set(false);
                        *reload.write() += 1;
                    }
                }
            }
        });
    }

    rsx! {
        Title { "Delete Instructor | {SITE_NAME}" }
        if let Some(data) = details() {
            Page {
                class: "flex flex-col items-center w-full",
                div {
                    class: "w-full max-w-3xl card bg-base-200",
                    div {
                        class: "card-body",
                        h1 { class: "card-title", "Delete Instructor" }
                        DeleteNoticeAlert { notice: shown_notice() }
                        h2 { class: "font-semibold", "Are you sure you want to delete this?" }
                        InstructorSummary { details: data }
                        div {
                            class: "card-actions mt-4",
                            button {
                                class: "btn btn-error",
                                disabled: submitting(),
                                onclick: move |_| submitting.set(true),
                                "Delete"
                            }
                            Link { to: Route::Instructors {}, class: "btn btn-ghost", "Back to List" }
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
