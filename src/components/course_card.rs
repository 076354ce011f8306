//! Catalog card for a single course.

#[cfg(test)]
#[path = "course_card_test.rs"]
mod course_card_test;

use leptos::prelude::*;

use crate::net::types::Course;

pub(crate) fn lesson_label(lessons: u32) -> String {
    match lessons {
        0 => "No lessons yet".to_owned(),
        1 => "1 lesson".to_owned(),
        n => format!("{n} lessons"),
    }
}

pub(crate) fn course_href(course_id: i64) -> String {
    format!("/courses/{course_id}")
}

/// A clickable card linking to the course detail page.
#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = course_href(course.id);
    let lessons = lesson_label(course.lessons);
    let instructor = course.instructor.map(|name| view! { <span class="course-card__instructor">{name}</span> });

    view! {
        <a class="course-card" href=href>
            <span class="course-card__title">{course.title}</span>
            <span class="course-card__summary">{course.summary}</span>
            {instructor}
            <span class="course-card__meta">{lessons}</span>
        </a>
    }
}
