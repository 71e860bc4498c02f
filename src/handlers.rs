use axum::extract::{Path, State};
use axum::Json;

use crate::canvas::{Assignment, CalendarEvent, Course};
use crate::error::AppResult;
use crate::ics::{self, Event};
use crate::routes::AppState;

/// `GET /courses.json` — all courses visible to the configured token
pub async fn list_courses(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    Ok(Json(state.canvas.courses().await?))
}

/// `GET /courses/{id}/assignments.json` — assignments for one course
pub async fn course_assignments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Assignment>>> {
    Ok(Json(state.canvas.assignments(&id).await?))
}

/// `GET /courses/{id}/today.json` — calendar events for a comma-separated
/// course id list, generic events first, assignment events appended
///
/// The two upstream queries overlap (assignment events can already appear
/// in the generic feed) and no deduplication happens; the frontend relies
/// on seeing both lists.
pub async fn merged_today(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> AppResult<Json<Vec<CalendarEvent>>> {
    let query = context_codes_query(&ids);

    let mut events = state.canvas.calendar_events(&query).await?;
    let assignment_events = state
        .canvas
        .calendar_events(&format!("type=assignment&{}", query))
        .await?;
    events.extend(assignment_events);

    Ok(Json(events))
}

/// `GET /courses/today.json` — every course's ICS feed, aggregated
pub async fn courses_today(State(state): State<AppState>) -> AppResult<Json<Vec<Event>>> {
    let courses = state.canvas.courses().await?;
    let urls: Vec<String> = courses
        .into_iter()
        .map(|course| course.calendar.url)
        .filter(|url| !url.is_empty())
        .collect();

    let events = ics::collect_events(state.canvas.http(), urls, state.feed_deadline).await;
    Ok(Json(events))
}

/// Turn a comma-separated id list into Canvas `context_codes[]` parameters
///
/// Built by plain concatenation: Canvas expects the brackets literally,
/// so the ids must not go through form encoding.
fn context_codes_query(ids: &str) -> String {
    ids.split(',')
        .map(|id| format!("context_codes[]=course_{}", id))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_codes_for_single_id() {
        assert_eq!(context_codes_query("7"), "context_codes[]=course_7");
    }

    #[test]
    fn context_codes_for_id_list() {
        assert_eq!(
            context_codes_query("1,2"),
            "context_codes[]=course_1&context_codes[]=course_2"
        );
    }
}
