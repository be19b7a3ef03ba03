use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::user::ProgressEntry;
use crate::models::workout::Workout;
use crate::utils::parse_user::parse_user_id;
use crate::workout::execution::{
    CompletionOutcome, ExecutionError, ExecutionSession, ExecutionSessions,
};

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub workout: Workout,
    pub completed: Vec<String>,
    pub is_resting: bool,
    pub rest_remaining_seconds: i64,
    pub all_completed: bool,
}

impl SessionView {
    fn from_session(session: &ExecutionSession) -> Self {
        let now = Utc::now();
        Self {
            workout: session.workout.clone(),
            completed: session.completed.clone(),
            is_resting: session.is_resting(now),
            rest_remaining_seconds: session.rest_remaining(now),
            all_completed: session.all_completed(),
        }
    }
}

/// Start executing a workout. The stored exercise snapshots keep their
/// prescription, but media fields are refreshed from the catalog by
/// exercise name so the player always shows current photos and videos.
#[tracing::instrument(
    name = "Start workout session",
    skip(pool, sessions, claims),
    fields(username = %claims.username, workout_id = %path)
)]
pub async fn start_session(
    pool: web::Data<PgPool>,
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let workout_id = path.into_inner();

    let mut workout = match db::workouts::get(&pool, workout_id).await {
        Ok(Some(workout)) => workout,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "error": "Workout not found"
            }));
        }
        Err(e) => {
            tracing::error!("Database error fetching workout: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to load workout"));
        }
    };

    match db::exercises::list(&pool).await {
        Ok(catalog) => {
            for snapshot in &mut workout.exercises {
                if let Some(current) = catalog.iter().find(|ex| ex.name == snapshot.name) {
                    snapshot.photo = current.photo.clone();
                    snapshot.demo_images = current.demo_images.clone();
                    snapshot.video = current.video.clone();
                }
            }
        }
        Err(e) => {
            // Media enrichment is cosmetic; the session still works with
            // the stored snapshot media.
            tracing::warn!("Could not refresh exercise media: {}", e);
        }
    }

    let session = ExecutionSession::new(workout, Utc::now());
    let view = SessionView::from_session(&session);
    sessions.start(user_id, session);

    HttpResponse::Ok().json(ApiResponse::success("Workout session started", view))
}

#[tracing::instrument(
    name = "Get current session",
    skip(sessions, claims),
    fields(username = %claims.username)
)]
pub async fn get_current_session(
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match sessions.snapshot(user_id) {
        Some(session) => HttpResponse::Ok().json(ApiResponse::success(
            "Current session",
            SessionView::from_session(&session),
        )),
        None => HttpResponse::NotFound().json(json!({
            "error": "No workout session in progress"
        })),
    }
}

#[derive(Debug, Deserialize)]
pub struct CompleteExerciseRequest {
    pub exercise_name: String,
}

#[tracing::instrument(
    name = "Complete exercise",
    skip(sessions, claims, data),
    fields(username = %claims.username, exercise = %data.exercise_name)
)]
pub async fn complete_exercise(
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
    data: web::Json<CompleteExerciseRequest>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let now = Utc::now();
    let result = match sessions.with_session(user_id, |session| {
        session
            .complete_exercise(&data.exercise_name, now)
            .map(|outcome| (outcome, SessionView::from_session(session)))
    }) {
        Ok(result) => result,
        Err(_) => {
            return HttpResponse::NotFound().json(json!({
                "error": "No workout session in progress"
            }));
        }
    };

    match result {
        Ok((CompletionOutcome::Completed { rest_seconds }, view)) => {
            let message = if rest_seconds > 0 {
                format!("Exercise completed, rest for {rest_seconds}s")
            } else {
                "Exercise completed".to_string()
            };
            HttpResponse::Ok().json(ApiResponse::success(message, view))
        }
        Ok((CompletionOutcome::AlreadyCompleted, view)) => {
            HttpResponse::Ok().json(ApiResponse::success("Exercise was already completed", view))
        }
        Err(e @ ExecutionError::Resting(_)) => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(e.to_string()))
        }
        Err(e @ ExecutionError::UnknownExercise(_)) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(e.to_string()))
        }
        Err(ExecutionError::NoActiveSession) => HttpResponse::NotFound().json(json!({
            "error": "No workout session in progress"
        })),
    }
}

#[derive(Debug, Deserialize)]
pub struct FinishSessionRequest {
    #[serde(default)]
    pub confirmed: bool,
    /// Required on top of `confirmed` when exercises were skipped, so
    /// the explicit "you are skipping exercises" warning cannot be
    /// bypassed silently.
    #[serde(default)]
    pub acknowledge_skipped: bool,
}

/// Finish the active session: writes exactly one history record with
/// the derived status, logs the performance, and drops the session.
#[tracing::instrument(
    name = "Finish workout session",
    skip(pool, sessions, claims, data),
    fields(username = %claims.username)
)]
pub async fn finish_session(
    pool: web::Data<PgPool>,
    sessions: web::Data<ExecutionSessions>,
    claims: web::ReqData<Claims>,
    data: web::Json<FinishSessionRequest>,
) -> HttpResponse {
    let user_id = match parse_user_id(&claims) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let session = match sessions.snapshot(user_id) {
        Some(session) => session,
        None => {
            return HttpResponse::NotFound().json(json!({
                "error": "No workout session in progress"
            }));
        }
    };

    if !data.confirmed {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "Are you sure you want to finish this workout?",
        ));
    }
    if !session.all_completed() && !data.acknowledge_skipped {
        return HttpResponse::Conflict().json(ApiResponse::<()>::error(
            "You are skipping exercises! Finish anyway?",
        ));
    }

    let now = Utc::now();
    let status = session.finish_status();
    let entry_id = match db::completed_workouts::insert(
        &pool,
        session.workout.id,
        &session.workout.name,
        &session.workout.exercises,
        user_id,
        session.workout.student_id,
        now,
        status,
    )
    .await
    {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Database error recording completed workout: {}", e);
            return HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to finish workout"));
        }
    };

    let progress = ProgressEntry {
        workout_id: session.workout.id,
        completed_at: now,
        performance: session.completion_percent(),
    };
    if let Err(e) = db::users::append_progress(&pool, user_id, &progress).await {
        // The history record exists; a progress-log failure should not
        // undo the finish.
        tracing::error!("Database error appending progress entry: {}", e);
    }

    sessions.take(user_id);

    HttpResponse::Ok().json(ApiResponse::success(
        "Workout finished",
        json!({
            "id": entry_id,
            "workout_id": session.workout.id,
            "status": status,
            "completed_at": now,
        }),
    ))
}
