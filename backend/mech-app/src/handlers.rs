use crate::error::{AppError, Result as AppErrorResult};
use crate::media::FileMediaSource;

use mech_auth::{AuthFlow, AuthState, FormFields, Transition};
use mech_capture::{PlaceholderScorer, UploadFlow, UploadSettings, format_time_ago};
use mech_core::{
    AnalysisReport, BlobStorage, ErrorLocation, MediaSourceKind, PlayerCard, ProgressSummary,
    Session, UploadKind, UploadRecord, verdict,
};

use std::panic::Location;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Value, json};

pub async fn register(flow: &AuthFlow, fields: FormFields) -> AppErrorResult<Value> {
    let transition = flow.register(AuthState::new(), fields).await;
    let session = into_session(transition)?;

    Ok(session_json(&session))
}

pub async fn sign_in(flow: &AuthFlow, fields: FormFields, sign_out: bool) -> AppErrorResult<Value> {
    let transition = flow.sign_in(AuthState::new(), fields).await;
    if let Some(e) = transition.error {
        return Err(e.into());
    }

    let mut output = match transition.state.session() {
        Some(session) if !sign_out => {
            let mut dashboard = session_json(session);
            dashboard["progress"] = json!(ProgressSummary::demo());
            dashboard
        }
        Some(session) => session_json(session),
        None => json!({ "status": transition.state.name() }),
    };

    if sign_out {
        let signed_out = flow.sign_out(transition.state).await;
        output["status"] = json!(signed_out.state.name());
    }

    Ok(output)
}

/// Uploads each file in order through one flow, then reports the flow's history.
pub async fn upload(
    storage: Arc<dyn BlobStorage>,
    settings: UploadSettings,
    kind: &str,
    files: Vec<PathBuf>,
    source: &str,
) -> AppErrorResult<Value> {
    let kind: UploadKind = kind.parse()?;
    let source: MediaSourceKind = source.parse()?;
    let picks = files.len();

    let flow = UploadFlow::new(
        storage,
        Arc::new(FileMediaSource::new(files)),
        Arc::new(PlaceholderScorer),
        settings,
    );
    flow.select_kind(kind).await;

    for _ in 0..picks {
        if flow.capture(source).await?.is_none() {
            break;
        }
    }

    let history = flow.history().await;
    if history.is_empty() {
        return Ok(json!({ "status": "cancelled" }));
    }

    let now = Utc::now();
    Ok(json!({
        "status": "uploaded",
        "count": history.len(),
        "uploads": history.iter().map(|record| record_json(record, now)).collect::<Vec<_>>(),
    }))
}

fn record_json(record: &UploadRecord, now: DateTime<Utc>) -> Value {
    json!({
        "kind": record.kind,
        "score": record.score,
        "verdict": verdict(record.score),
        "video_url": record.video_url,
        "uploaded_at": record.uploaded_at.to_rfc3339(),
        "uploaded": format_time_ago(record.uploaded_at, now),
    })
}

pub fn analysis(index: Option<usize>) -> AppErrorResult<Value> {
    let reports = AnalysisReport::demo_reports();

    match index {
        Some(i) => {
            let report = reports.get(i).ok_or_else(|| AppError::NotFound {
                message: format!("No analysis at index {} ({} available)", i, reports.len()),
                location: ErrorLocation::from(Location::caller()),
            })?;
            Ok(report_json(report))
        }
        None => Ok(Value::Array(reports.iter().map(report_json).collect())),
    }
}

pub fn profile() -> Value {
    json!(PlayerCard::demo())
}

fn report_json(report: &AnalysisReport) -> Value {
    json!({
        "id": report.id,
        "kind": report.kind,
        "date": report.date_label,
        "score": report.score,
        "verdict": report.verdict(),
        "strengths": report.strengths,
        "improvements": report.improvements,
        "drills": report.drills,
        "mechanics": report.mechanics,
    })
}

fn into_session(transition: Transition) -> AppErrorResult<Session> {
    if let Some(e) = transition.error {
        return Err(e.into());
    }

    transition.state.session().cloned().ok_or_else(|| AppError::NotFound {
        message: "No session after a successful operation".to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn session_json(session: &Session) -> Value {
    json!({
        "status": "authenticated",
        "user_id": session.user_id.to_string(),
        "email": session.email,
        "expires_at": session.expires_at.map(|t| t.to_rfc3339()),
    })
}
