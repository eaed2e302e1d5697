use axum::{extract::State, response::Html};
use chrono::{DateTime, Local, TimeZone};
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;

pub async fn info(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let count = state.person_service.count().await?;
    Ok(Html(render_info(count, &Local::now())))
}

pub(crate) fn render_info<Tz>(count: u64, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "<p>Phonebook has info for {count} people</p><p>{}</p>",
        now.format("%a %b %d %Y %H:%M:%S GMT%z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn renders_count_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        assert_eq!(
            render_info(4, &now),
            "<p>Phonebook has info for 4 people</p><p>Sat Oct 17 2026 09:30:00 GMT+0000</p>"
        );
    }

    #[test]
    fn renders_local_offset() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2026, 1, 5, 18, 0, 0).unwrap();
        assert!(render_info(0, &now).ends_with("Mon Jan 05 2026 18:00:00 GMT+0200</p>"));
    }
}
