//! Image processing API endpoint.
//!
//! Placeholder: returns a fixed sample event whatever was uploaded.

use crate::api::{ApiContext, ApiReply, ApiResponse, ApiStatus, Event};

/// Handle POST /api/process-images.
pub(crate) fn process_images(_ctx: &ApiContext<'_>) -> ApiReply {
    ApiReply::ok(ApiResponse {
        events: Some(vec![sample_event()]),
        ..ApiResponse::new(ApiStatus::Success, "Image processing would happen here")
    })
}

fn sample_event() -> Event {
    Event {
        title: "Sample Event".to_owned(),
        date: "2024-01-15".to_owned(),
        time: "10:00 AM".to_owned(),
        description: "This is a placeholder event".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_process_images_returns_one_event() {
        let reply = process_images(&ApiContext { version: "" });
        let events = reply.body.events.unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert!(!event.title.is_empty());
        assert!(!event.date.is_empty());
        assert!(!event.time.is_empty());
        assert!(!event.description.is_empty());
    }

    #[test]
    fn test_process_images_serialization() {
        let reply = process_images(&ApiContext { version: "" });
        let json = serde_json::to_value(&reply.body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "success",
                "message": "Image processing would happen here",
                "events": [{
                    "title": "Sample Event",
                    "date": "2024-01-15",
                    "time": "10:00 AM",
                    "description": "This is a placeholder event"
                }]
            })
        );
    }
}
