use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use itinerary_engine::domain::itinerary::{
    ActivityItem, CustomActivity, Day, DragAction, DragController, DropTarget, ItemType,
    ItineraryAggregate, ItineraryCommand, ItineraryStatus, MoveDirection,
};
use itinerary_engine::models::ItineraryDetail;
use itinerary_engine::store::{InMemoryItineraryStore, ItineraryRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,itinerary_engine=debug")),
        )
        .init();

    tracing::info!("🚀 Starting Itinerary Ordering Engine Demo");

    // === 1. Seed the store, as if the agency had built this trip earlier ===
    let store = Arc::new(InMemoryItineraryStore::new());
    let itinerary_id = Uuid::new_v4();
    store.seed(three_day_trip(itinerary_id)).await;

    // === 2. Fetch and hydrate the aggregate ===
    let detail = store.fetch(itinerary_id).await?;
    let mut itinerary = ItineraryAggregate::hydrate(detail);
    tracing::info!(
        itinerary_id = %itinerary.id,
        day_count = itinerary.days.len(),
        "✅ Itinerary hydrated"
    );

    // === 3. Build out day 1 ===
    for title in ["Check-in", "Harbor walk", "Welcome dinner"] {
        itinerary.handle_command(ItineraryCommand::AddActivity {
            day: 0,
            item: ActivityItem::custom(
                ItemType::CustomActivity,
                CustomActivity {
                    title: title.to_string(),
                    icon: None,
                    description: None,
                },
            ),
        })?;
    }
    itinerary.handle_command(ItineraryCommand::NudgeActivity {
        day: 0,
        index: 2,
        direction: MoveDirection::Up,
    })?;

    // === 4. Drag the harbor walk onto day 3 ===
    let mut drag = DragController::new();
    drag.reduce(&mut itinerary, DragAction::BeginDrag { day: 0, index: 2 })?;
    drag.reduce(
        &mut itinerary,
        DragAction::HoverTarget {
            target: DropTarget::DayHeader { day: 2 },
        },
    )?;
    if let Some(event) = drag.reduce(&mut itinerary, DragAction::CommitMove)? {
        tracing::info!(?event, "✅ Drag committed");
    }

    // === 5. Move day 3 to the front; numbers, dates, titles follow ===
    itinerary.handle_command(ItineraryCommand::ReorderDays { from: 2, to: 0 })?;
    for day in &itinerary.days {
        tracing::info!(
            day_number = day.day_number,
            actual_date = %day.actual_date,
            title = day.title.as_deref().unwrap_or("-"),
            activity_count = day.activities.len(),
            "day"
        );
    }

    // === 6. Save the complete snapshot and acknowledge ===
    store.save(itinerary.id, itinerary.save_request()).await?;
    itinerary.mark_saved();
    tracing::info!(dirty = itinerary.dirty, "🎉 Demo complete!");

    Ok(())
}

/// 3-day itinerary starting 2025-06-01 with default day titles.
fn three_day_trip(id: Uuid) -> ItineraryDetail {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    let days = (0..3)
        .map(|i| {
            let mut day = Day::new(i + 1, start + Duration::days(i as i64));
            day.title = Some(Day::default_title(i + 1));
            day
        })
        .collect();

    ItineraryDetail {
        id,
        status: ItineraryStatus::Draft,
        currency: "EUR".to_string(),
        start_date: start,
        end_date: start + Duration::days(2),
        days,
    }
}
