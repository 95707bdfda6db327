// Day-price grid integration tests against the in-memory store

mod common;

use common::{MemoryStore, date, room};
use hostal_client::{
    BulkEditFlow, BulkEditState, BulkSubmit, Coalescer, ConflictChoice, DayPriceStore, GridEditor,
};
use rust_decimal::Decimal;
use shared::client::{BulkUpsertRequest, ConflictCheckRequest, DayPriceUpsert};
use shared::error::ErrorCode;
use shared::models::DayPricePatch;
use std::sync::Arc;
use std::time::Duration;

fn store_with_rooms() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new(vec![
        room(1, "Dorm 6", 6),
        room(2, "Double", 2),
    ]))
}

// ==================== Range reads ====================

#[tokio::test]
async fn get_range_rejects_empty_range() {
    let store = store_with_rooms();
    let err = store
        .get_range(&[1], date(2025, 7, 5), date(2025, 7, 5))
        .await
        .unwrap_err();
    let app: shared::error::AppError = err.into();
    assert_eq!(app.code, ErrorCode::RangeInvalid);
}

#[tokio::test]
async fn get_range_allows_gaps() {
    let store = store_with_rooms();
    store.seed(1, date(2025, 7, 1), Some(80.0), None);
    store.seed(1, date(2025, 7, 3), Some(90.0), None);

    let rows = store
        .get_range(&[1], date(2025, 7, 1), date(2025, 7, 5))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let dates: Vec<_> = rows[0].prices.iter().map(|p| p.date).collect();
    assert_eq!(dates, vec![date(2025, 7, 1), date(2025, 7, 3)]);
}

// ==================== Single upsert (partial update) ====================

#[tokio::test]
async fn upsert_single_partial_update_roundtrip() {
    let store = store_with_rooms();
    store.seed(1, date(2025, 7, 1), Some(80.0), Some(4));

    // Price-only write must leave capacity untouched
    store
        .upsert_single(&DayPriceUpsert {
            room_id: 1,
            date: date(2025, 7, 1),
            price: Some(Decimal::from(100)),
            available_capacity: None,
        })
        .await
        .unwrap();

    let rows = store
        .get_range(&[1], date(2025, 7, 1), date(2025, 7, 2))
        .await
        .unwrap();
    let cell = &rows[0].prices[0];
    assert_eq!(cell.price, Some(Decimal::from(100)));
    assert_eq!(cell.available_capacity, Some(4));
}

#[tokio::test]
async fn upsert_single_creates_missing_cell() {
    let store = store_with_rooms();
    let created = store
        .upsert_single(&DayPriceUpsert {
            room_id: 2,
            date: date(2025, 7, 10),
            price: Some(Decimal::from(55)),
            available_capacity: None,
        })
        .await
        .unwrap();
    assert_eq!(created.room_id, 2);
    assert_eq!(created.price, Some(Decimal::from(55)));
    assert_eq!(created.available_capacity, None);
}

// ==================== Conflict detection ====================

#[tokio::test]
async fn check_conflicts_is_exhaustive_over_cross_product() {
    let store = store_with_rooms();
    // Single populated cell at the far corner of the range
    store.seed(2, date(2025, 7, 5), None, Some(1));

    let hit = ConflictCheckRequest {
        room_ids: vec![1, 2],
        from: date(2025, 7, 1),
        to: date(2025, 7, 5),
    };
    assert!(store.check_conflicts(&hit).await.unwrap());

    // Same probe excluding the populated room
    let miss = ConflictCheckRequest {
        room_ids: vec![1],
        from: date(2025, 7, 1),
        to: date(2025, 7, 5),
    };
    assert!(!store.check_conflicts(&miss).await.unwrap());

    // Same rooms, range just short of the populated date
    let miss = ConflictCheckRequest {
        room_ids: vec![1, 2],
        from: date(2025, 7, 1),
        to: date(2025, 7, 4),
    };
    assert!(!store.check_conflicts(&miss).await.unwrap());
}

// ==================== Bulk upsert semantics ====================

#[tokio::test]
async fn bulk_fill_gaps_never_touches_populated_cells() {
    let store = store_with_rooms();
    let seeded = store.seed(1, date(2025, 7, 2), Some(120.0), Some(2));

    let written = store
        .bulk_upsert(&BulkUpsertRequest {
            room_ids: vec![1],
            from: date(2025, 7, 1),
            to: date(2025, 7, 3),
            price: Some(Decimal::from(90)),
            available_capacity: None,
            overwrite: false,
        })
        .await
        .unwrap();

    // 3 inclusive days, one already populated
    assert_eq!(written.written, 2);
    let untouched = store.cell_by_id(seeded).unwrap();
    assert_eq!(untouched.price, Some(Decimal::from(120)));
    assert_eq!(untouched.available_capacity, Some(2));
}

#[tokio::test]
async fn bulk_overwrite_replaces_every_cell() {
    let store = store_with_rooms();
    store.seed(1, date(2025, 7, 2), Some(120.0), Some(2));

    let written = store
        .bulk_upsert(&BulkUpsertRequest {
            room_ids: vec![1, 2],
            from: date(2025, 7, 1),
            to: date(2025, 7, 3),
            price: Some(Decimal::from(90)),
            available_capacity: Some(5),
            overwrite: true,
        })
        .await
        .unwrap();

    // 2 rooms x 3 inclusive days
    assert_eq!(written.written, 6);
    let rows = store
        .get_range(&[1, 2], date(2025, 7, 1), date(2025, 7, 4))
        .await
        .unwrap();
    for row in rows {
        assert_eq!(row.prices.len(), 3);
        for cell in row.prices {
            assert_eq!(cell.price, Some(Decimal::from(90)));
            assert_eq!(cell.available_capacity, Some(5));
        }
    }
}

// ==================== Per-cell editor ====================

#[tokio::test(start_paused = true)]
async fn burst_of_edits_issues_one_write_with_final_value() {
    let store = store_with_rooms();
    let id = store.seed(2, date(2025, 7, 1), Some(80.0), None);
    let editor = GridEditor::new(Arc::clone(&store), Coalescer::new(Duration::from_millis(500)));
    editor
        .load(&[2], date(2025, 7, 1), date(2025, 7, 2))
        .await
        .unwrap();

    // 80 -> 85 -> 90 inside the debounce window
    let h1 = editor.edit_price(id, Decimal::from(85)).unwrap();
    let h2 = editor.edit_price(id, Decimal::from(90)).unwrap();
    assert!(!h1.await.unwrap());
    assert!(h2.await.unwrap());

    assert_eq!(store.patch_calls(), 1);
    assert_eq!(
        store.cell_by_id(id).unwrap().price,
        Some(Decimal::from(90))
    );
    assert_eq!(editor.cell(id).unwrap().price, Some(Decimal::from(90)));
}

#[tokio::test(start_paused = true)]
async fn edits_to_distinct_cells_are_independent() {
    let store = store_with_rooms();
    let first = store.seed(1, date(2025, 7, 1), Some(80.0), None);
    let second = store.seed(1, date(2025, 7, 2), Some(80.0), None);
    let editor = GridEditor::new(Arc::clone(&store), Coalescer::default());
    editor
        .load(&[1], date(2025, 7, 1), date(2025, 7, 3))
        .await
        .unwrap();

    let h1 = editor.edit_price(first, Decimal::from(70)).unwrap();
    let h2 = editor.edit_price(second, Decimal::from(75)).unwrap();
    assert!(h1.await.unwrap());
    assert!(h2.await.unwrap());

    assert_eq!(store.patch_calls(), 2);
    assert_eq!(store.cell_by_id(first).unwrap().price, Some(Decimal::from(70)));
    assert_eq!(store.cell_by_id(second).unwrap().price, Some(Decimal::from(75)));
}

#[tokio::test(start_paused = true)]
async fn failed_write_rolls_back_to_last_known_good() {
    let store = store_with_rooms();
    let id = store.seed(2, date(2025, 7, 1), Some(80.0), Some(2));
    let editor = GridEditor::new(Arc::clone(&store), Coalescer::default());
    let mut failures = editor.subscribe_failures();
    editor
        .load(&[2], date(2025, 7, 1), date(2025, 7, 2))
        .await
        .unwrap();

    store.set_fail_patches(true);
    let handle = editor.edit_price(id, Decimal::from(99)).unwrap();
    // Optimistic value shows immediately
    assert_eq!(editor.cell(id).unwrap().price, Some(Decimal::from(99)));
    assert!(handle.await.unwrap());

    // Rolled back to the value the backend last acknowledged
    let cell = editor.cell(id).unwrap();
    assert_eq!(cell.price, Some(Decimal::from(80)));
    assert_eq!(cell.available_capacity, Some(2));

    let notice = failures.try_recv().expect("failure notice emitted");
    assert_eq!(notice.cell_id, id);
    assert_eq!(notice.error.code, ErrorCode::BackendUnavailable);

    // Backend untouched
    assert_eq!(store.cell_by_id(id).unwrap().price, Some(Decimal::from(80)));
}

#[tokio::test(start_paused = true)]
async fn editing_unloaded_cell_is_rejected() {
    let store = store_with_rooms();
    let editor = GridEditor::new(Arc::clone(&store), Coalescer::default());
    let err = editor.edit_price(404, Decimal::from(10)).unwrap_err();
    let app: shared::error::AppError = err.into();
    assert_eq!(app.code, ErrorCode::RateNotFound);
}

// ==================== Bulk-edit flow ====================

#[tokio::test]
async fn bulk_flow_skips_prompt_when_no_conflicts() {
    let store = store_with_rooms();
    let mut flow = BulkEditFlow::new(Arc::clone(&store));

    let outcome = flow
        .submit(
            vec![1],
            date(2025, 8, 1),
            date(2025, 8, 3),
            DayPricePatch::price(Decimal::from(90)),
        )
        .await
        .unwrap();

    match outcome {
        BulkSubmit::Applied(written) => assert_eq!(written.written, 3),
        BulkSubmit::ConflictPrompt => panic!("prompt must be skipped without conflicts"),
    }
    assert!(matches!(flow.state(), BulkEditState::Idle));
}

#[tokio::test]
async fn bulk_flow_prompts_then_fills_gaps() {
    let store = store_with_rooms();
    let seeded = store.seed(1, date(2025, 8, 2), Some(150.0), None);
    let mut flow = BulkEditFlow::new(Arc::clone(&store));

    let outcome = flow
        .submit(
            vec![1],
            date(2025, 8, 1),
            date(2025, 8, 3),
            DayPricePatch::price(Decimal::from(90)),
        )
        .await
        .unwrap();
    assert!(matches!(outcome, BulkSubmit::ConflictPrompt));
    assert!(matches!(flow.state(), BulkEditState::AwaitingChoice(_)));

    let written = flow.resolve(ConflictChoice::FillGaps).await.unwrap().unwrap();
    assert_eq!(written.written, 2);
    assert_eq!(
        store.cell_by_id(seeded).unwrap().price,
        Some(Decimal::from(150))
    );
    assert!(matches!(flow.state(), BulkEditState::Idle));
}

#[tokio::test]
async fn bulk_flow_prompts_then_overwrites() {
    let store = store_with_rooms();
    let seeded = store.seed(1, date(2025, 8, 2), Some(150.0), None);
    let mut flow = BulkEditFlow::new(Arc::clone(&store));

    flow.submit(
        vec![1],
        date(2025, 8, 1),
        date(2025, 8, 3),
        DayPricePatch::price(Decimal::from(90)),
    )
    .await
    .unwrap();
    let written = flow
        .resolve(ConflictChoice::Overwrite)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(written.written, 3);
    assert_eq!(
        store.cell_by_id(seeded).unwrap().price,
        Some(Decimal::from(90))
    );
}

#[tokio::test]
async fn bulk_flow_cancel_writes_nothing() {
    let store = store_with_rooms();
    store.seed(1, date(2025, 8, 2), Some(150.0), None);
    let mut flow = BulkEditFlow::new(Arc::clone(&store));

    flow.submit(
        vec![1],
        date(2025, 8, 1),
        date(2025, 8, 3),
        DayPricePatch::price(Decimal::from(90)),
    )
    .await
    .unwrap();
    let outcome = flow.resolve(ConflictChoice::Cancel).await.unwrap();
    assert!(outcome.is_none());

    // Only the seeded cell exists
    let rows = store
        .get_range(&[1], date(2025, 8, 1), date(2025, 8, 4))
        .await
        .unwrap();
    assert_eq!(rows[0].prices.len(), 1);
}

#[tokio::test]
async fn bulk_flow_validates_locally() {
    let store = store_with_rooms();
    let mut flow = BulkEditFlow::new(Arc::clone(&store));

    let err = flow
        .submit(
            vec![1],
            date(2025, 8, 3),
            date(2025, 8, 1),
            DayPricePatch::price(Decimal::from(90)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::RangeInvalid);

    let err = flow
        .submit(
            vec![1],
            date(2025, 8, 1),
            date(2025, 8, 3),
            DayPricePatch::default(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn bulk_flow_rejects_resolve_without_prompt() {
    let store = store_with_rooms();
    let mut flow = BulkEditFlow::new(Arc::clone(&store));
    let err = flow.resolve(ConflictChoice::Overwrite).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn bulk_flow_surfaces_single_aggregated_failure() {
    let store = store_with_rooms();
    store.set_fail_bulk(true);
    let mut flow = BulkEditFlow::new(Arc::clone(&store));

    let err = flow
        .submit(
            vec![1],
            date(2025, 8, 1),
            date(2025, 8, 3),
            DayPricePatch::price(Decimal::from(90)),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BackendUnavailable);
    assert!(matches!(flow.state(), BulkEditState::Idle));
}
