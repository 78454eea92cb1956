#[cfg(test)]
mod tests {
    use receipt_processor::api::{create_app, AppState};
    use receipt_processor::models::{Item, PointsResponse, Receipt, ReceiptIdResponse};
    use receipt_processor::{ReceiptError, ReceiptService, ReceiptStore};
    use std::collections::HashSet;
    use std::time::Duration;

    fn receipt_for(index: usize) -> Receipt {
        // Vary the item count so each task expects a different score
        let items = (0..(index % 5) + 1)
            .map(|_| Item::new("Gatorade", "2.25"))
            .collect::<Vec<_>>();
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items,
            total: "9.00".to_string(),
        }
    }

    fn expected_points(index: usize) -> i64 {
        // 14 retailer + 50 round + 25 quarter + 10 afternoon + 5 per pair
        99 + ((index % 5 + 1) / 2) as i64 * 5
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_parallel_submissions_are_unique_and_consistent() {
        let service = ReceiptService::new(ReceiptStore::new());

        let handles: Vec<_> = (0..500)
            .map(|index| {
                let service = service.clone();
                tokio::spawn(async move {
                    let id = service.submit(&receipt_for(index)).await.unwrap();
                    // Read back while other tasks are still writing
                    let points = service.points(&id).await.unwrap();
                    (id, index, points)
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let (id, index, points) = handle.await.unwrap();
            assert_eq!(points, expected_points(index));
            assert!(ids.insert(id), "duplicate id issued");
        }
        assert_eq!(ids.len(), 500);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_readers_proceed_alongside_writers() {
        let service = ReceiptService::default();
        let known = service.submit(&receipt_for(0)).await.unwrap();

        let writers: Vec<_> = (0..100)
            .map(|index| {
                let service = service.clone();
                tokio::spawn(async move { service.submit(&receipt_for(index)).await.map(|_| ()) })
            })
            .collect();
        let readers: Vec<_> = (0..100)
            .map(|_| {
                let service = service.clone();
                let known = known.clone();
                tokio::spawn(async move {
                    assert_eq!(service.points(&known).await, Ok(expected_points(0)));
                    assert!(matches!(
                        service.points("missing").await,
                        Err(ReceiptError::NotFound(_))
                    ));
                })
            })
            .collect();

        let all = async {
            for writer in writers {
                writer.await.unwrap().unwrap();
            }
            for reader in readers {
                reader.await.unwrap();
            }
        };
        tokio::time::timeout(Duration::from_secs(10), all)
            .await
            .expect("store operations should never stall");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_end_to_end_over_tcp() {
        let port = portpicker::pick_unused_port().expect("No free port");
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .unwrap();
        let app = create_app(AppState::default());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = reqwest::Client::new();
        let base = format!("http://127.0.0.1:{}", port);

        let submitted: ReceiptIdResponse = client
            .post(format!("{}/receipts/process", base))
            .json(&receipt_for(3))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap();

        let points: PointsResponse = client
            .get(format!("{}/receipts/{}/points", base, submitted.id))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(points.points, expected_points(3));

        let missing = client
            .get(format!("{}/receipts/{}/points", base, "nope"))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), reqwest::StatusCode::NOT_FOUND);
    }
}
