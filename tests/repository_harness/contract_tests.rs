//! Macro-generated test suite for the `OrderRepository` contract.
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_insert_and_get`: insert then fetch by the assigned id
//! - `test_get_nonexistent`: unknown id returns None
//! - `test_list_empty`: empty store lists nothing
//! - `test_list_multiple`: every inserted row is listed once
//! - `test_ids_are_unique`: each insert gets its own id
//! - `test_update_existing`: all five fields overwritten, id kept
//! - `test_update_nonexistent`: no error, nothing created
//! - `test_update_keeps_rule_breaking_values`: repository stores what it is given
//! - `test_delete_existing`: row gone, others untouched
//! - `test_delete_nonexistent`: no error, row count unchanged
//!
//! ## Edge Cases
//! - `test_text_is_stored_verbatim`: quotes, accents and SQL fragments survive
//! - `test_concurrent_inserts`: parallel inserts from spawned tasks

/// Generate a full `OrderRepository` conformance test suite.
///
/// `$factory` is evaluated inside each (async) test, so it may contain
/// `.await`. The returned repository must be `Clone + 'static` for the
/// concurrency test.
#[macro_export]
macro_rules! order_repository_tests {
    ($factory:expr) => {
        mod order_repository_contract_tests {
            use super::*;
            use chrono::NaiveDate;
            use pedidos::core::{NewPedido, OrderRepository};

            // ==================================================================
            // Insert & Get
            // ==================================================================

            #[tokio::test]
            async fn test_insert_and_get() {
                let repo = $factory;
                let pedido = sample_pedido("Ana Gomez");
                repo.insert(&pedido).await.unwrap();

                let rows = repo.list_all().await.unwrap();
                assert_eq!(rows.len(), 1);
                let id = rows[0].id_pedido;

                let fetched = repo.get_by_id(id).await.unwrap();
                assert!(fetched.is_some(), "Order should exist after insert");
                let fetched = fetched.unwrap();
                assert_eq!(fetched.id_pedido, id);
                assert_eq!(fetched.nombre, "Ana Gomez");
                assert_eq!(fetched.direccion, "Calle 1");
                assert_eq!(fetched.numero, "987654321");
                assert_eq!(fetched.cantidad_bidones, 3);
                assert_eq!(fetched.fecha, NaiveDate::from_ymd_opt(2099, 1, 1).unwrap());
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let repo = $factory;
                assert!(repo.get_by_id(424242).await.unwrap().is_none());
            }

            // ==================================================================
            // List
            // ==================================================================

            #[tokio::test]
            async fn test_list_empty() {
                let repo = $factory;
                assert!(repo.list_all().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_list_multiple() {
                let repo = $factory;
                for pedido in sample_batch(5) {
                    repo.insert(&pedido).await.unwrap();
                }

                let rows = repo.list_all().await.unwrap();
                assert_eq!(rows.len(), 5, "List should return all 5 inserted orders");

                let mut names: Vec<String> = rows.iter().map(|p| p.nombre.clone()).collect();
                names.sort();
                let mut expected: Vec<String> =
                    sample_batch(5).into_iter().map(|p| p.nombre).collect();
                expected.sort();
                assert_eq!(names, expected);
            }

            #[tokio::test]
            async fn test_ids_are_unique() {
                let repo = $factory;
                for pedido in sample_batch(4) {
                    repo.insert(&pedido).await.unwrap();
                }

                let mut ids: Vec<i64> = repo
                    .list_all()
                    .await
                    .unwrap()
                    .iter()
                    .map(|p| p.id_pedido)
                    .collect();
                ids.sort();
                ids.dedup();
                assert_eq!(ids.len(), 4);
            }

            // ==================================================================
            // Update
            // ==================================================================

            #[tokio::test]
            async fn test_update_existing() {
                let repo = $factory;
                repo.insert(&sample_pedido("Ana Gomez")).await.unwrap();
                let id = repo.list_all().await.unwrap()[0].id_pedido;

                let changed = NewPedido {
                    nombre: "Luis Perez".to_string(),
                    direccion: "Avenida 2".to_string(),
                    numero: "123456789".to_string(),
                    cantidad_bidones: 7,
                    fecha: NaiveDate::from_ymd_opt(2099, 12, 31).unwrap(),
                };
                repo.update(id, &changed).await.unwrap();

                let fetched = repo.get_by_id(id).await.unwrap().unwrap();
                assert_eq!(fetched.id_pedido, id);
                assert_eq!(fetched.nombre, "Luis Perez");
                assert_eq!(fetched.direccion, "Avenida 2");
                assert_eq!(fetched.numero, "123456789");
                assert_eq!(fetched.cantidad_bidones, 7);
                assert_eq!(fetched.fecha, NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let repo = $factory;
                repo.update(424242, &sample_pedido("Nadie")).await.unwrap();
                assert!(repo.list_all().await.unwrap().is_empty());
                assert!(repo.get_by_id(424242).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_update_keeps_rule_breaking_values() {
                let repo = $factory;
                repo.insert(&sample_pedido("Ana Gomez")).await.unwrap();
                let id = repo.list_all().await.unwrap()[0].id_pedido;

                let mut changed = sample_pedido("R2D2");
                changed.numero = "12".to_string();
                changed.cantidad_bidones = 0;
                changed.fecha = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
                repo.update(id, &changed).await.unwrap();

                let fetched = repo.get_by_id(id).await.unwrap().unwrap();
                assert_eq!(fetched.nombre, "R2D2");
                assert_eq!(fetched.numero, "12");
                assert_eq!(fetched.cantidad_bidones, 0);
            }

            // ==================================================================
            // Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let repo = $factory;
                repo.insert(&sample_pedido("Ana Gomez")).await.unwrap();
                repo.insert(&sample_pedido("Luis Perez")).await.unwrap();
                let rows = repo.list_all().await.unwrap();
                let doomed = rows.iter().find(|p| p.nombre == "Ana Gomez").unwrap().id_pedido;

                repo.delete(doomed).await.unwrap();

                assert!(repo.get_by_id(doomed).await.unwrap().is_none());
                let remaining = repo.list_all().await.unwrap();
                assert_eq!(remaining.len(), 1);
                assert_eq!(remaining[0].nombre, "Luis Perez");
            }

            #[tokio::test]
            async fn test_delete_nonexistent() {
                let repo = $factory;
                repo.insert(&sample_pedido("Ana Gomez")).await.unwrap();

                repo.delete(424242).await.unwrap();
                assert_eq!(repo.list_all().await.unwrap().len(), 1);
            }

            // ==================================================================
            // Edge cases
            // ==================================================================

            #[tokio::test]
            async fn test_text_is_stored_verbatim() {
                let repo = $factory;
                let mut pedido = sample_pedido("Ana Gomez");
                pedido.direccion = "Pasaje O'Higgins #12 -- ñandú; DROP TABLE Pedido".to_string();
                repo.insert(&pedido).await.unwrap();

                let rows = repo.list_all().await.unwrap();
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].direccion, pedido.direccion);
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let repo = $factory;
                let mut handles = Vec::new();
                for pedido in sample_batch(6) {
                    let repo = repo.clone();
                    handles.push(tokio::spawn(async move { repo.insert(&pedido).await }));
                }
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }
                assert_eq!(repo.list_all().await.unwrap().len(), 6);
            }
        }
    };
}
